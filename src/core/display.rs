use crate::core::{DisplayRequest, DisplayResult, EngineTable};
use crate::utils::error::{DisplayError, Result};
use chrono::Utc;
use std::sync::Arc;

/// Runs ITN and, when asked, punctuation over a single piece of text.
#[derive(Clone)]
pub struct DisplayService {
    engines: Arc<EngineTable>,
}

impl DisplayService {
    pub fn new(engines: Arc<EngineTable>) -> Self {
        Self { engines }
    }

    pub async fn display(&self, request: DisplayRequest) -> Result<DisplayResult> {
        let lang = request.lang_code;

        let normalized = self
            .engines
            .itn()
            .inverse_normalize(std::slice::from_ref(&request.text), lang)
            .await?;
        let mut result = first_of("itn", normalized)?;

        if request.punctuation {
            let punctuated = self
                .engines
                .punctuator(lang)
                .punctuate(std::slice::from_ref(&result))
                .await?;
            result = first_of("punctuation", punctuated)?;
        }

        Ok(DisplayResult::new(request.text, result, Utc::now()))
    }
}

// 單筆輸入必須回傳恰好一筆結果
fn first_of(engine: &'static str, batch: Vec<String>) -> Result<String> {
    if batch.len() != 1 {
        return Err(DisplayError::engine(
            engine,
            format!("expected 1 result, got {}", batch.len()),
        ));
    }
    batch
        .into_iter()
        .next()
        .ok_or_else(|| DisplayError::engine(engine, "empty batch"))
}
