use crate::core::{InverseNormalizer, LanguageCode, Punctuator};
use crate::utils::error::{DisplayError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct BatchRequest<'a> {
    texts: &'a [String],
    lang: LanguageCode,
}

#[derive(Debug, Deserialize)]
struct BatchResponse {
    texts: Vec<String>,
}

pub fn build_client(timeout_seconds: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| DisplayError::LoadingError {
            component: "http client".to_string(),
            message: e.to_string(),
        })
}

async fn post_batch(
    client: &Client,
    engine: &'static str,
    endpoint: &str,
    texts: &[String],
    lang: LanguageCode,
) -> Result<Vec<String>> {
    tracing::debug!("POST {} ({} texts, lang={})", endpoint, texts.len(), lang);

    let response = client
        .post(endpoint)
        .json(&BatchRequest { texts, lang })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DisplayError::engine(
            engine,
            format!("{} returned {}: {}", endpoint, status, body),
        ));
    }

    let bytes = response.bytes().await?;
    let parsed: BatchResponse = serde_json::from_slice(&bytes)?;

    if parsed.texts.len() != texts.len() {
        return Err(DisplayError::engine(
            engine,
            format!(
                "sent {} texts but received {}",
                texts.len(),
                parsed.texts.len()
            ),
        ));
    }

    Ok(parsed.texts)
}

/// ITN sidecar reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpInverseNormalizer {
    client: Client,
    endpoint: String,
}

impl HttpInverseNormalizer {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("itn_url", &endpoint).map_err(|e| DisplayError::LoadingError {
            component: "itn engine".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl InverseNormalizer for HttpInverseNormalizer {
    async fn inverse_normalize(&self, texts: &[String], lang: LanguageCode) -> Result<Vec<String>> {
        post_batch(&self.client, "itn", &self.endpoint, texts, lang).await
    }
}

/// Punctuation sidecar for one language.
#[derive(Debug, Clone)]
pub struct HttpPunctuator {
    client: Client,
    endpoint: String,
    lang: LanguageCode,
}

impl HttpPunctuator {
    pub fn new(client: Client, endpoint: impl Into<String>, lang: LanguageCode) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("punctuation_url", &endpoint).map_err(|e| DisplayError::LoadingError {
            component: format!("punctuator[{}]", lang),
            message: e.to_string(),
        })?;
        Ok(Self {
            client,
            endpoint,
            lang,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Punctuator for HttpPunctuator {
    async fn punctuate(&self, texts: &[String]) -> Result<Vec<String>> {
        post_batch(&self.client, "punctuation", &self.endpoint, texts, self.lang).await
    }
}
