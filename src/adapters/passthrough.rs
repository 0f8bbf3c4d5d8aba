use crate::core::{InverseNormalizer, LanguageCode, Punctuator};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 原樣回傳輸入，用於沒有 sidecar 的本機開發
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughNormalizer;

#[async_trait]
impl InverseNormalizer for PassthroughNormalizer {
    async fn inverse_normalize(&self, texts: &[String], _lang: LanguageCode) -> Result<Vec<String>> {
        Ok(texts.to_vec())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughPunctuator;

#[async_trait]
impl Punctuator for PassthroughPunctuator {
    async fn punctuate(&self, texts: &[String]) -> Result<Vec<String>> {
        Ok(texts.to_vec())
    }
}
