use crate::domain::model::LanguageCode;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inverse text normalization: spoken form in, display form out.
///
/// Implementations return one output per input, in order.
#[async_trait]
pub trait InverseNormalizer: Send + Sync {
    async fn inverse_normalize(&self, texts: &[String], lang: LanguageCode) -> Result<Vec<String>>;
}

/// Punctuation restoration bound to a single language.
#[async_trait]
pub trait Punctuator: Send + Sync {
    async fn punctuate(&self, texts: &[String]) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// 引擎以 sidecar 服務形式透過 HTTP 呼叫
    Http,
    /// 原樣輸出，不做任何轉換
    Passthrough,
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn engine_kind(&self) -> EngineKind;
    fn itn_url(&self) -> &str;
    fn punctuation_url(&self) -> &str;
    fn punctuation_overrides(&self) -> HashMap<LanguageCode, String>;
    fn timeout_seconds(&self) -> u64;
}
