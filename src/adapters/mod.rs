// Adapters layer: concrete engine implementations behind the domain ports.

pub mod http;
pub mod passthrough;

use crate::core::{ConfigProvider, EngineKind, EngineTable, InverseNormalizer, Punctuator};
use crate::utils::error::Result;
use std::sync::Arc;

pub use http::{HttpInverseNormalizer, HttpPunctuator};
pub use passthrough::{PassthroughNormalizer, PassthroughPunctuator};

/// 依設定建立整張引擎表；任何一個引擎載入失敗都視為啟動失敗
pub fn build_engines<C: ConfigProvider + ?Sized>(config: &C) -> Result<EngineTable> {
    match config.engine_kind() {
        EngineKind::Passthrough => {
            tracing::warn!("Using passthrough engines, text is returned unchanged");
            EngineTable::build(Arc::new(PassthroughNormalizer), |_| {
                Ok(Arc::new(PassthroughPunctuator) as Arc<dyn Punctuator>)
            })
        }
        EngineKind::Http => {
            let client = http::build_client(config.timeout_seconds())?;
            let itn: Arc<dyn InverseNormalizer> =
                Arc::new(HttpInverseNormalizer::new(client.clone(), config.itn_url())?);
            tracing::info!("ITN engine: {}", config.itn_url());

            let overrides = config.punctuation_overrides();
            let template = config.punctuation_url();
            EngineTable::build(itn, |lang| {
                let endpoint = overrides
                    .get(&lang)
                    .cloned()
                    .unwrap_or_else(|| lang.expand_template(template));
                let punctuator = HttpPunctuator::new(client.clone(), endpoint, lang)?;
                tracing::info!("Punctuation engine [{}]: {}", lang, punctuator.endpoint());
                Ok(Arc::new(punctuator) as Arc<dyn Punctuator>)
            })
        }
    }
}
