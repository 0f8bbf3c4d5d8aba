use crate::core::{InverseNormalizer, LanguageCode, Punctuator};
use crate::utils::error::Result;
use std::sync::Arc;

/// Engines built once at startup: one ITN engine plus one punctuator per language.
///
/// Immutable after construction; shared across requests behind an `Arc`.
pub struct EngineTable {
    itn: Arc<dyn InverseNormalizer>,
    punctuators: [Arc<dyn Punctuator>; LanguageCode::COUNT],
}

impl EngineTable {
    /// 為每個語言呼叫 `make_punctuator` 建立實例，任一失敗即中止
    pub fn build<F>(itn: Arc<dyn InverseNormalizer>, mut make_punctuator: F) -> Result<Self>
    where
        F: FnMut(LanguageCode) -> Result<Arc<dyn Punctuator>>,
    {
        let mut built: Vec<Arc<dyn Punctuator>> = Vec::with_capacity(LanguageCode::COUNT);
        for lang in LanguageCode::ALL {
            built.push(make_punctuator(lang)?);
            tracing::debug!("Punctuator ready for '{}'", lang);
        }

        // built[i] 對應 LanguageCode::ALL[i]
        let punctuators = std::array::from_fn(|i| Arc::clone(&built[i]));

        Ok(Self { itn, punctuators })
    }

    pub fn itn(&self) -> &dyn InverseNormalizer {
        self.itn.as_ref()
    }

    pub fn punctuator(&self, lang: LanguageCode) -> &dyn Punctuator {
        self.punctuators[lang.index()].as_ref()
    }
}
