pub mod display;
pub mod engines;

pub use crate::domain::model::{DisplayRequest, DisplayResult, LanguageCode};
pub use crate::domain::ports::{ConfigProvider, EngineKind, InverseNormalizer, Punctuator};
pub use crate::utils::error::Result;
pub use display::DisplayService;
pub use engines::EngineTable;
