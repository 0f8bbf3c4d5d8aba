pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::build_engines;
pub use api::{create_router, serve};
pub use core::{DisplayService, EngineTable};
pub use domain::model::{DisplayRequest, DisplayResult, LanguageCode};
pub use utils::error::{DisplayError, ErrorKind, Result};
