use serde::Serialize;
use thiserror::Error;

/// 對外可見的五種錯誤原因，每種對應一段固定訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnsupportedLanguage,
    IncompatibleString,
    Internal,
    Unknown,
    Loading,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::UnsupportedLanguage => {
                "Unsupported language ID requested. Please check available languages."
            }
            ErrorKind::IncompatibleString => "String passed is incompatible.",
            ErrorKind::Internal => "Internal crash.",
            ErrorKind::Unknown => "Unknown Failure.",
            ErrorKind::Loading => {
                "Loading failed. Check if metadata/paths are correctly configured."
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Engine request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unsupported language code: {code}")]
    UnsupportedLanguage { code: String },

    #[error("{engine} engine failed: {message}")]
    EngineError {
        engine: &'static str,
        message: String,
    },

    #[error("Failed to load {component}: {message}")]
    LoadingError { component: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DisplayError {
    pub fn engine(engine: &'static str, message: impl Into<String>) -> Self {
        DisplayError::EngineError {
            engine,
            message: message.into(),
        }
    }

    /// 把內部錯誤歸類到對外的錯誤原因
    pub fn kind(&self) -> ErrorKind {
        match self {
            DisplayError::UnsupportedLanguage { .. } => ErrorKind::UnsupportedLanguage,
            DisplayError::HttpError(_)
            | DisplayError::SerializationError(_)
            | DisplayError::EngineError { .. } => ErrorKind::Internal,
            DisplayError::LoadingError { .. }
            | DisplayError::ConfigError { .. }
            | DisplayError::InvalidConfigValueError { .. } => ErrorKind::Loading,
            DisplayError::IoError(_) => ErrorKind::Unknown,
        }
    }
}

pub type Result<T> = std::result::Result<T, DisplayError>;
