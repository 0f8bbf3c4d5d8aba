use crate::core::LanguageCode;
use crate::utils::error::{DisplayError, ErrorKind};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    InvalidLanguage { requested: String },
    InvalidQuery(String),
    Display(DisplayError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidLanguage { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Display(err) => match err.kind() {
                ErrorKind::UnsupportedLanguage | ErrorKind::IncompatibleString => {
                    StatusCode::BAD_REQUEST
                }
                ErrorKind::Internal | ErrorKind::Unknown | ErrorKind::Loading => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// 回給客戶端的訊息；引擎錯誤細節只寫進日誌
    pub fn detail(&self) -> String {
        match self {
            ApiError::InvalidLanguage { .. } => invalid_language_detail(),
            ApiError::InvalidQuery(reason) => reason.clone(),
            ApiError::Display(err) => match err.kind() {
                ErrorKind::UnsupportedLanguage => invalid_language_detail(),
                kind => kind.message().to_string(),
            },
        }
    }
}

fn invalid_language_detail() -> String {
    format!(
        "Invalid scheme identifier. Supported languages are: {}",
        LanguageCode::supported_list()
    )
}

impl From<DisplayError> for ApiError {
    fn from(err: DisplayError) -> Self {
        match err {
            DisplayError::UnsupportedLanguage { code } => ApiError::InvalidLanguage { requested: code },
            other => ApiError::Display(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_failure_hides_detail() {
        let err = ApiError::from(DisplayError::engine("punctuation", "CUDA out of memory"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Internal crash.");
    }

    #[test]
    fn test_unsupported_language_maps_to_bad_request() {
        let err = ApiError::from(DisplayError::UnsupportedLanguage {
            code: "xx".to_string(),
        });

        assert!(matches!(err, ApiError::InvalidLanguage { .. }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.detail().ends_with("['en', 'hi', 'gu', 'te', 'mr', 'kn', 'pa', 'ta', 'bn', 'or', 'ml', 'as']"));
    }

    #[test]
    fn test_invalid_query_is_unprocessable() {
        let err = ApiError::InvalidQuery("missing field `text`".to_string());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.detail(), "missing field `text`");
    }
}
