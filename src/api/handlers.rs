use crate::api::tracking::ensure_tracking_cookie;
use crate::api::error::ApiError;
use crate::api::types::{ApiState, DisplayQuery, HealthResponse};
use crate::core::{DisplayRequest, DisplayResult, LanguageCode};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

/// `GET /languages`
pub async fn languages_handler(jar: CookieJar) -> (CookieJar, Json<[LanguageCode; LanguageCode::COUNT]>) {
    (ensure_tracking_cookie(jar), Json(LanguageCode::ALL))
}

/// `GET /display/{lang_code}`
///
/// The language is checked before the query string so an unknown code always
/// yields 400, whatever else is wrong with the request.
pub async fn display_handler(
    State(state): State<ApiState>,
    Path(lang_code): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<DisplayResult>, ApiError> {
    let lang: LanguageCode = lang_code.parse().map_err(|_| {
        tracing::debug!("Rejected unsupported language '{}'", lang_code);
        ApiError::InvalidLanguage {
            requested: lang_code.clone(),
        }
    })?;

    let Query(pairs) = query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    let query = DisplayQuery::from_pairs(pairs).map_err(ApiError::InvalidQuery)?;

    let request = DisplayRequest {
        lang_code: lang,
        text: query.text,
        punctuation: query.punctuation,
    };

    match state.service.display(request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!(
                "❌ Display failed for '{}': {} (kind: {:?})",
                lang,
                e,
                e.kind()
            );
            Err(ApiError::from(e))
        }
    }
}

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        languages: LanguageCode::COUNT,
    })
}
