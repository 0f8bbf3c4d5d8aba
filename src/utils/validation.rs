use crate::domain::model::LanguageCode;
use crate::utils::error::{DisplayError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DisplayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DisplayError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DisplayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 驗證含 `{lang}` 佔位符的 URL 模板，每個語言代碼展開後都必須是合法 URL
pub fn validate_url_template(field_name: &str, template: &str) -> Result<()> {
    for lang in LanguageCode::ALL {
        validate_url(field_name, &lang.expand_template(template))?;
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(DisplayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_language_code(field_name: &str, code: &str) -> Result<LanguageCode> {
    code.parse::<LanguageCode>()
        .map_err(|_| DisplayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: format!(
                "Unsupported language. Valid languages: {}",
                LanguageCode::ALL
                    .iter()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
}
