use crate::core::DisplayService;
use serde::{Deserialize, Serialize};

/// Shared handler state, built once at startup.
#[derive(Clone)]
pub struct ApiState {
    pub service: DisplayService,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayQuery {
    pub text: String,
    pub punctuation: bool,
}

impl DisplayQuery {
    /// Builds the query from raw `key=value` pairs.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, String> {
        let mut text = None;
        let mut punctuation = None;
        for (key, value) in pairs {
            match key.as_str() {
                "text" => text = Some(value),
                "punctuation" => punctuation = Some(value),
                _ => {}
            }
        }

        let text = text.ok_or_else(|| "missing field `text`".to_string())?;
        let punctuation = match punctuation {
            None => false,
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| format!("punctuation: '{}' is not a valid boolean", raw))?,
        };

        Ok(Self { text, punctuation })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub languages: usize,
}

/// Accepts the usual spellings of a query-string boolean, case-insensitively.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        for raw in ["true", "True", "1", "yes", "ON"] {
            assert_eq!(parse_flag(raw), Some(true), "{}", raw);
        }
        for raw in ["false", "FALSE", "0", "no", "off"] {
            assert_eq!(parse_flag(raw), Some(false), "{}", raw);
        }
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_keys_keep_last_value() {
        let query = DisplayQuery::from_pairs(pairs(&[
            ("text", "x"),
            ("punctuation", "1"),
            ("text", "y"),
            ("punctuation", "0"),
        ]))
        .unwrap();

        assert_eq!(
            query,
            DisplayQuery {
                text: "y".to_string(),
                punctuation: false,
            }
        );
    }

    #[test]
    fn test_only_last_flag_is_parsed() {
        let query =
            DisplayQuery::from_pairs(pairs(&[("text", ""), ("punctuation", "maybe"), ("punctuation", "on")]))
                .unwrap();
        assert!(query.punctuation);
        assert_eq!(query.text, "");
    }

    #[test]
    fn test_missing_text_and_bad_flag() {
        let err = DisplayQuery::from_pairs(pairs(&[("punctuation", "true")])).unwrap_err();
        assert!(err.contains("text"));

        let err = DisplayQuery::from_pairs(pairs(&[("text", "a"), ("punctuation", "maybe")])).unwrap_err();
        assert!(err.contains("maybe"));

        let query = DisplayQuery::from_pairs(pairs(&[("text", "a"), ("lang", "hi")])).unwrap();
        assert!(!query.punctuation);
    }
}
