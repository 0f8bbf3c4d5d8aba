use crate::config::defaults;
use crate::core::{ConfigProvider, EngineKind, LanguageCode};
use crate::utils::error::{DisplayError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    #[serde(default)]
    pub engines: EnginesConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnginesConfig {
    pub kind: Option<EngineKind>,
    pub itn_url: Option<String>,
    pub punctuation_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub punctuation_overrides: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    /// `EnvFilter` directive, e.g. `"display_api=debug,info"`
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DisplayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ITN_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DisplayError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_json(&self) -> Option<bool> {
        self.logging.as_ref().and_then(|l| l.json)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(defaults::HOST)
    }

    fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(defaults::PORT)
    }

    fn engine_kind(&self) -> EngineKind {
        self.engines.kind.unwrap_or(EngineKind::Http)
    }

    fn itn_url(&self) -> &str {
        self.engines.itn_url.as_deref().unwrap_or(defaults::ITN_URL)
    }

    fn punctuation_url(&self) -> &str {
        self.engines
            .punctuation_url
            .as_deref()
            .unwrap_or(defaults::PUNCTUATION_URL)
    }

    fn punctuation_overrides(&self) -> HashMap<LanguageCode, String> {
        // 無效的語言代碼已在 validate() 擋下
        self.engines
            .punctuation_overrides
            .iter()
            .flatten()
            .filter_map(|(code, url)| Some((code.parse::<LanguageCode>().ok()?, url.clone())))
            .collect()
    }

    fn timeout_seconds(&self) -> u64 {
        self.engines
            .timeout_seconds
            .unwrap_or(defaults::TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("server.port", u64::from(self.port()), 1)?;
        validation::validate_positive_number("engines.timeout_seconds", self.timeout_seconds(), 1)?;

        if self.engine_kind() == EngineKind::Http {
            validation::validate_url("engines.itn_url", self.itn_url())?;
            validation::validate_url_template("engines.punctuation_url", self.punctuation_url())?;
        }

        if let Some(overrides) = &self.engines.punctuation_overrides {
            for (code, url) in overrides {
                validation::validate_language_code("engines.punctuation_overrides", code)?;
                validation::validate_url(&format!("engines.punctuation_overrides.{}", code), url)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 9000

[engines]
kind = "http"
itn_url = "http://itn.internal:9001/itn"
punctuation_url = "http://punct.internal:9002/{lang}"
timeout_seconds = 5

[engines.punctuation_overrides]
hi = "http://hindi-punct.internal/run"

[logging]
json = true
level = "display_api=debug,info"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 9000);
        assert_eq!(config.engine_kind(), EngineKind::Http);
        assert_eq!(config.itn_url(), "http://itn.internal:9001/itn");
        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(config.log_json(), Some(true));
        assert_eq!(config.log_level(), Some("display_api=debug,info"));

        let overrides = config.punctuation_overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(
            overrides.get(&LanguageCode::Hi).map(String::as_str),
            Some("http://hindi-punct.internal/run")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.host(), defaults::HOST);
        assert_eq!(config.port(), defaults::PORT);
        assert_eq!(config.engine_kind(), EngineKind::Http);
        assert_eq!(config.punctuation_url(), defaults::PUNCTUATION_URL);
        assert!(config.punctuation_overrides().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DISPLAY_TEST_ITN_URL", "http://from-env:7000/itn");

        let toml_content = r#"
[engines]
itn_url = "${DISPLAY_TEST_ITN_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.itn_url(), "http://from-env:7000/itn");

        std::env::remove_var("DISPLAY_TEST_ITN_URL");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str(
            r#"
[engines]
itn_url = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_url.validate().is_err());

        let bad_override = TomlConfig::from_toml_str(
            r#"
[engines.punctuation_overrides]
fr = "http://localhost/fr"
"#,
        )
        .unwrap();
        assert!(bad_override.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str(
            r#"
[engines]
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_passthrough_skips_url_checks() {
        let config = TomlConfig::from_toml_str(
            r#"
[engines]
kind = "passthrough"
itn_url = "not a url"
"#,
        )
        .unwrap();

        assert_eq!(config.engine_kind(), EngineKind::Passthrough);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_engine_kind_is_rejected() {
        let result = TomlConfig::from_toml_str(
            r#"
[engines]
kind = "grpc"
"#,
        );
        assert!(matches!(result, Err(DisplayError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
port = 8181
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port(), 8181);
    }
}
