use crate::config::defaults;
use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, EngineKind, LanguageCode};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "display-api")]
#[command(about = "HTTP front door for inverse text normalization and punctuation")]
pub struct CliConfig {
    #[arg(long, default_value = defaults::HOST)]
    pub host: String,

    #[arg(long, default_value_t = defaults::PORT)]
    pub port: u16,

    #[arg(long, value_enum, default_value = "http")]
    pub engine: EngineKind,

    #[arg(long, env = "DISPLAY_ITN_URL", default_value = defaults::ITN_URL)]
    pub itn_url: String,

    /// `{lang}` is replaced by each language code
    #[arg(long, env = "DISPLAY_PUNCTUATION_URL", default_value = defaults::PUNCTUATION_URL)]
    pub punctuation_url: String,

    #[arg(long, default_value_t = defaults::TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "TOML config file; values it sets override the flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Log filter directive, e.g. display_api=debug,info")]
    pub log_level: Option<String>,

    /// 只能由設定檔提供
    #[arg(skip)]
    pub punctuation_overrides: HashMap<LanguageCode, String>,
}

impl CliConfig {
    /// 設定檔中有寫的欄位覆蓋命令列，沒寫的沿用命令列
    pub fn merge_file(mut self, file: &TomlConfig) -> Result<Self> {
        if let Some(server) = &file.server {
            if let Some(host) = &server.host {
                self.host = host.clone();
            }
            if let Some(port) = server.port {
                self.port = port;
            }
        }

        let engines = &file.engines;
        if let Some(kind) = engines.kind {
            self.engine = kind;
        }
        if let Some(url) = &engines.itn_url {
            self.itn_url = url.clone();
        }
        if let Some(url) = &engines.punctuation_url {
            self.punctuation_url = url.clone();
        }
        if let Some(timeout) = engines.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(overrides) = &engines.punctuation_overrides {
            for (code, url) in overrides {
                let lang =
                    validation::validate_language_code("engines.punctuation_overrides", code)?;
                self.punctuation_overrides.insert(lang, url.clone());
            }
        }

        if let Some(json) = file.log_json() {
            self.json_logs = json;
        }
        if let Some(level) = file.log_level() {
            self.log_level = Some(level.to_string());
        }

        Ok(self)
    }
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn engine_kind(&self) -> EngineKind {
        self.engine
    }

    fn itn_url(&self) -> &str {
        &self.itn_url
    }

    fn punctuation_url(&self) -> &str {
        &self.punctuation_url
    }

    fn punctuation_overrides(&self) -> HashMap<LanguageCode, String> {
        self.punctuation_overrides.clone()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("port", u64::from(self.port), 1)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        if self.engine == EngineKind::Http {
            validation::validate_url("itn_url", &self.itn_url)?;
            validation::validate_url_template("punctuation_url", &self.punctuation_url)?;
        }
        for (lang, url) in &self.punctuation_overrides {
            validation::validate_url(&format!("punctuation_overrides.{}", lang), url)?;
        }
        Ok(())
    }
}
