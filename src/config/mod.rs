#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    pub const ITN_URL: &str = "http://127.0.0.1:9001/itn";
    pub const PUNCTUATION_URL: &str = "http://127.0.0.1:9002/punctuate/{lang}";
    pub const TIMEOUT_SECONDS: u64 = 30;
}
