use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 支援的語言代碼，順序即 `/languages` 回傳的順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Hi,
    Gu,
    Te,
    Mr,
    Kn,
    Pa,
    Ta,
    Bn,
    Or,
    Ml,
    As,
}

impl LanguageCode {
    pub const COUNT: usize = 12;

    pub const ALL: [LanguageCode; Self::COUNT] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Gu,
        LanguageCode::Te,
        LanguageCode::Mr,
        LanguageCode::Kn,
        LanguageCode::Pa,
        LanguageCode::Ta,
        LanguageCode::Bn,
        LanguageCode::Or,
        LanguageCode::Ml,
        LanguageCode::As,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Gu => "gu",
            LanguageCode::Te => "te",
            LanguageCode::Mr => "mr",
            LanguageCode::Kn => "kn",
            LanguageCode::Pa => "pa",
            LanguageCode::Ta => "ta",
            LanguageCode::Bn => "bn",
            LanguageCode::Or => "or",
            LanguageCode::Ml => "ml",
            LanguageCode::As => "as",
        }
    }

    /// Position in [`LanguageCode::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// 替換 URL 模板中的 `{lang}`
    pub fn expand_template(&self, template: &str) -> String {
        template.replace("{lang}", self.as_str())
    }

    /// Renders the supported set as `['en', 'hi', ...]`; clients match on this text.
    pub fn supported_list() -> String {
        let quoted: Vec<String> = Self::ALL
            .iter()
            .map(|lang| format!("'{}'", lang.as_str()))
            .collect();
        format!("[{}]", quoted.join(", "))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRequest {
    pub lang_code: LanguageCode,
    pub text: String,
    pub punctuation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub success: bool,
    pub input: String,
    pub result: String,
    pub at: String,
}

impl DisplayResult {
    pub fn new(input: String, result: String, at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            input,
            result,
            at: format_timestamp(at),
        }
    }
}

/// `2024-03-01 09:15:02.123456 +0000 UTC`，微秒為零時省略小數部分
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let micros = at.nanosecond() / 1_000;
    if micros == 0 {
        format!("{} +0000 UTC", at.format("%Y-%m-%d %H:%M:%S"))
    } else {
        format!("{}.{:06} +0000 UTC", at.format("%Y-%m-%d %H:%M:%S"), micros)
    }
}
