use crate::domain::error::TlxError;
use crate::domain::language::LanguageCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// 服务接口类型: 两种请求/响应格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceVariant {
    /// `{text, source_lang, target_lang}` in, `{code, data, ...}` out.
    #[default]
    Simple,
    /// `{text: [..], target_lang}` in, `{data, message, ...}` out.
    Generic,
}

impl ServiceVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceVariant::Simple => "simple",
            ServiceVariant::Generic => "generic",
        }
    }
}

impl fmt::Display for ServiceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceVariant {
    type Err = TlxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(ServiceVariant::Simple),
            "generic" => Ok(ServiceVariant::Generic),
            other => Err(TlxError::Config(format!("Unknown service variant: {}", other))),
        }
    }
}

// 单次翻译请求
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: LanguageCode,
    pub endpoint: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        target_language: LanguageCode,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            target_language,
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationUnit {
    pub detected_source_language: String,
    pub text: String,
}

/// Outcome of one translate call.
///
/// Always holds at least one unit. On failure the unit's text is the error
/// message and the detected language is `UNK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    target_lang_code: String,
    translations: Vec<TranslationUnit>,
    #[serde(skip)]
    failed: bool,
}

impl TranslationResult {
    pub fn success(
        target_lang_code: impl Into<String>,
        detected_source_language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            target_lang_code: target_lang_code.into(),
            translations: vec![TranslationUnit {
                detected_source_language: detected_source_language.into(),
                text: text.into(),
            }],
            failed: false,
        }
    }

    pub fn failure(message: impl Into<String>, target: LanguageCode) -> Self {
        Self {
            target_lang_code: target.as_str().to_string(),
            translations: vec![TranslationUnit {
                detected_source_language: LanguageCode::Unknown.as_str().to_string(),
                text: message.into(),
            }],
            failed: true,
        }
    }

    pub fn target_lang_code(&self) -> &str {
        &self.target_lang_code
    }

    pub fn translations(&self) -> &[TranslationUnit] {
        &self.translations
    }

    /// First unit; every constructor populates one.
    pub fn primary(&self) -> &TranslationUnit {
        &self.translations[0]
    }

    pub fn is_failure(&self) -> bool {
        self.failed
    }
}

// 历史记录条目，字段名与历史文件保持一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoryEntry {
    pub original_text: String,
    pub translated_text: String,
    pub original_lang_code: String,
    pub target_lang_code: String,
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Build an entry from a request and the result it produced.
    pub fn from_result(original_text: &str, result: &TranslationResult) -> Self {
        let unit = result.primary();
        Self {
            original_text: original_text.to_string(),
            translated_text: unit.text.clone(),
            original_lang_code: unit.detected_source_language.clone(),
            target_lang_code: result.target_lang_code().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// How many history entries to keep, as chosen in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDepth {
    /// The `"none"` sentinel: no history, and the file is deleted.
    Disabled,
    /// Blank, zero, or anything that is not a positive integer.
    Unbounded,
    Limit(usize),
}

impl HistoryDepth {
    pub const NONE: &'static str = "none";
    pub const CHOICES: [&'static str; 5] = [Self::NONE, "1", "5", "10", "20"];

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(Self::NONE) {
            return HistoryDepth::Disabled;
        }
        match raw.parse::<usize>() {
            Ok(n) if n > 0 => HistoryDepth::Limit(n),
            _ => HistoryDepth::Unbounded,
        }
    }

    /// Positive bound, if any.
    pub fn limit(self) -> Option<usize> {
        match self {
            HistoryDepth::Limit(n) => Some(n),
            _ => None,
        }
    }

    pub fn to_setting(self) -> String {
        match self {
            HistoryDepth::Disabled => Self::NONE.to_string(),
            HistoryDepth::Unbounded => String::new(),
            HistoryDepth::Limit(n) => n.to_string(),
        }
    }
}
