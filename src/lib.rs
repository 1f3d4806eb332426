//! Command-line translation client with retrying HTTP transport and a
//! bounded local history.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use domain::error::TlxError;
pub use domain::language::LanguageCode;
pub use domain::model::{
    HistoryDepth, HistoryEntry, ServiceVariant, TranslationRequest, TranslationResult,
    TranslationUnit,
};
pub use domain::traits::Translator;
pub use infrastructure::network::{resolve_endpoint, RetryPolicy, TranslationClient};
pub use infrastructure::storage::{HistoryStore, SettingKey, Settings, SettingsStore};
