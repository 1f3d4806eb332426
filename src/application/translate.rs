use crate::domain::error::TlxError;
use crate::domain::language::LanguageCode;
use crate::domain::model::{HistoryDepth, HistoryEntry, TranslationRequest, TranslationResult};
use crate::domain::traits::Translator;
use crate::infrastructure::storage::{HistoryStore, Settings};
use tracing::{debug, warn};

/// Pick the target language: explicit choice first, then the settings default.
pub fn resolve_target(
    requested: Option<&str>,
    settings: &Settings,
) -> Result<LanguageCode, TlxError> {
    match requested {
        Some(raw) => match LanguageCode::parse(raw) {
            LanguageCode::Unknown => Err(TlxError::Config(format!(
                "Unknown target language: {}",
                raw
            ))),
            code => Ok(code),
        },
        None if settings.default_target_language.is_known() => Ok(settings.default_target_language),
        None => Err(TlxError::Config(
            "No default target language configured".to_string(),
        )),
    }
}

/// Build the request for `text`, letting a one-off endpoint override settings.
pub fn build_request(
    text: &str,
    target_language: LanguageCode,
    endpoint_override: Option<&str>,
    settings: &Settings,
) -> TranslationRequest {
    let endpoint = endpoint_override.unwrap_or(settings.endpoint.as_str());
    TranslationRequest::new(text, target_language, endpoint)
}

/// Translate, then store successful results in history unless it is disabled.
///
/// The history file is rewritten on the blocking pool, and the write has
/// finished by the time this returns.
pub async fn translate_and_record<T>(
    translator: &T,
    history: &HistoryStore,
    depth: HistoryDepth,
    request: &TranslationRequest,
) -> TranslationResult
where
    T: Translator + ?Sized,
{
    let result = translator.translate(request).await;

    if result.is_failure() {
        debug!("Translation failed, not recording history");
    } else if depth != HistoryDepth::Disabled {
        let entry = HistoryEntry::from_result(&request.text, &result);
        let history = history.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || history.append(&entry, depth)).await {
            warn!("History write task failed: {}", e);
        }
    }

    result
}
