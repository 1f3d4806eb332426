use crate::domain::error::TlxError;
use crate::domain::language::LanguageCode;
use crate::domain::model::HistoryDepth;
use crate::infrastructure::storage::{HistoryStore, SettingKey, SettingsChange, SettingsStore};
use tracing::info;

/// Trim or delete history whenever a commit changes the history depth.
pub fn watch_history_depth(settings: &mut SettingsStore, history: HistoryStore) {
    settings.on_commit(move |change, current| {
        if change.contains(SettingKey::HistoryDepth) {
            info!(depth = ?current.history_depth, "History depth changed");
            history.enforce_bound(current.history_depth);
        }
    });
}

/// Split a `KEY=VALUE` argument.
pub fn parse_assignment(raw: &str) -> Result<(SettingKey, String), TlxError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| TlxError::Config(format!("Expected KEY=VALUE, got: {}", raw)))?;
    let key = SettingKey::from_cli_name(name)
        .ok_or_else(|| TlxError::Config(format!("Unknown setting: {}", name.trim())))?;
    Ok((key, value.trim().to_string()))
}

/// Validate a user-facing value and convert it to its stored form.
pub fn normalize_value(key: SettingKey, value: &str) -> Result<String, TlxError> {
    match key {
        SettingKey::HistoryDepth => {
            if HistoryDepth::CHOICES
                .iter()
                .any(|choice| choice.eq_ignore_ascii_case(value))
            {
                Ok(HistoryDepth::parse(value).to_setting())
            } else {
                Err(TlxError::Config(format!(
                    "History must be one of: {}",
                    HistoryDepth::CHOICES.join(", ")
                )))
            }
        }
        SettingKey::DefaultTargetLanguage => {
            // Accept either a code ("DE", "gb") or a raw ordinal ("4")
            let code = match value.parse::<i64>() {
                Ok(index) => LanguageCode::from_index(index),
                Err(_) => LanguageCode::parse(value),
            };
            code.index()
                .map(|index| index.to_string())
                .ok_or_else(|| TlxError::Config(format!("Unknown target language: {}", value)))
        }
        SettingKey::Endpoint => Ok(value.to_string()),
    }
}

/// Apply `KEY=VALUE` assignments and commit them together.
pub fn apply_assignments(
    settings: &mut SettingsStore,
    assignments: &[String],
) -> Result<SettingsChange, TlxError> {
    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        let stored = normalize_value(key, &value)?;
        settings.set(key, stored);
    }
    settings.commit()
}
