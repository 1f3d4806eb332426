use crate::domain::error::TlxError;
use crate::domain::language::LanguageCode;
use crate::domain::model::HistoryDepth;
use crate::infrastructure::storage::write_json_atomic;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const NAMESPACE: &str = "tlx";

/// Endpoint used to be stored under the old API key setting.
pub const LEGACY_ENDPOINT_KEY: &str = "tlx.DeepLAPIKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    HistoryDepth,
    DefaultTargetLanguage,
    Endpoint,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::HistoryDepth,
        SettingKey::DefaultTargetLanguage,
        SettingKey::Endpoint,
    ];

    /// Key inside settings.json, e.g. `tlx.ShowHistory`.
    pub fn storage_key(self) -> String {
        let name = match self {
            SettingKey::HistoryDepth => "ShowHistory",
            SettingKey::DefaultTargetLanguage => "DefaultTargetLang",
            SettingKey::Endpoint => "Endpoint",
        };
        format!("{}.{}", NAMESPACE, name)
    }

    /// Short name accepted on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            SettingKey::HistoryDepth => "history",
            SettingKey::DefaultTargetLanguage => "target",
            SettingKey::Endpoint => "endpoint",
        }
    }

    pub fn from_cli_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.cli_name().eq_ignore_ascii_case(name))
    }

    pub fn default_value(self) -> String {
        match self {
            SettingKey::HistoryDepth => HistoryDepth::NONE.to_string(),
            SettingKey::DefaultTargetLanguage => LanguageCode::EnUs
                .index()
                .unwrap_or_default()
                .to_string(),
            SettingKey::Endpoint => String::new(),
        }
    }
}

/// Typed view of the settings at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub history_depth: HistoryDepth,
    pub default_target_language: LanguageCode,
    pub endpoint: String,
}

/// Keys whose stored value changed in one commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsChange {
    pub changed: Vec<SettingKey>,
}

impl SettingsChange {
    pub fn contains(&self, key: SettingKey) -> bool {
        self.changed.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}

type Observer = Box<dyn Fn(&SettingsChange, &Settings) + Send + Sync>;

/// String key/value settings persisted as a flat JSON object.
///
/// Keys this crate does not know about are kept as-is on rewrite.
pub struct SettingsStore {
    path: PathBuf,
    document: Map<String, Value>,
    committed: Map<String, Value>,
    observers: Vec<Observer>,
}

impl SettingsStore {
    /// Load settings from `path`, running the legacy endpoint migration.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TlxError> {
        let path = path.into();
        let document = read_document(&path)?;
        let mut store = Self {
            path,
            committed: document.clone(),
            document,
            observers: Vec::new(),
        };
        store.migrate_legacy_endpoint()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored value, or the key's default when unset.
    pub fn get(&self, key: SettingKey) -> String {
        match self.document.get(&key.storage_key()) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => key.default_value(),
        }
    }

    /// Stage a value. Nothing is written until `commit`.
    pub fn set(&mut self, key: SettingKey, value: impl Into<String>) {
        self.document
            .insert(key.storage_key(), Value::String(value.into()));
    }

    pub fn snapshot(&self) -> Settings {
        Settings {
            history_depth: HistoryDepth::parse(&self.get(SettingKey::HistoryDepth)),
            default_target_language: self
                .get(SettingKey::DefaultTargetLanguage)
                .trim()
                .parse::<i64>()
                .map(LanguageCode::from_index)
                .unwrap_or(LanguageCode::Unknown),
            endpoint: self.get(SettingKey::Endpoint),
        }
    }

    /// Register a callback run after every commit that changed something.
    pub fn on_commit<F>(&mut self, observer: F)
    where
        F: Fn(&SettingsChange, &Settings) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Persist staged values and notify observers of what changed.
    pub fn commit(&mut self) -> Result<SettingsChange, TlxError> {
        let change = SettingsChange {
            changed: SettingKey::ALL
                .into_iter()
                .filter(|key| {
                    let storage_key = key.storage_key();
                    self.document.get(&storage_key) != self.committed.get(&storage_key)
                })
                .collect(),
        };

        self.save()?;

        if !change.is_empty() {
            let snapshot = self.snapshot();
            for observer in &self.observers {
                observer(&change, &snapshot);
            }
        }

        Ok(change)
    }

    fn save(&mut self) -> Result<(), TlxError> {
        write_json_atomic(&self.path, &self.document, true)?;
        self.committed = self.document.clone();
        Ok(())
    }

    // One-way: a blank endpoint adopts the old API key value, once.
    fn migrate_legacy_endpoint(&mut self) -> Result<(), TlxError> {
        if !self.get(SettingKey::Endpoint).trim().is_empty() {
            return Ok(());
        }

        let legacy = match self.document.get(LEGACY_ENDPOINT_KEY) {
            Some(Value::String(value)) if !value.trim().is_empty() => value.trim().to_string(),
            _ => return Ok(()),
        };

        info!("Migrating legacy endpoint setting");
        self.set(SettingKey::Endpoint, legacy);
        self.save()
    }
}

// Missing file is an empty document; a corrupt one is logged and ignored.
fn read_document(path: &Path) -> Result<Map<String, Value>, TlxError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => {
            warn!("Settings file is not a JSON object, ignoring it");
            Ok(Map::new())
        }
        Err(e) => {
            warn!("Failed to parse settings file: {}", e);
            Ok(Map::new())
        }
    }
}
