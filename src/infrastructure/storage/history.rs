use crate::domain::error::TlxError;
use crate::domain::model::{HistoryDepth, HistoryEntry};
use crate::infrastructure::storage::write_json_atomic;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Translation history kept as one JSON array on disk.
///
/// Every mutation reads the whole file and writes it back through a
/// temp file + rename. There is no locking: callers must not run two
/// mutations at the same time, or one of them may be lost.
///
/// None of the public methods return errors. Failures are logged and the
/// operation degrades to an empty list or a no-op.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `entry`, drop duplicate translations (first copy wins), then
    /// evict from the front until `depth`'s bound holds.
    pub fn append(&self, entry: &HistoryEntry, depth: HistoryDepth) {
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            warn!("History file unreadable, starting fresh: {}", e);
            Vec::new()
        });

        entries.push(entry.clone());
        let mut entries = dedup_by_translation(entries);

        if let Some(max) = depth.limit() {
            trim_to_latest(&mut entries, max);
        }

        if let Err(e) = self.write_entries(&entries) {
            warn!("Failed to save history: {}", e);
        }
    }

    /// Stored entries, most recent first.
    pub fn load(&self) -> Vec<HistoryEntry> {
        match self.read_entries() {
            Ok(mut entries) => {
                entries.reverse();
                entries
            }
            Err(e) => {
                warn!("Failed to load history: {}", e);
                Vec::new()
            }
        }
    }

    /// Delete the history file. A missing file is fine.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => info!("History cleared successfully."),
            Err(e) if e.kind() == ErrorKind::NotFound => debug!("No history file found to clear."),
            Err(e) => warn!("Failed to clear history: {}", e),
        }
    }

    /// Re-apply the configured depth after a settings change.
    pub fn enforce_bound(&self, depth: HistoryDepth) {
        match depth {
            HistoryDepth::Disabled => self.clear(),
            HistoryDepth::Unbounded => {}
            HistoryDepth::Limit(max) => {
                if !self.path.exists() {
                    return;
                }
                let mut entries = match self.read_entries() {
                    Ok(entries) => dedup_by_translation(entries),
                    Err(e) => {
                        warn!("Failed to read history for trimming: {}", e);
                        return;
                    }
                };
                if entries.len() > max {
                    trim_to_latest(&mut entries, max);
                    if let Err(e) = self.write_entries(&entries) {
                        warn!("Failed to save trimmed history: {}", e);
                    }
                }
            }
        }
    }

    // Missing file reads as empty. Entries that do not parse are skipped.
    fn read_entries(&self) -> Result<Vec<HistoryEntry>, TlxError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let raw: Option<Vec<serde_json::Value>> = serde_json::from_str(&content)?;
        let mut entries = Vec::new();
        for (idx, value) in raw.unwrap_or_default().into_iter().enumerate() {
            if value.is_null() {
                warn!(index = idx, "Null history item found, skipping.");
                continue;
            }
            match serde_json::from_value::<HistoryEntry>(value) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(index = idx, "History item skipped: {}", e),
            }
        }
        Ok(entries)
    }

    fn write_entries(&self, entries: &[HistoryEntry]) -> Result<(), TlxError> {
        write_json_atomic(&self.path, entries, false)
    }
}

/// Keep the first entry for each distinct translated text, in order.
pub fn dedup_by_translation(entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.translated_text.clone()))
        .collect()
}

fn trim_to_latest(entries: &mut Vec<HistoryEntry>, max: usize) {
    if entries.len() > max {
        let excess = entries.len() - max;
        entries.drain(..excess);
    }
}
