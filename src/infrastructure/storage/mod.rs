pub mod history;
pub mod settings;

pub use history::HistoryStore;
pub use settings::{SettingKey, Settings, SettingsChange, SettingsStore};

use crate::domain::error::TlxError;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Replace `path` with `value` as JSON via temp file + rename, so readers
/// see either the old snapshot or the new one.
pub(crate) fn write_json_atomic<T>(path: &Path, value: &T, pretty: bool) -> Result<(), TlxError>
where
    T: Serialize + ?Sized,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    if pretty {
        serde_json::to_writer_pretty(&mut tmp, value)?;
    } else {
        serde_json::to_writer(&mut tmp, value)?;
    }
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}
