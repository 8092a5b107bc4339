//! services/api/src/adapters/json_file.rs
//!
//! This module contains the flat-file adapter, the concrete implementation of
//! the `MoodStore` port from the `core` crate. The whole collection lives in a
//! single pretty-printed JSON array, newest entry first, rewritten on every
//! create.

use async_trait::async_trait;
use mood_tracker_core::domain::{MoodEntry, NewMoodEntry};
use mood_tracker_core::ports::{MoodStore, PortError, PortResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

const TMP_SUFFIX: &str = ".tmp";
const CORRUPT_SUFFIX: &str = ".corrupt-";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A store that keeps every mood entry in one JSON file.
///
/// Creates are serialized through an internal lock, and each write lands in a
/// temporary sibling file that is renamed over the target, so readers only ever
/// observe a complete collection. Separate processes sharing the same file are
/// not coordinated.
#[derive(Debug)]
pub struct JsonFileMoodStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileMoodStore {
    /// Creates a new `JsonFileMoodStore`. Nothing is read or written until the
    /// first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Reads the collection. A missing file is an empty collection.
    async fn load(&self) -> Result<Vec<MoodEntry>, LoadError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no mood file at \"{}\" yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(LoadError::Io(e)),
        };

        let records: Vec<MoodRecord> =
            serde_json::from_slice(&bytes).map_err(LoadError::Corrupt)?;
        debug!(
            "loaded {} mood entries from \"{}\"",
            records.len(),
            self.path.display()
        );
        Ok(records.into_iter().map(MoodRecord::to_domain).collect())
    }

    /// Moves an unparseable file out of the way so the next write does not
    /// destroy whatever it contained.
    async fn quarantine(&self, cause: &serde_json::Error) -> PortResult<()> {
        let target = self.sibling_path(&format!(
            "{CORRUPT_SUFFIX}{}",
            chrono::Utc::now().timestamp_millis(),
        ));
        warn!(
            "mood file \"{}\" is unparseable ({cause}), moving it to \"{}\"",
            self.path.display(),
            target.display()
        );
        tokio::fs::rename(&self.path, &target).await.map_err(|e| {
            PortError::Storage(format!(
                "failed to move unparseable mood file \"{}\" aside: {e}",
                self.path.display(),
            ))
        })
    }

    /// Replaces the file with `entries`, going through a temporary file.
    async fn persist(&self, entries: &[MoodEntry]) -> PortResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                PortError::Storage(format!(
                    "failed to create directory \"{}\": {e}",
                    parent.display(),
                ))
            })?;
        }

        let records: Vec<MoodRecord> = entries.iter().map(MoodRecord::from_domain).collect();
        let mut contents = serde_json::to_vec_pretty(&records)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        contents.push(b'\n');

        let tmp_path = self.sibling_path(TMP_SUFFIX);
        debug!("writing {} mood entries to \"{}\"", entries.len(), tmp_path.display());
        if let Err(e) = tokio::fs::write(&tmp_path, &contents).await {
            remove_leftover(&tmp_path).await;
            return Err(PortError::Storage(format!(
                "failed to write \"{}\": {e}",
                tmp_path.display(),
            )));
        }

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            remove_leftover(&tmp_path).await;
            return Err(PortError::Storage(format!(
                "failed to rename \"{}\" to \"{}\": {e}",
                tmp_path.display(),
                self.path.display(),
            )));
        }

        Ok(())
    }
}

async fn remove_leftover(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != ErrorKind::NotFound {
            warn!("failed to remove leftover \"{}\": {e}", path.display());
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("{0}")]
    Io(std::io::Error),
    #[error("unparseable contents: {0}")]
    Corrupt(serde_json::Error),
}

//=========================================================================================
// On-disk Record Struct
//=========================================================================================

#[derive(Debug, Serialize, Deserialize)]
struct MoodRecord {
    id: String,
    mood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    date: String,
}

impl MoodRecord {
    fn to_domain(self) -> MoodEntry {
        MoodEntry {
            id: self.id,
            mood: self.mood,
            note: self.note,
            date: self.date,
        }
    }

    fn from_domain(entry: &MoodEntry) -> Self {
        Self {
            id: entry.id.clone(),
            mood: entry.mood.clone(),
            note: entry.note.clone(),
            date: entry.date.clone(),
        }
    }
}

//=========================================================================================
// `MoodStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl MoodStore for JsonFileMoodStore {
    /// Any failure to read the file is logged and reported as an empty
    /// collection.
    async fn list(&self) -> PortResult<Vec<MoodEntry>> {
        match self.load().await {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    "treating mood file \"{}\" as empty: {e}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    async fn create(&self, entry: NewMoodEntry) -> PortResult<MoodEntry> {
        let _guard = self.write_lock.lock().await;

        let mut entries = match self.load().await {
            Ok(entries) => entries,
            Err(LoadError::Corrupt(e)) => {
                self.quarantine(&e).await?;
                Vec::new()
            }
            Err(LoadError::Io(e)) => {
                return Err(PortError::Storage(format!(
                    "failed to read \"{}\": {e}",
                    self.path.display(),
                )))
            }
        };

        let created = entry.with_id(Uuid::new_v4().to_string());
        entries.insert(0, created.clone());
        self.persist(&entries).await?;

        debug!("stored mood entry {}", created.id);
        Ok(created)
    }
}
