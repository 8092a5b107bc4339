//! services/api/src/adapters/memory.rs
//!
//! An in-process implementation of the `MoodStore` port. Nothing survives a
//! restart; it backs the HTTP tests and is handy when no data file is wanted.

use async_trait::async_trait;
use mood_tracker_core::domain::{MoodEntry, NewMoodEntry};
use mood_tracker_core::ports::{MoodStore, PortResult};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryMoodStore {
    entries: RwLock<Vec<MoodEntry>>,
}

impl InMemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing collection, which must already be newest first.
    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl MoodStore for InMemoryMoodStore {
    async fn list(&self) -> PortResult<Vec<MoodEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn create(&self, entry: NewMoodEntry) -> PortResult<MoodEntry> {
        let created = entry.with_id(Uuid::new_v4().to_string());
        self.entries.write().await.insert(0, created.clone());
        Ok(created)
    }
}
