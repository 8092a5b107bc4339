//! crates/mood_tracker_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The HTTP layer only ever talks to storage through these traits, so the
//! flat-file store can be swapped without touching it.

use async_trait::async_trait;
use crate::domain::{MoodEntry, NewMoodEntry};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// Persisting or reading back the durable state failed.
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait MoodStore: Send + Sync {
    /// Returns every stored entry, newest first.
    async fn list(&self) -> PortResult<Vec<MoodEntry>>;

    /// Assigns a fresh id to `entry`, stores it ahead of all existing
    /// entries and returns it.
    ///
    /// An `Err` means the entry was not persisted.
    async fn create(&self, entry: NewMoodEntry) -> PortResult<MoodEntry>;
}
