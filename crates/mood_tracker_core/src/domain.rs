//! crates/mood_tracker_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or serialization format.

/// A single logged mood, as owned by a `MoodStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    /// Assigned by the store at creation and never changed afterwards.
    pub id: String,
    pub mood: String,
    pub note: Option<String>,
    /// ISO-8601 timestamp supplied by the caller. Stored verbatim.
    pub date: String,
}

/// A mood entry that passed validation and is waiting for an id.
///
/// The only way to build one is [`NewMoodEntry::new`], so stores never
/// receive an entry without a mood or a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMoodEntry {
    mood: String,
    note: Option<String>,
    date: String,
}

/// Reasons a create request can be rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("mood is required")]
    MissingMood,
    #[error("date is required")]
    MissingDate,
}

impl NewMoodEntry {
    /// Validates the raw fields of a create request.
    ///
    /// `mood` must contain something other than whitespace and `date` must be
    /// non-empty. The date is not checked against the calendar.
    pub fn new(
        mood: Option<String>,
        note: Option<String>,
        date: Option<String>,
    ) -> Result<Self, ValidationError> {
        // A whitespace-only mood carries nothing a client can display, so it
        // counts as missing rather than as a value.
        let mood = mood
            .filter(|m| !m.trim().is_empty())
            .ok_or(ValidationError::MissingMood)?;
        let date = date
            .filter(|d| !d.is_empty())
            .ok_or(ValidationError::MissingDate)?;

        Ok(Self { mood, note, date })
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Attaches the store-assigned id, producing the persisted entry.
    pub fn with_id(self, id: String) -> MoodEntry {
        MoodEntry {
            id,
            mood: self.mood,
            note: self.note,
            date: self.date,
        }
    }
}
