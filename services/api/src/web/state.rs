//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use mood_tracker_core::ports::MoodStore;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MoodStore>,
    pub config: Arc<Config>,
}
