pub mod rest;
pub mod router;
pub mod state;

// Re-export the router builder to make it easily accessible
// to the binary and the integration tests.
pub use rest::{create_mood_handler, list_moods_handler};
pub use router::build_router;
