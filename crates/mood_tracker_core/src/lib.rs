pub mod domain;
pub mod ports;

pub use domain::{MoodEntry, NewMoodEntry, ValidationError};
pub use ports::{MoodStore, PortError, PortResult};
