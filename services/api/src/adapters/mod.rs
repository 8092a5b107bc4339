pub mod json_file;
pub mod memory;

pub use json_file::JsonFileMoodStore;
pub use memory::InMemoryMoodStore;
