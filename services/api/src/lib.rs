//! services/api/src/lib.rs
//!
//! The mood tracker HTTP service: storage adapters, configuration and the
//! axum boundary over the `MoodStore` port.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
