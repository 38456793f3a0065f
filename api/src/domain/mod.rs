//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for newsletter posts and feed settings
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
