//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod beehiiv;

pub use beehiiv::BeehiivClientImpl;
