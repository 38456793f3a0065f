//! Beehiiv adapter
//!
//! Implementation of the post source over the Beehiiv v2 API.

pub mod client;

pub use client::BeehiivClientImpl;
