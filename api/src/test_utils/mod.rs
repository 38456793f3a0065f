//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the port has a single method and the
//! tests only need canned responses plus a call log.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
