//! Feed module
//!
//! RSS 2.0 rendering of newsletter posts.

pub mod renderer;

pub use renderer::render_rss;
