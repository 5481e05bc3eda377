//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and runtime assembly that can be reused by
//! CLI, GUI, or other front-end crates.
pub mod builder;
pub mod config;

pub use builder::SessionBuilder;
pub use config::SessionConfig;
