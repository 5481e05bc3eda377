//! Reqwest implementation of the backend seams.

pub mod client;
pub mod config;

pub use client::HttpBackend;
pub use config::BackendConfig;
