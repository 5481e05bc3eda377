//! Terminal UI frontend for the S.A.T.Y.A portal.
//!
//! This crate provides a terminal-based user interface over the simulation
//! runtime and the verification backend. It implements the
//! `client_frontend_core::Frontend` trait for pure UI rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Subscribes to events and submits commands via the handle
//! - Talks to the backend only through the injected trait object

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;
