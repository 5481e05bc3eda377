//! Data-driven content for the civic simulation and visualizers.
//!
//! This crate houses the built-in scenario (the eight canonical crisis events
//! and the headline pools), the civic calculator data (budget catalog, receipt
//! brackets, election records), and loaders for RON/TOML data files so
//! alternative scenarios can be shipped without code changes.
//!
//! Content is consumed by the runtime and clients; it never appears in
//! simulation state directly.

pub mod civic;
pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use civic::{budget_catalog, election_records, receipt_brackets};
pub use scenario::{standard_events, standard_headlines};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ScenarioDef, ScenarioLoader, SessionTuning};
