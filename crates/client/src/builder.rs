//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};

/// Builder for constructing a Client with proper validation.
///
/// Required fields (runtime, frontend) fail fast in `build()` when missing;
/// the backend is injected into the frontend directly, so the container does
/// not hold it.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runtime::Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime (required).
    ///
    /// Construct it via `SessionBuilder` from the `client-bootstrap` crate.
    pub fn runtime(mut self, runtime: runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend handles UI rendering and user input. It receives a
    /// RuntimeHandle for communication with the session.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or frontend is not set.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { runtime, frontend })
    }
}
