//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the session via RuntimeHandle:
/// - Subscribe to events (Session, Ticker)
/// - Submit commands (select model, resolve choice, restart)
/// - Query current state
///
/// Frontends do NOT own the Runtime - they receive a handle for communication only.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
/// - Future: `GuiFrontend`, `WebFrontend`, etc.
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// Blocks until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
