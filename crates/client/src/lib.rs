//! Top-level client orchestrating the Runtime, Frontend, and Backend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Simulation logic and state management)
//!   ├─→ Frontend (UI layer - CLI, GUI, etc.)
//!   └─→ Backend (Verification/conversation services, mock or HTTP)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management, layer coordination
//! - **Runtime**: Pure simulation logic, deterministic transitions, event emission
//! - **Frontend**: User interaction, event consumption, rendering (via RuntimeHandle only)
//! - **Backend**: External service access behind trait seams (mock by default)

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` constructs layers independently
/// 2. `Client::run()` transfers control to the frontend (blocking)
/// 3. On frontend exit, the runtime worker is shut down gracefully
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the user quits.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();

        // Run frontend (blocks until user quits)
        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        // Dropping the last handle stops the worker; join it cleanly.
        if let Err(err) = self.runtime.shutdown().await {
            tracing::warn!(%err, "runtime shutdown was not clean");
        }

        frontend_result
    }
}
