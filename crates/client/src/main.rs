//! S.A.T.Y.A portal client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (simulation logic) via SessionBuilder
//! 2. Backend (verification services) - mock by default, HTTP behind a feature
//! 3. Frontend (UI) - CLI, GUI, etc.
//!
//! All components are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//! - `backend-http`: Talk to a live verification service
//!
//! # Examples
//!
//! ```bash
//! # CLI with the offline mock backend
//! cargo run -p satya-client
//!
//! # CLI against a live backend
//! SATYA_BACKEND_URL=http://localhost:8000 \
//!     cargo run -p satya-client --features backend-http
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use std::sync::Arc;

    use client_backend_core::BackendApi;
    use client_bootstrap::{SessionBuilder, SessionConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, logging};
    use satya_client::Client;

    // 1. Load configuration from environment
    let session_config = SessionConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&cli_config.session_id)?;

    tracing::info!("Starting S.A.T.Y.A client");
    tracing::info!("Seed: {}", session_config.tuning.seed);
    tracing::info!("Tick: {}ms", session_config.tuning.tick_ms);

    // 3. Build Runtime (independent layer)
    tracing::debug!("Building session runtime...");
    let runtime = SessionBuilder::new(session_config).build().await?;
    tracing::info!("Runtime built successfully");

    // 4. Pick a backend
    let backend: Arc<dyn BackendApi> = build_backend();

    // 5. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(cli_config, backend);

    // 6. Build and run
    let client = Client::builder().runtime(runtime).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

/// HTTP backend when enabled and configured, mock otherwise.
#[cfg(feature = "frontend-cli")]
fn build_backend() -> std::sync::Arc<dyn client_backend_core::BackendApi> {
    use std::sync::Arc;

    use client_backend_core::MockBackend;

    #[cfg(feature = "backend-http")]
    {
        use client_backend_http::{BackendConfig, HttpBackend};

        let config = BackendConfig::from_env();
        match HttpBackend::new(config.clone()) {
            Ok(backend) => {
                tracing::info!(base_url = %config.base_url, "using HTTP backend");
                return Arc::new(backend);
            }
            Err(err) => {
                tracing::warn!(%err, "HTTP backend unavailable, falling back to mock");
            }
        }
    }

    tracing::info!("using offline mock backend");
    Arc::new(MockBackend::new())
}
