//! File-based logging setup for the TUI client.
//!
//! The terminal owns stdout/stderr while the UI runs, so logs go to a file
//! only. Use `tail -f` on the session log to watch the client live.
use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Setup logging to a session-specific file.
pub fn setup_logging(session_id: &Option<String>) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true); // colorized tail-logs

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the process lifetime.
    std::mem::forget(_guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(())
}

/// Platform-specific log directory, with a local fallback.
fn log_directory() -> std::path::PathBuf {
    directories::ProjectDirs::from("", "", "satya")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from(".satya/logs"))
}
