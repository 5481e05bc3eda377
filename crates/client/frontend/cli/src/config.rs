//! CLI-specific configuration.
use std::env;

/// Settings for the terminal frontend.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Initial interface language code (default: "en").
    pub language: String,
    /// Milliseconds between input polls (default: 16).
    pub frame_interval_ms: u64,
    /// Session identifier used for the log directory (default: auto-generated).
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            frame_interval_ms: 16,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SATYA_LANGUAGE` - Initial interface language code (default: en)
    /// - `SATYA_FRAME_MS` - Input poll interval in milliseconds (default: 16)
    /// - `SATYA_SESSION_ID` - Log directory name (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(language) = env::var("SATYA_LANGUAGE") {
            if !language.is_empty() {
                config.language = language;
            }
        }
        if let Some(ms) = read_env::<u64>("SATYA_FRAME_MS") {
            config.frame_interval_ms = ms.clamp(1, 1000);
        }
        config.session_id = env::var("SATYA_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
