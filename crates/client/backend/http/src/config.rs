//! Backend endpoint configuration.
use std::env;
use std::time::Duration;

/// Endpoints and transport knobs for [`crate::HttpBackend`].
#[derive(Clone, Debug)]
pub struct BackendConfig {
    /// Base URL of the main verification/conversation service.
    pub base_url: String,
    /// Base URL of the detector service (companion-extension endpoint).
    pub detector_url: String,
    /// Connect timeout for every request.
    pub connect_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            detector_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl BackendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SATYA_BACKEND_URL` - Main service base URL (default: http://localhost:8000)
    /// - `SATYA_DETECTOR_URL` - Detector base URL (default: same as backend)
    /// - `SATYA_CONNECT_TIMEOUT_MS` - Connect timeout in milliseconds (default: 10000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("SATYA_BACKEND_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
            config.detector_url = config.base_url.clone();
        }
        if let Ok(url) = env::var("SATYA_DETECTOR_URL") {
            config.detector_url = url.trim_end_matches('/').to_string();
        }
        if let Some(ms) = read_env::<u64>("SATYA_CONNECT_TIMEOUT_MS") {
            config.connect_timeout = Duration::from_millis(ms.max(1));
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
