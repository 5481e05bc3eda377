//! Session configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use sim_content::SessionTuning;

/// Configuration required to bootstrap a session runtime.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub tuning: SessionTuning,
    /// Optional RON scenario replacing the built-in campaign.
    pub scenario_path: Option<PathBuf>,
    /// True when the seed came from config rather than the clock.
    pub seed_pinned: bool,
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SATYA_CONFIG` - Path to a TOML tuning file (optional)
    /// - `SATYA_TICK_MS` - Milliseconds per simulated year (default: 1500)
    /// - `SATYA_SEED` - Run seed for headline draws (default: time-derived)
    /// - `SATYA_SCENARIO` - Path to a RON scenario file (optional)
    ///
    /// Precedence: environment variables override the TOML file, which
    /// overrides defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("SATYA_CONFIG") {
            match sim_content::ConfigLoader::load(&PathBuf::from(&path)) {
                Ok(tuning) => {
                    config.tuning = tuning;
                    config.seed_pinned = true;
                }
                Err(err) => {
                    tracing::warn!(%err, path, "ignoring unreadable tuning file");
                }
            }
        }

        if let Some(tick_ms) = read_env::<u64>("SATYA_TICK_MS") {
            config.tuning.tick_ms = tick_ms.max(1);
        }
        if let Some(seed) = read_env::<u64>("SATYA_SEED") {
            config.tuning.seed = seed;
            config.seed_pinned = true;
        }
        if !config.seed_pinned {
            // Fresh headlines each run unless the seed is pinned.
            config.tuning.seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
        }

        config.scenario_path = env::var("SATYA_SCENARIO").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
