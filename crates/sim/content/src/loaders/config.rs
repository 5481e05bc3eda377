//! Session tuning loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Tunable session parameters, loadable from a TOML file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTuning {
    /// Wall-clock milliseconds per simulated year.
    #[serde(default = "SessionTuning::default_tick_ms")]
    pub tick_ms: u64,
    /// Run seed for the headline and heatmap draws.
    #[serde(default)]
    pub seed: u64,
}

impl SessionTuning {
    pub const DEFAULT_TICK_MS: u64 = 1_500;

    const fn default_tick_ms() -> u64 {
        Self::DEFAULT_TICK_MS
    }
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            tick_ms: Self::DEFAULT_TICK_MS,
            seed: 0,
        }
    }
}

/// Loader for session tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load tuning data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SessionTuning> {
        let content = read_file(path)?;
        let tuning: SessionTuning = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tuning TOML: {}", e))?;
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"seed = 7\n").unwrap();

        let tuning = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(tuning.seed, 7);
        assert_eq!(tuning.tick_ms, SessionTuning::DEFAULT_TICK_MS);
    }
}
