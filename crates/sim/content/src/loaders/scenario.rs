//! Scenario loader for RON data files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sim_core::{Event, HeadlinePools};

use crate::loaders::{LoadResult, read_file};

/// Raw scenario definition as stored on disk.
///
/// Events are validated into an `EventTable` by the consumer, so a malformed
/// scenario fails at assembly with a table error rather than mid-run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDef {
    pub events: Vec<Event>,
    #[serde(default)]
    pub headlines: HeadlinePools,
}

/// Loader for scenario definitions from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario definition from a RON file.
    pub fn load(path: &Path) -> LoadResult<ScenarioDef> {
        let content = read_file(path)?;
        let def: ScenarioDef = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Ok(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn round_trips_the_standard_scenario() {
        let def = ScenarioDef {
            events: crate::scenario::standard_events(),
            headlines: crate::scenario::standard_headlines(),
        };
        let text = ron::ser::to_string(&def).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = ScenarioLoader::load(file.path()).unwrap();
        assert_eq!(loaded, def);
    }

    #[test]
    fn missing_file_is_a_readable_error() {
        let err = ScenarioLoader::load(Path::new("/nonexistent/scenario.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
