//! Builds the session runtime used by front-ends.
use std::time::Duration;

use anyhow::{Context, Result};

use runtime::{Runtime, Scenario};
use sim_content::ScenarioLoader;

use crate::config::SessionConfig;

/// Assembles a scenario and runtime from configuration.
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub async fn build(self) -> Result<Runtime> {
        let scenario = match &self.config.scenario_path {
            Some(path) => {
                let def = ScenarioLoader::load(path)
                    .with_context(|| format!("loading scenario from {}", path.display()))?;
                tracing::info!(path = %path.display(), events = def.events.len(), "loaded scenario file");
                Scenario::new(def.events, def.headlines).context("validating scenario events")?
            }
            None => Scenario::standard().context("assembling built-in scenario")?,
        };

        let runtime = Runtime::builder()
            .scenario(scenario)
            .tick_period(Duration::from_millis(self.config.tuning.tick_ms))
            .seed(self.config.tuning.seed)
            .build()
            .await
            .context("starting session runtime")?;

        Ok(runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn builds_with_the_standard_scenario() {
        let runtime = SessionBuilder::new(SessionConfig::default())
            .build()
            .await
            .unwrap();
        let state = runtime.handle().query_state().await.unwrap();
        assert_eq!(state.year(), 1);
    }

    #[tokio::test]
    async fn rejects_an_ambiguous_scenario_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // Two equal-specificity triggers in the same year cannot coexist.
        let mut events = sim_content::standard_events();
        let mut duplicate = events[0].clone();
        duplicate.title = "Copycat".to_string();
        events.push(duplicate);
        let def = sim_content::ScenarioDef {
            events,
            headlines: Default::default(),
        };
        let ron = ron::ser::to_string(&def).unwrap();
        file.write_all(ron.as_bytes()).unwrap();

        let config = SessionConfig {
            scenario_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(SessionBuilder::new(config).build().await.is_err());
    }
}
