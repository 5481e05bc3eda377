//! Scenario bundle handed to the session worker.
//!
//! A scenario is everything data-driven about one campaign: the validated
//! event table and the headline pools. The standard bundle comes from
//! `sim-content`; alternative bundles load from RON via the content loaders.

use sim_core::{Event, EventTable, EventTableError, HeadlinePools};

/// Validated campaign data for one session.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub events: EventTable,
    pub headlines: HeadlinePools,
}

impl Scenario {
    /// Build a scenario, validating the event table.
    pub fn new(events: Vec<Event>, headlines: HeadlinePools) -> Result<Self, EventTableError> {
        Ok(Self {
            events: EventTable::new(events)?,
            headlines,
        })
    }

    /// The built-in eight-event campaign.
    pub fn standard() -> Result<Self, EventTableError> {
        Self::new(
            sim_content::standard_events(),
            sim_content::standard_headlines(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scenario_assembles() {
        let scenario = Scenario::standard().unwrap();
        assert_eq!(scenario.events.len(), 8);
        assert!(!scenario.headlines.base.is_empty());
    }
}
