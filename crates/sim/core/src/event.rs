//! Crisis events and the validated trigger table.
//!
//! [`EventTable::lookup`] must yield zero or one event for any (year, model)
//! pair. Rather than resolving collisions by insertion order, the table
//! rejects ambiguous trigger sets at construction time: a more specific
//! trigger (fewer covered models) may shadow a broader one at the same year,
//! but two triggers of equal specificity may never overlap.

use crate::metrics::MetricOp;
use crate::model::{ModelSet, PolicyModel};

/// One of the two mutually exclusive answers to a crisis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub label: String,
    /// Applied through [`crate::Metrics::apply`]; side-effect-free data.
    pub effects: Vec<MetricOp>,
}

impl Choice {
    pub fn new(label: impl Into<String>, effects: Vec<MetricOp>) -> Self {
        Self {
            label: label.into(),
            effects,
        }
    }
}

/// An immutable crisis record with exactly two choices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Simulation year this event fires in (1..=15).
    pub year: u16,
    /// Models this event applies to; `ModelSet::ANY` fires for all.
    pub trigger: ModelSet,
    pub title: String,
    pub description: String,
    pub choices: [Choice; 2],
}

/// Validation failures surfaced while building an [`EventTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EventTableError {
    #[error("events '{first}' and '{second}' both trigger at year {year} with equal specificity")]
    AmbiguousTrigger {
        year: u16,
        first: String,
        second: String,
    },

    #[error("event '{title}' at year {year} has an empty trigger set and can never fire")]
    EmptyTrigger { year: u16, title: String },

    #[error("event '{title}' triggers at year {year}, outside the 1..={final_year} run")]
    YearOutOfRange {
        year: u16,
        title: String,
        final_year: u16,
    },
}

/// Validated collection of events with unambiguous per-year lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventTable {
    events: Vec<Event>,
}

impl EventTable {
    /// Build a table, rejecting triggers that could ever tie.
    pub fn new(events: Vec<Event>) -> Result<Self, EventTableError> {
        for event in &events {
            if event.trigger.is_empty() {
                return Err(EventTableError::EmptyTrigger {
                    year: event.year,
                    title: event.title.clone(),
                });
            }
            if event.year < 1 || event.year > crate::state::SimState::FINAL_YEAR {
                return Err(EventTableError::YearOutOfRange {
                    year: event.year,
                    title: event.title.clone(),
                    final_year: crate::state::SimState::FINAL_YEAR,
                });
            }
        }

        for (i, a) in events.iter().enumerate() {
            for b in events.iter().skip(i + 1) {
                if a.year == b.year
                    && a.trigger.intersects(b.trigger)
                    && a.trigger.specificity() == b.trigger.specificity()
                {
                    return Err(EventTableError::AmbiguousTrigger {
                        year: a.year,
                        first: a.title.clone(),
                        second: b.title.clone(),
                    });
                }
            }
        }

        Ok(Self { events })
    }

    /// The unique event due at (year, model), if any.
    ///
    /// Among overlapping candidates the most specific trigger wins; the
    /// constructor guarantees that winner is unique.
    pub fn lookup(&self, year: u16, model: PolicyModel) -> Option<&Event> {
        self.events
            .iter()
            .filter(|event| event.year == year && event.trigger.covers(model))
            .min_by_key(|event| event.trigger.specificity())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Metric, MetricOp};
    use strum::IntoEnumIterator;

    fn event(year: u16, trigger: ModelSet, title: &str) -> Event {
        Event {
            year,
            trigger,
            title: title.to_string(),
            description: String::new(),
            choices: [
                Choice::new("A", vec![MetricOp::Shift(Metric::Fiscal, 1)]),
                Choice::new("B", vec![MetricOp::Shift(Metric::Fiscal, -1)]),
            ],
        }
    }

    #[test]
    fn equal_specificity_collision_is_rejected() {
        let err = EventTable::new(vec![
            event(5, ModelSet::ANY, "first"),
            event(5, ModelSet::ANY, "second"),
        ])
        .unwrap_err();
        assert!(matches!(err, EventTableError::AmbiguousTrigger { year: 5, .. }));
    }

    #[test]
    fn disjoint_triggers_at_same_year_are_fine() {
        let table = EventTable::new(vec![
            event(4, ModelSet::ONOE, "onoe crisis"),
            event(4, ModelSet::ROLLING, "rolling crisis"),
        ])
        .unwrap();
        assert_eq!(table.lookup(4, PolicyModel::Onoe).unwrap().title, "onoe crisis");
        assert_eq!(
            table.lookup(4, PolicyModel::Rolling).unwrap().title,
            "rolling crisis"
        );
        assert!(table.lookup(4, PolicyModel::Cluster).is_none());
    }

    #[test]
    fn specific_trigger_shadows_any() {
        let table = EventTable::new(vec![
            event(7, ModelSet::ANY, "broad"),
            event(7, ModelSet::ONOE, "narrow"),
        ])
        .unwrap();
        assert_eq!(table.lookup(7, PolicyModel::Onoe).unwrap().title, "narrow");
        assert_eq!(table.lookup(7, PolicyModel::Cluster).unwrap().title, "broad");
    }

    #[test]
    fn empty_trigger_is_rejected() {
        let err = EventTable::new(vec![event(3, ModelSet::empty(), "dead")]).unwrap_err();
        assert!(matches!(err, EventTableError::EmptyTrigger { .. }));
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        let err = EventTable::new(vec![event(16, ModelSet::ANY, "late")]).unwrap_err();
        assert!(matches!(err, EventTableError::YearOutOfRange { year: 16, .. }));
    }

    #[test]
    fn lookup_yields_at_most_one_match_everywhere() {
        let table = EventTable::new(vec![
            event(2, ModelSet::CLUSTER | ModelSet::ROLLING, "pair"),
            event(5, ModelSet::ANY, "broad"),
            event(5, ModelSet::ONOE, "narrow"),
        ])
        .unwrap();

        for year in 1..=15 {
            for model in PolicyModel::iter() {
                let matches = table
                    .events()
                    .iter()
                    .filter(|e| e.year == year && e.trigger.covers(model))
                    .count();
                // Overlaps are allowed only across specificity levels, so the
                // winner is always unique.
                assert!(matches <= 2);
                let _ = table.lookup(year, model);
            }
        }
    }
}
