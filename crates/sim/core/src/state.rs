//! Session state: phase machine data, history log, and the news ticker.

use arrayvec::ArrayVec;

use crate::event::Event;
use crate::metrics::Metrics;
use crate::model::PolicyModel;

/// Phases of one simulation session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[strum(serialize = "SETUP")]
    Setup,
    #[strum(serialize = "SIMULATION")]
    Simulation,
    #[strum(serialize = "EVENT")]
    Event,
    #[strum(serialize = "END_GAME")]
    EndGame,
}

/// One resolved player decision, displayed as `"Year N: <label>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub year: u16,
    pub label: String,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Year {}: {}", self.year, self.label)
    }
}

/// Rolling window of the most recent headlines, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewsTicker {
    items: ArrayVec<String, { NewsTicker::CAPACITY }>,
}

impl NewsTicker {
    pub const CAPACITY: usize = 3;

    pub fn push(&mut self, headline: String) {
        if self.items.is_full() {
            self.items.pop();
        }
        self.items.insert(0, headline);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Complete state of one simulation run.
///
/// Mutated only by [`crate::engine::SimEngine`]; everything resets on the
/// SETUP→SIMULATION transition and nothing survives the session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimState {
    pub(crate) phase: Phase,
    pub(crate) model: Option<PolicyModel>,
    pub(crate) year: u16,
    pub(crate) metrics: Metrics,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) ticker: NewsTicker,
    pub(crate) pending_event: Option<Event>,
}

impl SimState {
    /// Terminal simulation year; the counter never passes it.
    pub const FINAL_YEAR: u16 = 15;

    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            model: None,
            year: 1,
            metrics: Metrics::INITIAL,
            history: Vec::new(),
            ticker: NewsTicker::default(),
            pending_event: None,
        }
    }

    /// Back to the pristine setup state; used by both start and restart.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn model(&self) -> Option<PolicyModel> {
        self.model
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn ticker(&self) -> &NewsTicker {
        &self.ticker
    }

    /// The crisis awaiting a player decision, present only in [`Phase::Event`].
    pub fn pending_event(&self) -> Option<&Event> {
        self.pending_event.as_ref()
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_keeps_three_newest_first() {
        let mut ticker = NewsTicker::default();
        for n in 1..=5 {
            ticker.push(format!("headline {n}"));
        }
        assert_eq!(ticker.len(), 3);
        assert_eq!(
            ticker.items(),
            ["headline 5", "headline 4", "headline 3"]
        );
    }

    #[test]
    fn history_entry_renders_year_prefix() {
        let entry = HistoryEntry {
            year: 3,
            label: "Reject Them".to_string(),
        };
        assert_eq!(entry.to_string(), "Year 3: Reject Them");
    }

    #[test]
    fn fresh_state_matches_documented_defaults() {
        let state = SimState::new();
        assert_eq!(state.phase(), Phase::Setup);
        assert_eq!(state.year(), 1);
        assert_eq!(*state.metrics(), Metrics::INITIAL);
        assert!(state.history().is_empty());
        assert!(state.ticker().is_empty());
        assert!(state.pending_event().is_none());
    }
}
