//! Session view updated from runtime events.

use arrayvec::ArrayVec;

use runtime::{SessionEvent, TickerEvent};
use sim_core::{Archetype, Event, HistoryEntry, Metrics, Phase, PolicyModel, SimState};

use super::Redraw;

/// Presentation copy of the session, kept in sync by applying events.
///
/// A full [`SimState`] snapshot seeds the view at startup (and after any
/// broadcast lag); afterwards events are enough to stay current.
#[derive(Clone, Debug)]
pub struct SessionView {
    pub phase: Phase,
    pub model: Option<PolicyModel>,
    pub year: u16,
    pub metrics: Metrics,
    pub history: Vec<HistoryEntry>,
    pub crisis: Option<Event>,
    pub archetype: Option<Archetype>,
    /// Newest first, capped at three like the on-screen ticker.
    pub ticker: ArrayVec<(u16, String), 3>,
}

impl SessionView {
    pub fn from_state(state: &SimState) -> Self {
        let archetype = match state.phase() {
            Phase::EndGame => Some(Archetype::classify(state.metrics())),
            _ => None,
        };

        Self {
            phase: state.phase(),
            model: state.model(),
            year: state.year(),
            metrics: *state.metrics(),
            history: state.history().to_vec(),
            crisis: state.pending_event().cloned(),
            archetype,
            ticker: state
                .ticker()
                .items()
                .iter()
                .map(|headline| (state.year(), headline.clone()))
                .collect(),
        }
    }

    /// Fold one session event into the view.
    pub fn apply_session(&mut self, event: &SessionEvent) -> Redraw {
        match event {
            SessionEvent::ModelSelected { model } => {
                self.phase = Phase::Simulation;
                self.model = Some(*model);
            }
            SessionEvent::YearAdvanced { year, metrics } => {
                self.year = *year;
                self.metrics = *metrics;
            }
            SessionEvent::CrisisRaised { crisis } => {
                self.phase = Phase::Event;
                self.crisis = Some(crisis.clone());
            }
            SessionEvent::ChoiceResolved {
                year,
                entry,
                metrics,
            } => {
                self.phase = Phase::Simulation;
                self.crisis = None;
                self.year = *year;
                self.metrics = *metrics;
                self.history.push(entry.clone());
            }
            SessionEvent::Finished { archetype, metrics } => {
                self.phase = Phase::EndGame;
                self.crisis = None;
                self.metrics = *metrics;
                self.archetype = Some(*archetype);
            }
            SessionEvent::Restarted => {
                *self = Self::from_state(&SimState::new());
            }
        }
        debug_assert!(self.is_consistent(), "session view out of sync: {self:?}");
        Redraw::SESSION
    }

    fn is_consistent(&self) -> bool {
        (1..=15).contains(&self.year)
            && self.metrics.in_bounds()
            && (self.phase != Phase::Event || self.crisis.is_some())
    }

    /// Fold one ticker event into the view (newest first, capped at three).
    pub fn apply_ticker(&mut self, event: &TickerEvent) -> Redraw {
        let TickerEvent::Headline { year, headline } = event;
        if self.ticker.is_full() {
            self.ticker.pop();
        }
        self.ticker.insert(0, (*year, headline.clone()));
        Redraw::TICKER
    }
}
