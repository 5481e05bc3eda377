//! The authoritative reducer for [`SimState`].
//!
//! [`SimEngine`] owns transition legality for the SETUP → SIMULATION ⇄ EVENT →
//! END_GAME phase machine. Every operation is a synchronous reducer call; the
//! timer that paces `tick` lives in the runtime crate and is not this module's
//! concern.

use crate::archetype::Archetype;
use crate::event::{Event, EventTable};
use crate::headline::HeadlinePools;
use crate::model::PolicyModel;
use crate::rng::{RngOracle, compute_seed, rng_stream};
use crate::state::{HistoryEntry, Phase, SimState};

/// Read-only environment a tick needs: the scenario tables and the RNG seam.
pub struct SimEnv<'a> {
    pub events: &'a EventTable,
    pub headlines: &'a HeadlinePools,
    pub rng: &'a dyn RngOracle,
    /// Run seed; mixed with the current year so replays reproduce the ticker.
    pub seed: u64,
}

/// What a completed tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Drift applied, headline generated, year advanced.
    Advanced {
        year: u16,
        headline: Option<String>,
    },
    /// A crisis is due; the session paused in [`Phase::Event`].
    CrisisRaised(Event),
    /// The terminal year was reached with nothing pending.
    Finished(Archetype),
}

/// What resolving a choice did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Effects applied and the simulation resumed at `year`.
    Resumed { year: u16, entry: HistoryEntry },
    /// The crisis sat at the final year; the run ended instead of advancing.
    Finished {
        archetype: Archetype,
        entry: HistoryEntry,
    },
}

/// Phase misuse and malformed input; normal play never sees these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("{operation} requires phase {expected}, but the session is in {actual}")]
    Phase {
        operation: &'static str,
        expected: Phase,
        actual: Phase,
    },

    #[error("choice index {0} is out of range; crises offer exactly two choices")]
    ChoiceIndex(usize),

    #[error("no crisis is pending resolution")]
    NoPendingEvent,

    #[error("no policy model is selected")]
    ModelUnset,
}

/// Reducer over one session's [`SimState`].
pub struct SimEngine<'a> {
    state: &'a mut SimState,
}

impl<'a> SimEngine<'a> {
    pub fn new(state: &'a mut SimState) -> Self {
        Self { state }
    }

    /// SETUP → SIMULATION: record the model and reset everything else.
    pub fn select_model(&mut self, model: PolicyModel) -> Result<(), SimError> {
        self.expect_phase("select_model", Phase::Setup)?;
        self.state.reset();
        self.state.model = Some(model);
        self.state.phase = Phase::Simulation;
        Ok(())
    }

    /// Advance one simulated year.
    ///
    /// Checks the event table first: a due crisis pauses the session without
    /// applying drift or advancing the year. A tick at the final year with no
    /// crisis ends the run within that same tick. Otherwise drift is applied
    /// through the clamp primitive, a headline is pushed, and the year
    /// increments by one.
    pub fn tick(&mut self, env: &SimEnv<'_>) -> Result<TickOutcome, SimError> {
        self.expect_phase("tick", Phase::Simulation)?;
        let model = self.state.model.ok_or(SimError::ModelUnset)?;

        if let Some(event) = env.events.lookup(self.state.year, model) {
            let event = event.clone();
            self.state.pending_event = Some(event.clone());
            self.state.phase = Phase::Event;
            return Ok(TickOutcome::CrisisRaised(event));
        }

        if self.state.year == SimState::FINAL_YEAR {
            self.state.phase = Phase::EndGame;
            return Ok(TickOutcome::Finished(Archetype::classify(
                &self.state.metrics,
            )));
        }

        self.state.metrics.apply(model.drift());

        let seed = compute_seed(env.seed, self.state.year as u64, rng_stream::HEADLINE);
        let headline = env
            .headlines
            .pick(model, env.rng, seed)
            .map(str::to_string);
        if let Some(headline) = &headline {
            self.state.ticker.push(headline.clone());
        }

        self.state.year += 1;
        Ok(TickOutcome::Advanced {
            year: self.state.year,
            headline,
        })
    }

    /// EVENT → SIMULATION (or END_GAME at the final year).
    ///
    /// Applies the chosen effects through the clamp primitive, appends the
    /// history entry, and advances the year.
    pub fn resolve_choice(&mut self, index: usize) -> Result<ChoiceOutcome, SimError> {
        self.expect_phase("resolve_choice", Phase::Event)?;
        if index >= 2 {
            return Err(SimError::ChoiceIndex(index));
        }
        let event = self
            .state
            .pending_event
            .take()
            .ok_or(SimError::NoPendingEvent)?;
        let choice = &event.choices[index];

        self.state.metrics.apply(&choice.effects);
        let entry = HistoryEntry {
            year: self.state.year,
            label: choice.label.clone(),
        };
        self.state.history.push(entry.clone());

        if self.state.year == SimState::FINAL_YEAR {
            self.state.phase = Phase::EndGame;
            Ok(ChoiceOutcome::Finished {
                archetype: Archetype::classify(&self.state.metrics),
                entry,
            })
        } else {
            self.state.year += 1;
            self.state.phase = Phase::Simulation;
            Ok(ChoiceOutcome::Resumed {
                year: self.state.year,
                entry,
            })
        }
    }

    /// END_GAME → SETUP: idempotent return to the pristine initial state.
    pub fn restart(&mut self) -> Result<(), SimError> {
        self.expect_phase("restart", Phase::EndGame)?;
        self.state.reset();
        Ok(())
    }

    fn expect_phase(&self, operation: &'static str, expected: Phase) -> Result<(), SimError> {
        if self.state.phase != expected {
            return Err(SimError::Phase {
                operation,
                expected,
                actual: self.state.phase,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Choice, EventTableError};
    use crate::metrics::{Metric, MetricOp, Metrics};
    use crate::model::ModelSet;
    use crate::rng::testing::EchoRng;

    fn table() -> Result<EventTable, EventTableError> {
        EventTable::new(vec![
            Event {
                year: 3,
                trigger: ModelSet::ONOE,
                title: "The Local Water Crisis".to_string(),
                description: String::new(),
                choices: [
                    Choice::new(
                        "Suppress Protests (Ignore)",
                        vec![
                            MetricOp::Shift(Metric::Stability, 5),
                            MetricOp::Shift(Metric::Accountability, -25),
                        ],
                    ),
                    Choice::new(
                        "Divert Central Funds",
                        vec![
                            MetricOp::Shift(Metric::Fiscal, -15),
                            MetricOp::Shift(Metric::Accountability, 5),
                        ],
                    ),
                ],
            },
            Event {
                year: 15,
                trigger: ModelSet::CLUSTER,
                title: "Final-Year Crisis".to_string(),
                description: String::new(),
                choices: [
                    Choice::new("Hold", vec![]),
                    Choice::new("Fold", vec![MetricOp::Shift(Metric::Stability, -5)]),
                ],
            },
        ])
    }

    fn env<'a>(events: &'a EventTable, headlines: &'a HeadlinePools) -> SimEnv<'a> {
        SimEnv {
            events,
            headlines,
            rng: &EchoRng,
            seed: 42,
        }
    }

    #[test]
    fn onoe_first_tick_matches_drift_table() {
        let events = table().unwrap();
        let headlines = HeadlinePools::default();
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);

        engine.select_model(PolicyModel::Onoe).unwrap();
        let outcome = engine.tick(&env(&events, &headlines)).unwrap();
        assert!(matches!(outcome, TickOutcome::Advanced { year: 2, .. }));
        assert_eq!(
            *state.metrics(),
            Metrics {
                fiscal: 52,
                stability: 52,
                accountability: 47,
                federalism: 50
            }
        );
        assert_eq!(state.year(), 2);
    }

    #[test]
    fn crisis_pauses_without_drift_or_year_advance() {
        let events = table().unwrap();
        let headlines = HeadlinePools::default();
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);
        engine.select_model(PolicyModel::Onoe).unwrap();

        let e = env(&events, &headlines);
        engine.tick(&e).unwrap();
        engine.tick(&e).unwrap();
        let metrics_before = *state.metrics();

        let outcome = SimEngine::new(&mut state).tick(&e).unwrap();
        let TickOutcome::CrisisRaised(crisis) = outcome else {
            panic!("expected a crisis at year 3");
        };
        assert_eq!(crisis.title, "The Local Water Crisis");
        assert_eq!(state.phase(), Phase::Event);
        assert_eq!(state.year(), 3);
        assert_eq!(*state.metrics(), metrics_before);
    }

    #[test]
    fn resolving_a_choice_applies_clamped_effects_and_resumes() {
        let events = table().unwrap();
        let headlines = HeadlinePools::default();
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);
        engine.select_model(PolicyModel::Onoe).unwrap();

        let e = env(&events, &headlines);
        for _ in 0..3 {
            engine.tick(&e).unwrap();
        }

        let outcome = engine.resolve_choice(0).unwrap();
        assert!(matches!(outcome, ChoiceOutcome::Resumed { year: 4, .. }));
        assert_eq!(state.phase(), Phase::Simulation);
        assert_eq!(state.year(), 4);
        // 47 - 3 (year-2 drift) = 44, then -25 from the choice.
        assert_eq!(state.metrics().accountability, 19);
        assert_eq!(state.metrics().stability, 59);
        assert_eq!(state.history().len(), 1);
        assert_eq!(
            state.history()[0].to_string(),
            "Year 3: Suppress Protests (Ignore)"
        );
    }

    #[test]
    fn year_fifteen_with_no_crisis_finishes_within_the_tick() {
        let events = EventTable::new(vec![]).unwrap();
        let headlines = HeadlinePools::default();
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);
        engine.select_model(PolicyModel::Rolling).unwrap();

        let e = env(&events, &headlines);
        for _ in 1..SimState::FINAL_YEAR {
            engine.tick(&e).unwrap();
        }
        assert_eq!(state.year(), 15);

        let outcome = SimEngine::new(&mut state).tick(&e).unwrap();
        assert!(matches!(outcome, TickOutcome::Finished(_)));
        assert_eq!(state.phase(), Phase::EndGame);
        assert_eq!(state.year(), 15);

        // No re-entry without an explicit restart.
        assert!(matches!(
            SimEngine::new(&mut state).tick(&e),
            Err(SimError::Phase { operation: "tick", .. })
        ));
    }

    #[test]
    fn crisis_at_final_year_ends_instead_of_advancing() {
        let events = table().unwrap();
        let headlines = HeadlinePools::default();
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);
        engine.select_model(PolicyModel::Cluster).unwrap();

        let e = env(&events, &headlines);
        for _ in 1..SimState::FINAL_YEAR {
            engine.tick(&e).unwrap();
        }
        let outcome = engine.tick(&e).unwrap();
        assert!(matches!(outcome, TickOutcome::CrisisRaised(_)));

        let outcome = engine.resolve_choice(1).unwrap();
        assert!(matches!(outcome, ChoiceOutcome::Finished { .. }));
        assert_eq!(state.phase(), Phase::EndGame);
        assert_eq!(state.year(), 15);
    }

    #[test]
    fn restart_restores_pristine_state() {
        let events = EventTable::new(vec![]).unwrap();
        let headlines = HeadlinePools::default();
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);
        engine.select_model(PolicyModel::Onoe).unwrap();

        let e = env(&events, &headlines);
        for _ in 1..=SimState::FINAL_YEAR {
            engine.tick(&e).unwrap();
        }
        assert_eq!(state.phase(), Phase::EndGame);

        SimEngine::new(&mut state).restart().unwrap();
        assert_eq!(state, SimState::new());
    }

    #[test]
    fn out_of_phase_operations_are_rejected() {
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);
        assert!(matches!(
            engine.restart(),
            Err(SimError::Phase { operation: "restart", .. })
        ));
        assert!(matches!(
            engine.resolve_choice(0),
            Err(SimError::Phase { .. })
        ));
    }

    #[test]
    fn invalid_choice_index_keeps_the_crisis_pending() {
        let events = table().unwrap();
        let headlines = HeadlinePools::default();
        let mut state = SimState::new();
        let mut engine = SimEngine::new(&mut state);
        engine.select_model(PolicyModel::Onoe).unwrap();

        let e = env(&events, &headlines);
        for _ in 0..3 {
            engine.tick(&e).unwrap();
        }
        assert_eq!(engine.resolve_choice(2), Err(SimError::ChoiceIndex(2)));
        assert!(state.pending_event().is_some());
        assert_eq!(state.phase(), Phase::Event);
    }

    #[test]
    fn year_increases_by_exactly_one_per_resolved_step() {
        let events = table().unwrap();
        let headlines = HeadlinePools::default();
        let mut state = SimState::new();
        SimEngine::new(&mut state)
            .select_model(PolicyModel::Onoe)
            .unwrap();

        let e = env(&events, &headlines);
        let mut last_year = 1;
        loop {
            let mut engine = SimEngine::new(&mut state);
            match engine.tick(&e) {
                Ok(TickOutcome::Advanced { year, .. }) => {
                    assert_eq!(year, last_year + 1);
                    last_year = year;
                }
                Ok(TickOutcome::CrisisRaised(_)) => {
                    match engine.resolve_choice(0).unwrap() {
                        ChoiceOutcome::Resumed { year, .. } => {
                            assert_eq!(year, last_year + 1);
                            last_year = year;
                        }
                        ChoiceOutcome::Finished { .. } => break,
                    }
                }
                Ok(TickOutcome::Finished(_)) => break,
                Err(err) => panic!("unexpected error: {err}"),
            }
            assert!(state.metrics().in_bounds());
        }
    }
}
