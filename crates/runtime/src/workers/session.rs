//! Session worker that owns the authoritative [`sim_core::SimState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], drives mutations through
//! [`sim_core::SimEngine`], and publishes events to the bus. The worker also
//! owns the simulation clock: a single `tokio::time::interval` whose select
//! arm is guarded by `phase == Simulation`, so a tick can never fire while a
//! crisis is pending or the run has ended (cancel-on-phase-change), and no
//! second timer can ever exist for the run.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use sim_core::{
    ChoiceOutcome, Phase, PolicyModel, SimEngine, SimEnv, SimState, TickOutcome,
};

use crate::error::Result;
use crate::events::{Event, EventBus, SessionEvent, TickerEvent};
use crate::oracle::StdRngOracle;
use crate::scenario::Scenario;

/// Commands that can be sent to the session worker
pub enum Command {
    /// SETUP → SIMULATION with the chosen policy model.
    SelectModel {
        model: PolicyModel,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Resolve the pending crisis with choice 0 or 1.
    ResolveChoice {
        index: usize,
        reply: oneshot::Sender<Result<()>>,
    },
    /// END_GAME → SETUP.
    Restart { reply: oneshot::Sender<Result<()>> },
    /// Query the current session state (read-only snapshot).
    QueryState { reply: oneshot::Sender<SimState> },
}

/// Background task that processes session commands and clock ticks.
///
/// The worker is the only task that touches [`SimState`], so transitions are
/// serialized without locks.
pub struct SessionWorker {
    state: SimState,
    scenario: Scenario,
    rng: StdRngOracle,
    seed: u64,
    tick_period: Duration,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub fn new(
        scenario: Scenario,
        seed: u64,
        tick_period: Duration,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        tracing::info!(
            events = scenario.events.len(),
            seed,
            tick_ms = tick_period.as_millis() as u64,
            "SessionWorker initialized"
        );

        Self {
            state: SimState::new(),
            scenario,
            rng: StdRngOracle,
            seed,
            tick_period,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    ///
    /// The interval is created here so the worker task owns the one and only
    /// timer. Missed ticks are skipped, so time paused in EVENT never bursts
    /// when the clock resumes.
    pub async fn run(mut self) {
        let mut clock = time::interval(self.tick_period);
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(cmd) => self.handle_command(cmd, &mut clock),
                        // All handles dropped: shut down.
                        None => break,
                    }
                }
                _ = clock.tick(), if self.state.phase() == Phase::Simulation => {
                    self.handle_tick();
                }
            }
        }

        debug!("SessionWorker exiting");
    }

    fn handle_command(&mut self, cmd: Command, clock: &mut time::Interval) {
        match cmd {
            Command::SelectModel { model, reply } => {
                let result = self.handle_select_model(model, clock);
                if reply.send(result).is_err() {
                    debug!("SelectModel reply channel closed (caller dropped)");
                }
            }
            Command::ResolveChoice { index, reply } => {
                let result = self.handle_resolve_choice(index, clock);
                if reply.send(result).is_err() {
                    debug!("ResolveChoice reply channel closed (caller dropped)");
                }
            }
            Command::Restart { reply } => {
                let result = self.handle_restart();
                if reply.send(result).is_err() {
                    debug!("Restart reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_select_model(
        &mut self,
        model: PolicyModel,
        clock: &mut time::Interval,
    ) -> Result<()> {
        SimEngine::new(&mut self.state).select_model(model)?;

        // A fresh full period must elapse before the first tick.
        clock.reset();

        tracing::info!(%model, "simulation started");
        self.event_bus
            .publish(Event::Session(SessionEvent::ModelSelected { model }));
        Ok(())
    }

    fn handle_resolve_choice(&mut self, index: usize, clock: &mut time::Interval) -> Result<()> {
        let outcome = SimEngine::new(&mut self.state).resolve_choice(index)?;

        match outcome {
            ChoiceOutcome::Resumed { year, entry } => {
                // Re-entering SIMULATION restarts the clock from zero.
                clock.reset();
                debug!(year, choice = %entry.label, "crisis resolved, clock resumed");
                self.event_bus
                    .publish(Event::Session(SessionEvent::ChoiceResolved {
                        year,
                        entry,
                        metrics: *self.state.metrics(),
                    }));
            }
            ChoiceOutcome::Finished { archetype, entry } => {
                debug!(choice = %entry.label, "final-year crisis resolved, run finished");
                self.event_bus
                    .publish(Event::Session(SessionEvent::ChoiceResolved {
                        year: self.state.year(),
                        entry,
                        metrics: *self.state.metrics(),
                    }));
                self.event_bus
                    .publish(Event::Session(SessionEvent::Finished {
                        archetype,
                        metrics: *self.state.metrics(),
                    }));
            }
        }
        Ok(())
    }

    fn handle_restart(&mut self) -> Result<()> {
        SimEngine::new(&mut self.state).restart()?;
        tracing::info!("session restarted");
        self.event_bus
            .publish(Event::Session(SessionEvent::Restarted));
        Ok(())
    }

    /// One clock tick: advance a year, raise a crisis, or finish the run.
    ///
    /// The select guard guarantees we are in SIMULATION here; the engine
    /// re-checks and a violation would be a bug worth logging loudly.
    fn handle_tick(&mut self) {
        let env = SimEnv {
            events: &self.scenario.events,
            headlines: &self.scenario.headlines,
            rng: &self.rng,
            seed: self.seed,
        };

        match SimEngine::new(&mut self.state).tick(&env) {
            Ok(TickOutcome::Advanced { year, headline }) => {
                self.event_bus
                    .publish(Event::Session(SessionEvent::YearAdvanced {
                        year,
                        metrics: *self.state.metrics(),
                    }));
                if let Some(headline) = headline {
                    self.event_bus
                        .publish(Event::Ticker(TickerEvent::Headline { year, headline }));
                }
            }
            Ok(TickOutcome::CrisisRaised(crisis)) => {
                debug!(year = self.state.year(), title = %crisis.title, "crisis raised, clock paused");
                self.event_bus
                    .publish(Event::Session(SessionEvent::CrisisRaised { crisis }));
            }
            Ok(TickOutcome::Finished(archetype)) => {
                tracing::info!(archetype = archetype.title(), "run finished");
                self.event_bus
                    .publish(Event::Session(SessionEvent::Finished {
                        archetype,
                        metrics: *self.state.metrics(),
                    }));
            }
            Err(err) => {
                warn!(%err, "tick rejected despite phase guard");
            }
        }
    }
}
