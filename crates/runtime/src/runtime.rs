//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a simulation run.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::handle::RuntimeHandle;
use crate::scenario::Scenario;
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Interval between simulation clock ticks (one in-game year each).
    pub tick_period: Duration,
    /// Seed for the deterministic randomness oracle.
    pub seed: u64,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(1500),
            seed: 0,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the session worker
///
/// Design: Runtime owns the worker and coordinates shutdown.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    // Shared handle (can be cloned for clients)
    handle: RuntimeHandle,

    // Background worker
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to session events
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Dropping the handle closes the command channel, which terminates the
    /// worker loop.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    scenario: Option<Scenario>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            scenario: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the campaign scenario (required)
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Override the clock tick period
    pub fn tick_period(mut self, period: Duration) -> Self {
        self.config.tick_period = period;
        self
    }

    /// Override the oracle seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let scenario = self.scenario.ok_or(RuntimeError::MissingScenario)?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = SessionWorker::new(
            scenario,
            self.config.seed,
            self.config.tick_period,
            command_rx,
            event_bus,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
