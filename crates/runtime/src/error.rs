//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and the simulation reducer so
//! clients can bubble them up with consistent context.

use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a scenario before building")]
    MissingScenario,

    #[error(transparent)]
    Sim(#[from] sim_core::SimError),

    #[error(transparent)]
    EventTable(#[from] sim_core::EventTableError),
}
