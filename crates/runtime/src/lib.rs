//! Asynchronous session runtime for the civic simulation.
//!
//! The runtime owns the single worker task that holds the authoritative
//! [`sim_core::SimState`] and the simulation clock. Clients interact through a
//! cloneable [`RuntimeHandle`] (mpsc commands + oneshot replies) and a
//! topic-based broadcast [`EventBus`], so all state transitions are
//! synchronous with respect to one logical thread of control.

pub mod error;
pub mod events;
pub mod handle;
pub mod oracle;
pub mod runtime;
pub mod scenario;
pub mod workers;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, SessionEvent, TickerEvent, Topic};
pub use handle::RuntimeHandle;
pub use oracle::StdRngOracle;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use scenario::Scenario;
pub use workers::{Command, SessionWorker};
