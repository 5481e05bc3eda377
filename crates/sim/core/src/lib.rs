//! Deterministic civic-simulation logic and data types shared across clients.
//!
//! `sim-core` defines the canonical rules of the policy simulation: the
//! bounded metrics model, the policy-model drift tables, the validated event
//! table, and the phase machine that drives a fifteen-year run. All state
//! mutation flows through [`engine::SimEngine`], and supporting crates depend
//! on the types re-exported here.
//!
//! The crate is pure: no async, no I/O, and randomness only through the
//! [`rng::RngOracle`] seam so a run is fully replayable from its seed.
pub mod archetype;
pub mod dividend;
pub mod engine;
pub mod event;
pub mod headline;
pub mod margin;
pub mod metrics;
pub mod model;
pub mod rng;
pub mod state;

pub use archetype::Archetype;
pub use dividend::{
    BudgetLedger, CatalogItem, DividendError, GovernanceHeatmap, ReceiptBracket, TaxpayerReceipt,
};
pub use engine::{ChoiceOutcome, SimEngine, SimEnv, SimError, TickOutcome};
pub use event::{Choice, Event, EventTable, EventTableError};
pub use headline::HeadlinePools;
pub use margin::{ElectionRecord, MarginReport};
pub use metrics::{Metric, MetricOp, Metrics};
pub use model::{ModelSet, PolicyModel};
pub use rng::{RngOracle, compute_seed, rng_stream};
pub use state::{HistoryEntry, NewsTicker, Phase, SimState};
