//! Typed events published by the session worker.

use serde::{Deserialize, Serialize};

use sim_core::{Archetype, HistoryEntry, Metrics, PolicyModel};

/// Phase-machine progress for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// SETUP → SIMULATION: a run started with the given model.
    ModelSelected { model: PolicyModel },

    /// An uneventful tick completed: drift applied, year advanced.
    YearAdvanced { year: u16, metrics: Metrics },

    /// A crisis is due and the clock is paused until a choice lands.
    CrisisRaised { crisis: sim_core::Event },

    /// A crisis choice was applied and the clock resumed.
    ChoiceResolved {
        year: u16,
        entry: HistoryEntry,
        metrics: Metrics,
    },

    /// The run reached the terminal year.
    Finished {
        archetype: Archetype,
        metrics: Metrics,
    },

    /// END_GAME → SETUP.
    Restarted,
}

/// Cosmetic ticker headlines, separated so ticker-only consumers do not
/// churn on every session transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TickerEvent {
    Headline { year: u16, headline: String },
}
