//! Terminal rendering for the portal.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
