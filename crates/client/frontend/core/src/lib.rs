//! Cross-frontend primitives for presenting a session.
//!
//! Houses the runnable-frontend trait and the view-model types that both the
//! CLI and future graphical clients can reuse.
pub mod frontend;
pub mod view_model;

pub use frontend::Frontend;
pub use view_model::{DividendPanel, MarginPanel, Redraw, SessionView};
