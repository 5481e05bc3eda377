//! Presentation-optimized state updated incrementally from runtime events.

mod civic;
mod session;

pub use civic::{DividendPanel, MarginPanel};
pub use session::SessionView;

bitflags::bitflags! {
    /// Which parts of the screen an update touched.
    ///
    /// Frontends coalesce flags across a batch of events and redraw once.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Redraw: u8 {
        /// Phase, year, metrics, history, or crisis changed.
        const SESSION = 1 << 0;
        /// A headline entered the ticker.
        const TICKER = 1 << 1;
        /// Dividend or margin panel state changed.
        const CIVIC = 1 << 2;
        /// An inline status or error message changed.
        const STATUS = 1 << 3;
    }
}
