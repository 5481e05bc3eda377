//! Event definitions and the topic-based bus.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{SessionEvent, TickerEvent};
