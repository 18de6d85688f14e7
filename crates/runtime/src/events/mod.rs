//! Topic-based fan-out of runtime events.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{AudioEvent, GameStateEvent};
