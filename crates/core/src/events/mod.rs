//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful goal mutations. Front ends (such as the CLI) implement
//! the sink to react to changes without polling storage.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
