//! Event log.
//!
//! Every state change the engine makes is mirrored by a [`GameEvent`]. The
//! log is append-only from the engine's side; callers may drain it.

mod event;

pub use event::GameEvent;
