//! Game rules: the turn engine, the per-player action surface and match
//! setup.
//!
//! [`Game`] owns all state and is the only thing that advances turns,
//! resolves pending actions and changes the roster. [`Actor`] is how a
//! player acts on it. [`MatchBuilder`] seats players and deals roles.

mod actor;
mod builder;
mod engine;

pub use actor::{Actor, SpecialOutcome};
pub use builder::MatchBuilder;
pub use engine::Game;
