//! Core engine types: players, actions, errors, RNG, configuration.
//!
//! Nothing in here knows how turns advance. The rules module builds the
//! game loop on top of these pieces.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionKind, ActionRecord};
pub use config::{Costs, GameConfig};
pub use error::{ConfigError, GameError, Result};
pub use player::{Player, PlayerArena, PlayerId};
pub use rng::GameRng;
