//! # coup-engine
//!
//! Rules engine for a Coup-style bluffing game: players spend and earn coins
//! from a shared pool, contest each other's actions through role vetoes, and
//! the last player standing wins.
//!
//! ## Design Principles
//!
//! 1. **Deferred resolution**: Contestable actions (tax, bribe, arrest,
//!    sanction, coup) wait in a FIFO pending queue until the next call to
//!    [`Game::next_turn`], where whatever was not vetoed takes effect. The
//!    turn-ending [`Actor`] actions call `next_turn` themselves, so their
//!    entries resolve before the call returns. To leave a veto window, use
//!    the `Game::register_*` calls and advance the turn separately. A bribe
//!    does not end the turn and stays vetoable until the briber's next
//!    turn-ending action.
//!
//! 2. **Closed roles**: A [`Role`] is plain data. Every capability and
//!    reaction is an exhaustive `match`, and reactions are returned as
//!    values for the engine to apply.
//!
//! 3. **Handles, not references**: Players live in a game-owned arena and
//!    are named by [`PlayerId`]. Removed players stay queryable.
//!
//! 4. **Configuration over constants**: Every price, yield and threshold is
//!    in [`GameConfig`], loadable from TOML.
//!
//! ## Example
//!
//! ```
//! use coup_engine::{Game, Role};
//!
//! let mut game = Game::new();
//! let alice = game.add_player("Alice", Role::Governor).unwrap();
//! let bob = game.add_player("Bob", Role::Spy).unwrap();
//!
//! game.actor(alice).tax().unwrap();
//! assert_eq!(game.player(alice).unwrap().coins(), 3);
//! assert_eq!(game.turn().unwrap(), "Bob");
//! # let _ = bob;
//! ```
//!
//! ## Modules
//!
//! - `core`: Player ids and storage, actions, errors, RNG, configuration
//! - `roles`: Role capabilities and reactions
//! - `stack`: The pending-action queue
//! - `events`: Event log entries
//! - `rules`: The game engine, the player action surface, match setup
//!
//! ## Logging
//!
//! The engine emits `tracing` events (registrations, vetoes, resolutions at
//! `debug`, eliminations and reveals at `info`, turn changes at `trace`). It
//! never installs a subscriber.

pub mod core;
pub mod events;
pub mod roles;
pub mod rules;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, ConfigError, Costs, GameConfig, GameError, GameRng, Player,
    PlayerArena, PlayerId, Result,
};

pub use crate::events::GameEvent;

pub use crate::roles::{Abilities, Reaction, Role, NAMED_ROLES};

pub use crate::rules::{Actor, Game, MatchBuilder, SpecialOutcome};

pub use crate::stack::{PendingAction, PendingId, PendingQueue};
