//! Roles: what a player may start, what it may veto, and how it reacts.
//!
//! Roles hold no game state. The engine asks them questions
//! ([`Role::can_initiate`], [`Role::can_veto`]) and applies the
//! [`Reaction`]s they return.

mod role;

pub use role::{Abilities, Reaction, Role, NAMED_ROLES};
