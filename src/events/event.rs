//! Things that happened during a game.
//!
//! The engine appends one [`GameEvent`] per observable change. A presentation
//! layer reads them back with [`Game::events`](crate::rules::Game::events) or
//! consumes them with [`Game::drain_events`](crate::rules::Game::drain_events).

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, PlayerId};
use crate::roles::Reaction;
use crate::stack::PendingId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player took a seat.
    PlayerJoined { player: PlayerId },

    /// A contestable action entered the pending queue.
    Registered {
        pending: PendingId,
        kind: ActionKind,
        actor: PlayerId,
        target: Option<PlayerId>,
    },

    /// A pending entry was cancelled by a veto.
    Vetoed {
        pending: PendingId,
        kind: ActionKind,
        blocker: PlayerId,
    },

    /// A pending entry took effect.
    Resolved {
        pending: PendingId,
        kind: ActionKind,
        actor: PlayerId,
        target: Option<PlayerId>,
    },

    /// A pending entry reached resolution but had nothing to act on, because
    /// its actor or target had left the game.
    Fizzled {
        pending: PendingId,
        kind: ActionKind,
        actor: PlayerId,
    },

    /// A role reaction changed a balance.
    Reacted { player: PlayerId, reaction: Reaction },

    /// A player left the active roster.
    PlayerRemoved { player: PlayerId },

    /// `player` became the current player.
    TurnStarted { player: PlayerId, turn: u32 },

    /// A Spy looked at another player's balance.
    BalanceRevealed {
        spy: PlayerId,
        target: PlayerId,
        coins: i64,
    },

    /// A Baron invested.
    Invested {
        player: PlayerId,
        paid: i64,
        gained: i64,
    },
}

impl GameEvent {
    /// Short lowercase tag, handy for logs and filters.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            GameEvent::PlayerJoined { .. } => "joined",
            GameEvent::Registered { .. } => "registered",
            GameEvent::Vetoed { .. } => "vetoed",
            GameEvent::Resolved { .. } => "resolved",
            GameEvent::Fizzled { .. } => "fizzled",
            GameEvent::Reacted { .. } => "reacted",
            GameEvent::PlayerRemoved { .. } => "removed",
            GameEvent::TurnStarted { .. } => "turn_started",
            GameEvent::BalanceRevealed { .. } => "revealed",
            GameEvent::Invested { .. } => "invested",
        }
    }

    /// Whether `player` appears anywhere in the event.
    #[must_use]
    pub fn involves(&self, player: PlayerId) -> bool {
        match *self {
            GameEvent::PlayerJoined { player: p }
            | GameEvent::Reacted { player: p, .. }
            | GameEvent::PlayerRemoved { player: p }
            | GameEvent::TurnStarted { player: p, .. }
            | GameEvent::Invested { player: p, .. } => p == player,
            GameEvent::Registered { actor, target, .. }
            | GameEvent::Resolved { actor, target, .. } => {
                actor == player || target == Some(player)
            }
            GameEvent::Vetoed { blocker, .. } => blocker == player,
            GameEvent::Fizzled { actor, .. } => actor == player,
            GameEvent::BalanceRevealed { spy, target, .. } => spy == player || target == player,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PlayerJoined { player } => write!(f, "{player} joined"),
            GameEvent::Registered {
                kind,
                actor,
                target: Some(target),
                ..
            } => write!(f, "{actor} declared {kind} on {target}"),
            GameEvent::Registered { kind, actor, .. } => write!(f, "{actor} declared {kind}"),
            GameEvent::Vetoed { kind, blocker, .. } => write!(f, "{blocker} blocked {kind}"),
            GameEvent::Resolved { kind, actor, .. } => write!(f, "{kind} by {actor} resolved"),
            GameEvent::Fizzled { kind, actor, .. } => write!(f, "{kind} by {actor} fizzled"),
            GameEvent::Reacted { player, reaction } => write!(f, "{player} reacted: {reaction:?}"),
            GameEvent::PlayerRemoved { player } => write!(f, "{player} removed"),
            GameEvent::TurnStarted { player, turn } => write!(f, "turn {turn}: {player}"),
            GameEvent::BalanceRevealed { spy, target, coins } => {
                write!(f, "{spy} saw {target} holding {coins}")
            }
            GameEvent::Invested {
                player,
                paid,
                gained,
            } => write!(f, "{player} invested {paid} for {gained}"),
        }
    }
}
