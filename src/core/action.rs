//! Action vocabulary and action history records.
//!
//! Every player move is one of six [`ActionKind`]s. Five of them are
//! contestable: they are registered as pending and only take effect when the
//! next turn boundary resolves them. Gather is applied on the spot.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// The six standard player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Take one coin. Never pending.
    Gather,
    /// Collect tax at resolution.
    Tax,
    /// Pay for an extra turn.
    Bribe,
    /// Steal from a target at resolution.
    Arrest,
    /// Pay to fine a target at resolution.
    Sanction,
    /// Pay to eliminate a target at resolution.
    Coup,
}

impl ActionKind {
    /// All kinds, in declaration order.
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Gather,
        ActionKind::Tax,
        ActionKind::Bribe,
        ActionKind::Arrest,
        ActionKind::Sanction,
        ActionKind::Coup,
    ];

    /// Lowercase display name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Gather => "gather",
            ActionKind::Tax => "tax",
            ActionKind::Bribe => "bribe",
            ActionKind::Arrest => "arrest",
            ActionKind::Sanction => "sanction",
            ActionKind::Coup => "coup",
        }
    }

    /// Whether the action goes through the pending queue.
    #[must_use]
    pub const fn is_contestable(self) -> bool {
        !matches!(self, ActionKind::Gather)
    }

    /// Whether the action names a target player.
    ///
    /// Vetoes of untargeted kinds (tax, bribe) are matched against the actor,
    /// the others against the target.
    #[must_use]
    pub const fn is_targeted(self) -> bool {
        matches!(
            self,
            ActionKind::Arrest | ActionKind::Sanction | ActionKind::Coup
        )
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging, and presentation layers that show a move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// What they did.
    pub kind: ActionKind,

    /// Who they did it to, for targeted actions.
    pub target: Option<PlayerId>,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(
        player: PlayerId,
        kind: ActionKind,
        target: Option<PlayerId>,
        turn: u32,
        sequence: u32,
    ) -> Self {
        Self {
            player,
            kind,
            target,
            turn,
            sequence,
        }
    }
}
