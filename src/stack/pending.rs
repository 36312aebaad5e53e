//! FIFO queue of contestable actions awaiting the next turn boundary.
//!
//! Entries are pushed when an action registers and drained in insertion order
//! when the turn advances. Between those two points any entry can be vetoed,
//! which removes it for good.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionKind, PlayerId};

/// Unique identifier for a pending entry within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PendingId(pub u32);

impl PendingId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PendingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pending({})", self.0)
    }
}

/// A registered action that has not resolved yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    pub id: PendingId,

    pub kind: ActionKind,

    /// Who registered the action.
    pub actor: PlayerId,

    /// Who it is aimed at. Always `None` for tax and bribe.
    pub target: Option<PlayerId>,

    /// Coins the actor paid at registration.
    pub stake: i64,

    /// Turn number at registration.
    pub turn: u32,
}

impl PendingAction {
    /// The player a veto of this entry names: the target for targeted kinds,
    /// the actor otherwise.
    #[must_use]
    pub fn subject(&self) -> PlayerId {
        match self.target {
            Some(target) if self.kind.is_targeted() => target,
            _ => self.actor,
        }
    }

    /// Whether a veto of `kind` naming `subject` applies to this entry.
    #[must_use]
    pub fn matches(&self, kind: ActionKind, subject: PlayerId) -> bool {
        self.kind == kind && self.subject() == subject
    }
}

/// Pending entries in registration order.
///
/// Most turns leave at most a handful of entries behind, so the queue stays
/// inline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PendingQueue {
    entries: SmallVec<[PendingAction; 4]>,
    next_id: u32,
}

impl PendingQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id.
    pub fn push(
        &mut self,
        kind: ActionKind,
        actor: PlayerId,
        target: Option<PlayerId>,
        stake: i64,
        turn: u32,
    ) -> PendingId {
        let id = PendingId::new(self.next_id);
        self.next_id += 1;

        self.entries.push(PendingAction {
            id,
            kind,
            actor,
            target,
            stake,
            turn,
        });
        id
    }

    /// Find the earliest matching entry without removing it.
    #[must_use]
    pub fn find_matching(&self, kind: ActionKind, subject: PlayerId) -> Option<&PendingAction> {
        self.entries.iter().find(|e| e.matches(kind, subject))
    }

    /// Remove and return the entry with the given id.
    pub fn remove(&mut self, id: PendingId) -> Option<PendingAction> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Remove every entry, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = PendingAction> + '_ {
        self.entries.drain(..)
    }

    /// Read-only view, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[PendingAction] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
