//! Pending-action queue.
//!
//! Contestable actions do not take effect when they are declared. They wait
//! here for one full turn so that other players can veto them, and the game
//! resolves whatever survives at the next turn boundary in the order it was
//! declared.

mod pending;

pub use pending::{PendingAction, PendingId, PendingQueue};
