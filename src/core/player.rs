//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Stable handle into the game's player arena. Ids are never reused within a
//! game, so a handle to a removed player still resolves to that player.
//!
//! ## PlayerArena
//!
//! Vec-backed storage indexed by `PlayerId`. Players are appended when they
//! join and never dropped while the game lives.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::config::Costs;
use super::error::{GameError, Result};
use crate::roles::{Reaction, Role};

/// Player identifier supporting up to 255 players per game.
///
/// Player indices are 0-based: the first player to join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player: name, balance and role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    coins: i64,
    role: Role,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            coins: 0,
            role,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn coins(&self) -> i64 {
        self.coins
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn role_name(&self) -> &'static str {
        self.role.name()
    }

    /// Replace the role.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Add `n` coins. Non-positive amounts are ignored.
    pub fn add_coins(&mut self, n: i64) {
        if n <= 0 {
            return;
        }
        self.coins += n;
    }

    /// Remove `n` coins, failing with `OutOfCoins` if the balance is short.
    ///
    /// Non-positive amounts are ignored.
    pub fn remove_coins(&mut self, n: i64) -> Result<()> {
        if n <= 0 {
            return Ok(());
        }
        if n > self.coins {
            return Err(GameError::out_of_coins(format!(
                "Player \"{}\" cannot remove {} coins",
                self.name, n
            )));
        }
        self.coins -= n;
        Ok(())
    }

    /// Remove up to `n` coins and return how many were taken.
    pub(crate) fn take_up_to(&mut self, n: i64) -> i64 {
        let taken = n.clamp(0, self.coins);
        self.coins -= taken;
        taken
    }

    pub(crate) fn handle_start_turn(&mut self, costs: &Costs) -> Reaction {
        let reaction = self.role.on_start_turn(self.coins, costs);
        self.apply(reaction);
        reaction
    }

    pub(crate) fn handle_arrested(&mut self) -> Reaction {
        let reaction = self.role.on_arrested(self.coins);
        self.apply(reaction);
        reaction
    }

    pub(crate) fn handle_sanctioned(&mut self) -> Reaction {
        let reaction = self.role.on_sanctioned(self.coins);
        self.apply(reaction);
        reaction
    }

    fn apply(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::None => {}
            Reaction::Gain(n) => self.add_coins(n),
            Reaction::Lose(n) => {
                self.take_up_to(n);
            }
        }
    }
}

/// Arena of every player that ever joined a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerArena {
    data: Vec<Player>,
}

impl PlayerArena {
    /// Most players one arena can hold.
    pub const CAPACITY: usize = u8::MAX as usize + 1;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new player and return its handle.
    pub fn push(&mut self, name: impl Into<String>, role: Role) -> Result<PlayerId> {
        if self.data.len() >= Self::CAPACITY {
            return Err(GameError::illegal(format!(
                "At most {} players supported",
                Self::CAPACITY
            )));
        }
        let id = PlayerId(self.data.len() as u8);
        self.data.push(Player::new(id, name, role));
        Ok(id)
    }

    /// Number of players ever seated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, player: PlayerId) -> Result<&Player> {
        self.data
            .get(player.index())
            .ok_or_else(|| GameError::illegal(format!("Unknown player: {player}")))
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Result<&mut Player> {
        self.data
            .get_mut(player.index())
            .ok_or_else(|| GameError::illegal(format!("Unknown player: {player}")))
    }

    /// Iterate over all seated players in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.data.iter()
    }
}

/// Infallible access for ids the arena handed out.
///
/// Panics on an id from another game; use [`PlayerArena::get`] for ids of
/// unknown origin.
impl Index<PlayerId> for PlayerArena {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<PlayerId> for PlayerArena {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
