//! Match setup.
//!
//! ```
//! use coup_engine::roles::Role;
//! use coup_engine::rules::MatchBuilder;
//!
//! let game = MatchBuilder::new()
//!     .seat("Alice", Role::Governor)
//!     .seat_dealt("Bob")
//!     .seat_dealt("Carol")
//!     .deal_seed(7)
//!     .starting_coins(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.players(), vec!["Alice", "Bob", "Carol"]);
//! assert_eq!(game.pool_coins(), 50);
//! ```

use tracing::debug;

use crate::core::{GameConfig, GameError, GameRng, Result};
use crate::roles::{Role, NAMED_ROLES};

use super::engine::Game;

#[derive(Clone, Debug)]
enum Seat {
    Fixed(String, Role),
    Dealt(String),
}

/// Builds a [`Game`] with its players seated.
///
/// Dealt seats draw from a shuffled copy of the named roles. The deck is
/// reshuffled whenever it runs out, so any number of players can be dealt.
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: GameConfig,
    seats: Vec<Seat>,
    seed: u64,
    starting_coins: i64,
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom rules.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seat a player with a chosen role.
    #[must_use]
    pub fn seat(mut self, name: impl Into<String>, role: Role) -> Self {
        self.seats.push(Seat::Fixed(name.into(), role));
        self
    }

    /// Seat a player whose role is dealt at build time.
    #[must_use]
    pub fn seat_dealt(mut self, name: impl Into<String>) -> Self {
        self.seats.push(Seat::Dealt(name.into()));
        self
    }

    /// Seed for dealing roles. Defaults to 0.
    #[must_use]
    pub fn deal_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Coins every player starts with. They do not come out of the pool.
    #[must_use]
    pub fn starting_coins(mut self, coins: i64) -> Self {
        self.starting_coins = coins;
        self
    }

    /// Validate the configuration and seat everyone in order.
    pub fn build(self) -> Result<Game> {
        let mut game =
            Game::with_config(self.config).map_err(|err| GameError::illegal(err.to_string()))?;
        let mut rng = GameRng::new(self.seed);
        let mut deck: Vec<Role> = Vec::new();

        for seat in self.seats {
            let (name, role) = match seat {
                Seat::Fixed(name, role) => (name, role),
                Seat::Dealt(name) => {
                    if deck.is_empty() {
                        deck.extend(NAMED_ROLES);
                        rng.shuffle(&mut deck);
                    }
                    let role = deck.pop().unwrap_or_default();
                    (name, role)
                }
            };
            let id = game.add_player(name, role)?;
            game.player_mut(id)?.add_coins(self.starting_coins);
        }

        debug!(players = game.players().len(), seed = rng.seed(), "match built");
        Ok(game)
    }
}
