//! Error types.
//!
//! Every engine error is a caller mistake or a rule violation. Nothing here is
//! fatal: the presentation layer is expected to show the message and carry on.

use thiserror::Error;

/// Rule violations reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation breaks a fixed game rule (role cannot do this, self
    /// target, duplicate name, nothing pending to veto, empty roster, ...).
    #[error("Illegal action: {0}")]
    IllegalAction(String),

    /// The player cannot afford the action or veto.
    #[error("Out of coins: {0}")]
    OutOfCoins(String),

    /// The invoking player is not the current player.
    #[error("Not your turn: {0}")]
    NotYourTurn(String),

    /// `winner()` was asked while more (or fewer) than one player remain.
    #[error("Game still active: {0}")]
    GameStillActive(String),
}

impl GameError {
    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        Self::IllegalAction(msg.into())
    }

    pub(crate) fn out_of_coins(msg: impl Into<String>) -> Self {
        Self::OutOfCoins(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised while loading a [`GameConfig`](super::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
