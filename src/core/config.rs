//! Game configuration types.
//!
//! A match is configured by a [`GameConfig`]: the starting pool and a
//! [`Costs`] table with every price, yield and threshold the rules use. The
//! defaults are the standard game; house rules override individual entries,
//! either through the `with_*` builders or from a TOML document:
//!
//! ```
//! use coup_engine::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(
//!     r#"
//!     initial_pool = 80
//!
//!     [costs]
//!     coup = 8
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.initial_pool, 80);
//! assert_eq!(config.costs.coup, 8);
//! assert_eq!(config.costs.bribe, 4);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Prices, yields and thresholds of the standard rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Costs {
    /// Stake paid to bribe for an extra turn.
    pub bribe: i64,
    /// Stake paid to sanction a target.
    pub sanction: i64,
    /// Stake paid to coup a target.
    pub coup: i64,
    /// Paid by whoever vetoes a coup.
    pub coup_veto: i64,
    /// Taken from the sanctioner when their sanction is vetoed.
    pub sanction_veto_penalty: i64,
    pub tax: i64,
    pub governor_tax: i64,
    /// Baron invest: pay this much...
    pub invest_cost: i64,
    /// ...and receive this much.
    pub invest_return: i64,
    /// Balance at which a player must coup.
    pub must_coup_threshold: i64,
    /// Balance at which a Merchant earns its turn-start coin.
    pub merchant_bonus_threshold: i64,
    /// Most coins an arrest steals.
    pub arrest_exposure: i64,
    /// Most coins an arrest steals from a Merchant.
    pub merchant_arrest_exposure: i64,
}

impl Default for Costs {
    fn default() -> Self {
        Self {
            bribe: 4,
            sanction: 3,
            coup: 7,
            coup_veto: 5,
            sanction_veto_penalty: 1,
            tax: 2,
            governor_tax: 3,
            invest_cost: 3,
            invest_return: 6,
            must_coup_threshold: 10,
            merchant_bonus_threshold: 3,
            arrest_exposure: 1,
            merchant_arrest_exposure: 2,
        }
    }
}

impl Costs {
    /// Every entry with its field name, for validation messages.
    fn entries(&self) -> [(&'static str, i64); 13] {
        [
            ("bribe", self.bribe),
            ("sanction", self.sanction),
            ("coup", self.coup),
            ("coup_veto", self.coup_veto),
            ("sanction_veto_penalty", self.sanction_veto_penalty),
            ("tax", self.tax),
            ("governor_tax", self.governor_tax),
            ("invest_cost", self.invest_cost),
            ("invest_return", self.invest_return),
            ("must_coup_threshold", self.must_coup_threshold),
            ("merchant_bonus_threshold", self.merchant_bonus_threshold),
            ("arrest_exposure", self.arrest_exposure),
            ("merchant_arrest_exposure", self.merchant_arrest_exposure),
        ]
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Coins in the shared pool when the game starts.
    pub initial_pool: i64,

    pub costs: Costs,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_pool: 50,
            costs: Costs::default(),
        }
    }
}

impl GameConfig {
    /// The standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting pool.
    #[must_use]
    pub fn with_initial_pool(mut self, coins: i64) -> Self {
        self.initial_pool = coins;
        self
    }

    /// Replace the whole cost table.
    #[must_use]
    pub fn with_costs(mut self, costs: Costs) -> Self {
        self.costs = costs;
        self
    }

    /// Set the coup price.
    #[must_use]
    pub fn with_coup_cost(mut self, coins: i64) -> Self {
        self.costs.coup = coins;
        self
    }

    /// Set the balance that forces a coup.
    #[must_use]
    pub fn with_must_coup_threshold(mut self, coins: i64) -> Self {
        self.costs.must_coup_threshold = coins;
        self
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative amounts anywhere in the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_pool < 0 {
            return Err(ConfigError::Invalid(format!(
                "initial_pool must be non-negative, got {}",
                self.initial_pool
            )));
        }
        for (name, value) in self.costs.entries() {
            if value < 0 {
                return Err(ConfigError::Invalid(format!(
                    "costs.{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
