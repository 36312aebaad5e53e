//! Role variants and their capability tables.
//!
//! A role is plain data. Every capability and reaction is one exhaustive
//! `match`, so adding a variant fails to compile until it is wired into each
//! check.

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, Costs, GameError, Result};

/// Initiate flags carried by [`Role::Plain`].
///
/// All flags default to `false`, which makes `Role::Plain(Abilities::default())`
/// the default-deny role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Abilities {
    pub tax: bool,
    pub bribe: bool,
    pub arrest: bool,
    pub sanction: bool,
}

impl Abilities {
    /// Every contestable ability granted.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            tax: true,
            bribe: true,
            arrest: true,
            sanction: true,
        }
    }

    #[must_use]
    pub fn with_tax(mut self) -> Self {
        self.tax = true;
        self
    }

    #[must_use]
    pub fn with_bribe(mut self) -> Self {
        self.bribe = true;
        self
    }

    #[must_use]
    pub fn with_arrest(mut self) -> Self {
        self.arrest = true;
        self
    }

    #[must_use]
    pub fn with_sanction(mut self) -> Self {
        self.sanction = true;
        self
    }
}

/// A player's role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// No named role. Initiates only what its [`Abilities`] grant.
    Plain(Abilities),
    /// Taxes for 3 and vetoes tax.
    Governor,
    /// Vetoes tax.
    Auditor,
    /// Invests (pay 3, gain 6) and is compensated when sanctioned.
    Baron,
    /// Vetoes arrest and can peek at a balance.
    Spy,
    /// Pays to veto a coup; refunded a coin when arrested.
    General,
    /// Vetoes bribes.
    Judge,
    /// Earns a coin at turn start when holding 3+; arrests cost it more.
    Merchant,
}

impl Default for Role {
    fn default() -> Self {
        Role::Plain(Abilities::default())
    }
}

/// The named roles a match deals from.
pub const NAMED_ROLES: [Role; 7] = [
    Role::Governor,
    Role::Auditor,
    Role::Baron,
    Role::Spy,
    Role::General,
    Role::Judge,
    Role::Merchant,
];

/// Balance change requested by a role reaction.
///
/// Reactions are player-local: they never draw from or feed the pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reaction {
    #[default]
    None,
    Gain(i64),
    /// Already capped at the balance the reaction was computed from.
    Lose(i64),
}

impl Role {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Plain(_) => "Plain",
            Role::Governor => "Governor",
            Role::Auditor => "Auditor",
            Role::Baron => "Baron",
            Role::Spy => "Spy",
            Role::General => "General",
            Role::Judge => "Judge",
            Role::Merchant => "Merchant",
        }
    }

    /// Look up a named role by its display name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("plain") {
            return Some(Role::default());
        }
        NAMED_ROLES
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(name))
    }

    /// Whether a player holding this role may start `kind`.
    ///
    /// Gather is open to everyone. Coup is gated by its cost only.
    #[must_use]
    pub fn can_initiate(self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Gather | ActionKind::Coup => true,
            ActionKind::Tax => match self {
                Role::Governor => true,
                Role::Plain(abilities) => abilities.tax,
                _ => false,
            },
            ActionKind::Bribe => matches!(self, Role::Plain(a) if a.bribe),
            ActionKind::Arrest => matches!(self, Role::Plain(a) if a.arrest),
            ActionKind::Sanction => matches!(self, Role::Plain(a) if a.sanction),
        }
    }

    /// Whether this role can veto a pending `kind`.
    #[must_use]
    pub fn can_veto(self, kind: ActionKind) -> bool {
        match self {
            Role::Governor | Role::Auditor => kind == ActionKind::Tax,
            Role::Judge => kind == ActionKind::Bribe,
            Role::Spy => kind == ActionKind::Arrest,
            Role::General => kind == ActionKind::Coup,
            Role::Plain(_) | Role::Baron | Role::Merchant => false,
        }
    }

    /// [`can_veto`](Self::can_veto) as a `Result`, failing with `IllegalAction`.
    pub fn check_veto(self, kind: ActionKind) -> Result<()> {
        if self.can_veto(kind) {
            Ok(())
        } else {
            Err(GameError::illegal(format!(
                "{} cannot block {}",
                self.name(),
                kind
            )))
        }
    }

    /// Coins a resolved tax pays this role.
    #[must_use]
    pub fn tax_yield(self, costs: &Costs) -> i64 {
        match self {
            Role::Governor => costs.governor_tax,
            _ => costs.tax,
        }
    }

    /// Most coins an arrest can take from this role.
    #[must_use]
    pub fn arrest_exposure(self, costs: &Costs) -> i64 {
        match self {
            Role::Merchant => costs.merchant_arrest_exposure,
            _ => costs.arrest_exposure,
        }
    }

    /// Reaction after an arrest against this role resolved.
    #[must_use]
    pub fn on_arrested(self, balance: i64) -> Reaction {
        match self {
            Role::General => Reaction::Gain(1),
            Role::Merchant => Reaction::Lose(balance.min(2)),
            _ => Reaction::None,
        }
    }

    /// Reaction after a sanction against this role resolved.
    #[must_use]
    pub fn on_sanctioned(self, _balance: i64) -> Reaction {
        match self {
            Role::Baron => Reaction::Gain(1),
            // the sanctioner's extra payment on a blocked sanction is engine-level
            Role::Judge => Reaction::None,
            _ => Reaction::None,
        }
    }

    /// Reaction when this role's turn starts.
    #[must_use]
    pub fn on_start_turn(self, balance: i64, costs: &Costs) -> Reaction {
        match self {
            Role::Merchant if balance >= costs.merchant_bonus_threshold => Reaction::Gain(1),
            _ => Reaction::None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
