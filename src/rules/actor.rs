//! Acting as one player.
//!
//! [`Actor`] borrows the game mutably for the length of a call chain, so a
//! player can act only while nobody else touches the game:
//!
//! ```
//! use coup_engine::roles::Role;
//! use coup_engine::rules::Game;
//!
//! let mut game = Game::new();
//! let alice = game.add_player("Alice", Role::Governor).unwrap();
//! let bob = game.add_player("Bob", Role::Spy).unwrap();
//!
//! game.actor(alice).gather().unwrap();
//! assert_eq!(game.turn().unwrap(), "Bob");
//! assert!(game.actor(alice).gather().is_err());
//! # let _ = bob;
//! ```
//!
//! Actions that end the turn advance it before returning, which resolves
//! their own pending entry. Only a bribe is still pending afterwards.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ActionKind, GameError, PlayerId, Result};
use crate::events::GameEvent;
use crate::roles::Role;

use super::engine::Game;

/// What a role's special action did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialOutcome {
    /// The role has no special action.
    #[default]
    None,
    /// Baron: paid `paid`, received `gained`.
    Invested { paid: i64, gained: i64 },
    /// Spy: `target` holds `coins`.
    Revealed { target: PlayerId, coins: i64 },
}

/// A player's view of the game, with the player's action vocabulary.
///
/// The six standard actions require that this player is the current one.
/// Special actions and vetoes may be used at any time.
pub struct Actor<'a> {
    game: &'a mut Game,
    id: PlayerId,
}

impl<'a> Actor<'a> {
    pub(crate) fn new(game: &'a mut Game, id: PlayerId) -> Self {
        Self { game, id }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    fn role(&self) -> Result<Role> {
        Ok(self.game.player(self.id)?.role())
    }

    fn coins(&self) -> Result<i64> {
        Ok(self.game.player(self.id)?.coins())
    }

    fn ensure_turn(&self) -> Result<()> {
        let current = self.game.current_player()?;
        let me = self.game.player(self.id)?;
        if current != self.id {
            return Err(GameError::NotYourTurn(format!(
                "{} cannot act on {}'s turn",
                me.name(),
                self.game.player(current)?.name()
            )));
        }
        Ok(())
    }

    fn ensure_can(&self, kind: ActionKind) -> Result<()> {
        let role = self.role()?;
        if role.can_initiate(kind) {
            Ok(())
        } else {
            Err(GameError::illegal(format!("Role {role} cannot {kind}")))
        }
    }

    fn ensure_funds(&self, cost: i64, what: &str) -> Result<()> {
        if self.coins()? < cost {
            return Err(GameError::out_of_coins(format!("Need {cost} coins to {what}")));
        }
        Ok(())
    }

    fn pay(&mut self, cost: i64) -> Result<()> {
        self.game.player_mut(self.id)?.remove_coins(cost)
    }

    // === Standard actions ===

    /// Take one coin and end the turn. Cannot be vetoed.
    pub fn gather(&mut self) -> Result<()> {
        self.ensure_turn()?;
        self.game.player_mut(self.id)?.add_coins(1);
        self.game.record(self.id, ActionKind::Gather, None);
        debug!(player = %self.id, "gather");
        self.game.next_turn();
        Ok(())
    }

    /// Declare tax and end the turn.
    pub fn tax(&mut self) -> Result<()> {
        self.ensure_turn()?;
        self.ensure_can(ActionKind::Tax)?;
        self.game.register_tax(self.id)?;
        self.game.next_turn();
        Ok(())
    }

    /// Pay for an extra turn. The turn does not end.
    pub fn bribe(&mut self) -> Result<()> {
        self.ensure_turn()?;
        self.ensure_can(ActionKind::Bribe)?;
        let cost = self.game.config().costs.bribe;
        self.ensure_funds(cost, "bribe")?;
        self.pay(cost)?;
        self.game.register_bribe(self.id)?;
        Ok(())
    }

    /// Declare an arrest of `target` and end the turn.
    pub fn arrest(&mut self, target: PlayerId) -> Result<()> {
        self.ensure_turn()?;
        self.ensure_can(ActionKind::Arrest)?;
        if target == self.id {
            return Err(GameError::illegal("Cannot arrest yourself"));
        }
        self.game.register_arrest(self.id, target)?;
        self.game.next_turn();
        Ok(())
    }

    /// Pay to sanction `target` and end the turn.
    pub fn sanction(&mut self, target: PlayerId) -> Result<()> {
        self.ensure_turn()?;
        self.ensure_can(ActionKind::Sanction)?;
        let cost = self.game.config().costs.sanction;
        self.ensure_funds(cost, "sanction")?;
        self.game.ensure_active(target)?;
        self.pay(cost)?;
        self.game.register_sanction(self.id, target)?;
        self.game.next_turn();
        Ok(())
    }

    /// Pay to coup `target` and end the turn.
    pub fn coup(&mut self, target: PlayerId) -> Result<()> {
        self.ensure_turn()?;
        let cost = self.game.config().costs.coup;
        self.ensure_funds(cost, "coup")?;
        if target == self.id {
            return Err(GameError::illegal("Cannot coup yourself"));
        }
        self.game.ensure_active(target)?;
        self.pay(cost)?;
        self.game.register_coup(self.id, target)?;
        self.game.next_turn();
        Ok(())
    }

    // === Role abilities ===

    /// Use the role's special action. Does not need the turn and does not
    /// end it.
    ///
    /// A Baron invests (the target is ignored). A Spy looks at `target`'s
    /// balance. Every other role does nothing.
    pub fn special_action(&mut self, target: PlayerId) -> Result<SpecialOutcome> {
        match self.role()? {
            Role::Baron => {
                let costs = &self.game.config().costs;
                let (paid, gained) = (costs.invest_cost, costs.invest_return);
                self.ensure_funds(paid, "invest")?;
                self.pay(paid)?;
                self.game.player_mut(self.id)?.add_coins(gained);
                debug!(player = %self.id, paid, gained, "invested");
                self.game.push_event(GameEvent::Invested {
                    player: self.id,
                    paid,
                    gained,
                });
                Ok(SpecialOutcome::Invested { paid, gained })
            }
            Role::Spy => {
                let coins = self.game.player(target)?.coins();
                info!(spy = %self.id, %target, coins, "balance revealed");
                self.game.push_event(GameEvent::BalanceRevealed {
                    spy: self.id,
                    target,
                    coins,
                });
                Ok(SpecialOutcome::Revealed { target, coins })
            }
            Role::Plain(_)
            | Role::Governor
            | Role::Auditor
            | Role::General
            | Role::Judge
            | Role::Merchant => Ok(SpecialOutcome::None),
        }
    }

    /// Veto `target`'s pending tax. Governor and Auditor only.
    pub fn block_tax(&mut self, target: PlayerId) -> Result<()> {
        self.gated_veto(ActionKind::Tax, target)
    }

    /// Veto `target`'s pending bribe. Judge only.
    pub fn block_bribe(&mut self, target: PlayerId) -> Result<()> {
        self.gated_veto(ActionKind::Bribe, target)
    }

    /// Veto the pending arrest of `target`. Spy only.
    pub fn block_arrest(&mut self, target: PlayerId) -> Result<()> {
        self.gated_veto(ActionKind::Arrest, target)
    }

    /// No role vetoes sanctions, so this always fails. Use
    /// [`Game::block_sanction`] for an engine-level veto.
    pub fn block_sanction(&mut self, target: PlayerId) -> Result<()> {
        self.gated_veto(ActionKind::Sanction, target)
    }

    /// Veto the pending coup of `target`. General only, and costs the veto fee.
    pub fn block_coup(&mut self, target: PlayerId) -> Result<()> {
        self.gated_veto(ActionKind::Coup, target)
    }

    fn gated_veto(&mut self, kind: ActionKind, target: PlayerId) -> Result<()> {
        self.role()?.check_veto(kind)?;
        self.game.veto(kind, self.id, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Abilities;

    #[test]
    fn test_gather_requires_turn() {
        let mut game = Game::new();
        let a = game.add_player("A", Role::Spy).unwrap();
        let b = game.add_player("B", Role::Spy).unwrap();

        let err = game.actor(b).gather().unwrap_err();
        assert_eq!(err, GameError::NotYourTurn("B cannot act on A's turn".into()));

        game.actor(a).gather().unwrap();
        assert_eq!(game.player(a).unwrap().coins(), 1);
        assert_eq!(game.current_player().unwrap(), b);
    }

    #[test]
    fn test_action_on_empty_roster() {
        let mut game = Game::new();
        let err = game.actor(PlayerId::new(0)).gather().unwrap_err();
        assert!(matches!(err, GameError::IllegalAction(_)));
    }

    #[test]
    fn test_role_gating_message() {
        let mut game = Game::new();
        let a = game.add_player("A", Role::Spy).unwrap();
        game.add_player("B", Role::Spy).unwrap();

        let err = game.actor(a).tax().unwrap_err();
        assert_eq!(err, GameError::IllegalAction("Role Spy cannot tax".into()));
    }

    #[test]
    fn test_bribe_checks_funds_and_keeps_turn() {
        let mut game = Game::new();
        let a = game
            .add_player("A", Role::Plain(Abilities::default().with_bribe()))
            .unwrap();
        game.add_player("B", Role::Spy).unwrap();

        game.player_mut(a).unwrap().add_coins(3);
        assert!(matches!(
            game.actor(a).bribe(),
            Err(GameError::OutOfCoins(_))
        ));
        assert_eq!(game.player(a).unwrap().coins(), 3);

        game.player_mut(a).unwrap().add_coins(1);
        game.actor(a).bribe().unwrap();
        assert_eq!(game.player(a).unwrap().coins(), 0);
        assert_eq!(game.turn().unwrap(), "A");
        assert_eq!(game.pending().len(), 1);
    }

    #[test]
    fn test_coup_checks_order() {
        let mut game = Game::new();
        let a = game.add_player("A", Role::Spy).unwrap();
        let b = game.add_player("B", Role::Spy).unwrap();

        // Funds are checked before the self-target rule.
        assert!(matches!(game.actor(a).coup(a), Err(GameError::OutOfCoins(_))));

        game.player_mut(a).unwrap().add_coins(7);
        assert!(matches!(game.actor(a).coup(a), Err(GameError::IllegalAction(_))));
        assert_eq!(game.player(a).unwrap().coins(), 7);

        game.actor(a).coup(b).unwrap();
        assert_eq!(game.player(a).unwrap().coins(), 0);
        assert_eq!(game.players(), vec!["A"]);
        assert_eq!(game.winner().unwrap(), "A");
    }

    #[test]
    fn test_sanction_on_removed_target_charges_nothing() {
        let mut game = Game::new();
        let a = game
            .add_player("A", Role::Plain(Abilities::default().with_sanction()))
            .unwrap();
        let b = game.add_player("B", Role::Spy).unwrap();
        game.add_player("C", Role::Spy).unwrap();
        game.remove_player(b).unwrap();

        game.player_mut(a).unwrap().add_coins(3);
        assert!(game.actor(a).sanction(b).is_err());
        assert_eq!(game.player(a).unwrap().coins(), 3);
        assert_eq!(game.turn().unwrap(), "A");
    }

    #[test]
    fn test_special_actions() {
        let mut game = Game::new();
        let baron = game.add_player("Baron", Role::Baron).unwrap();
        let spy = game.add_player("Spy", Role::Spy).unwrap();
        let judge = game.add_player("Judge", Role::Judge).unwrap();

        assert!(matches!(
            game.actor(baron).special_action(baron),
            Err(GameError::OutOfCoins(_))
        ));

        game.player_mut(baron).unwrap().add_coins(3);
        let outcome = game.actor(baron).special_action(baron).unwrap();
        assert_eq!(outcome, SpecialOutcome::Invested { paid: 3, gained: 6 });
        assert_eq!(game.player(baron).unwrap().coins(), 6);

        let outcome = game.actor(spy).special_action(baron).unwrap();
        assert_eq!(
            outcome,
            SpecialOutcome::Revealed {
                target: baron,
                coins: 6
            }
        );

        assert_eq!(
            game.actor(judge).special_action(spy).unwrap(),
            SpecialOutcome::None
        );

        // Nothing above touched the turn or the pool.
        assert_eq!(game.turn().unwrap(), "Baron");
        assert_eq!(game.pool_coins(), 50);
    }

    #[test]
    fn test_gated_veto_rejects_wrong_role() {
        let mut game = Game::new();
        let a = game
            .add_player("A", Role::Plain(Abilities::default().with_bribe()))
            .unwrap();
        let spy = game.add_player("Spy", Role::Spy).unwrap();
        let judge = game.add_player("Judge", Role::Judge).unwrap();

        game.player_mut(a).unwrap().add_coins(4);
        game.actor(a).bribe().unwrap();

        let err = game.actor(spy).block_bribe(a).unwrap_err();
        assert_eq!(err, GameError::IllegalAction("Spy cannot block bribe".into()));
        assert_eq!(game.pending().len(), 1);

        game.actor(judge).block_bribe(a).unwrap();
        assert!(game.pending().is_empty());
        assert_eq!(game.pool_coins(), 54);
    }
}
