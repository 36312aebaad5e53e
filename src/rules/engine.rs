//! The game: roster, turn pointer, coin pool and pending-action resolution.
//!
//! ## Turn cycle
//!
//! Contestable actions are registered into the pending queue and stay there
//! until [`Game::next_turn`] is called. `next_turn` then:
//!
//! 1. resolves every surviving entry in registration order,
//! 2. moves the pointer to the next roster position,
//! 3. fires the new current player's start-of-turn reaction.
//!
//! Any player may veto a matching entry before step 1 reaches it. A veto
//! removes the entry for good and returns its stake to the pool.
//!
//! ## Coins
//!
//! Stakes paid up front (bribe, sanction, coup) leave circulation when the
//! entry resolves. They come back to the pool when the entry is vetoed or a
//! coup finds its target already gone. Tax, gather, investing and role
//! reactions are player-local and never touch the pool.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

use crate::core::{
    ActionKind, ActionRecord, ConfigError, GameConfig, GameError, Player, PlayerArena, PlayerId, Result,
};
use crate::events::GameEvent;
use crate::roles::{Reaction, Role};
use crate::stack::{PendingAction, PendingId, PendingQueue};

use super::actor::Actor;

/// Coins a resolved sanction moves from its target to the pool.
const SANCTION_FINE: i64 = 1;

/// A single match.
///
/// `Game` owns every player. Callers hold [`PlayerId`] handles and act
/// through [`Game::actor`].
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,

    /// Every player that ever joined, including removed ones.
    arena: PlayerArena,

    /// Active players in join order.
    roster: Vec<PlayerId>,

    /// Index into `roster`. 0 while the roster is empty.
    current: usize,

    pool: i64,

    pending: PendingQueue,

    /// Active player names.
    names: FxHashMap<String, PlayerId>,

    turn_number: u32,

    /// Action sequence within the current turn.
    sequence: u32,

    history: Vector<ActionRecord>,

    events: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game with the standard rules and no players.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(GameConfig::default())
    }

    /// A game with custom rules and no players.
    ///
    /// Fails with `ConfigError::Invalid` for any configuration that
    /// [`GameConfig::validate`] rejects.
    pub fn with_config(config: GameConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: GameConfig) -> Self {
        Self {
            pool: config.initial_pool,
            config,
            arena: PlayerArena::new(),
            roster: Vec::new(),
            current: 0,
            pending: PendingQueue::new(),
            names: FxHashMap::default(),
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Roster ===

    /// Seat a new player at the end of the roster with a zero balance.
    ///
    /// Fails with `IllegalAction` if an active player already has this name.
    pub fn add_player(&mut self, name: impl Into<String>, role: Role) -> Result<PlayerId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(GameError::illegal(format!(
                "Player name already taken: {name}"
            )));
        }

        let id = self.arena.push(name.clone(), role)?;
        debug!(player = %id, name = %name, role = %role, "player joined");
        self.names.insert(name, id);
        self.roster.push(id);
        self.events.push(GameEvent::PlayerJoined { player: id });
        Ok(id)
    }

    /// Take a player out of the active roster.
    ///
    /// The removed player stays queryable through [`Game::player`]. The turn
    /// pointer keeps naming the same player when someone before it leaves,
    /// and moves to the successor when the current player leaves.
    pub fn remove_player(&mut self, player: PlayerId) -> Result<()> {
        let pos = self.position(player).ok_or_else(|| {
            GameError::illegal(format!("Player to remove not found: {}", self.describe(player)))
        })?;
        self.detach(pos);
        Ok(())
    }

    fn detach(&mut self, pos: usize) {
        let id = self.roster.remove(pos);
        self.names.remove(self.arena[id].name());

        if self.roster.is_empty() {
            self.current = 0;
        } else if pos < self.current {
            self.current -= 1;
        } else if self.current >= self.roster.len() {
            self.current = 0;
        }

        info!(player = %id, name = %self.arena[id].name(), remaining = self.roster.len(), "player removed");
        self.events.push(GameEvent::PlayerRemoved { player: id });
    }

    fn position(&self, player: PlayerId) -> Option<usize> {
        self.roster.iter().position(|&id| id == player)
    }

    /// Whether `player` is still in the roster.
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.position(player).is_some()
    }

    pub(crate) fn ensure_active(&self, player: PlayerId) -> Result<()> {
        if self.is_active(player) {
            Ok(())
        } else {
            Err(GameError::illegal(format!(
                "{} is not in the game",
                self.describe(player)
            )))
        }
    }

    fn describe(&self, player: PlayerId) -> String {
        self.arena
            .get(player)
            .map_or_else(|_| player.to_string(), |p| p.name().to_string())
    }

    // === Queries ===

    /// Name of the player whose turn it is.
    pub fn turn(&self) -> Result<&str> {
        let id = self.current_player()?;
        Ok(self.arena[id].name())
    }

    /// Handle of the player whose turn it is.
    pub fn current_player(&self) -> Result<PlayerId> {
        self.roster
            .get(self.current)
            .copied()
            .ok_or_else(|| GameError::illegal("No players in game"))
    }

    /// Active player names in join order.
    #[must_use]
    pub fn players(&self) -> Vec<&str> {
        self.roster.iter().map(|&id| self.arena[id].name()).collect()
    }

    /// Active player handles in join order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.roster
    }

    /// Any player that ever joined, active or not.
    pub fn player(&self, player: PlayerId) -> Result<&Player> {
        self.arena.get(player)
    }

    pub fn player_mut(&mut self, player: PlayerId) -> Result<&mut Player> {
        self.arena.get_mut(player)
    }

    /// Handle of the active player with this name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.names.get(name).copied()
    }

    #[must_use]
    pub fn pool_coins(&self) -> i64 {
        self.pool
    }

    /// Turns started so far, counting the first one.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Entries waiting for the next turn boundary, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[PendingAction] {
        self.pending.entries()
    }

    /// Every action taken since the last [`Game::drain_history`]. Cloning
    /// is O(1). It grows with every action, so long-running hosts should
    /// drain it periodically.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Take the action history, leaving it empty. Turn numbers keep counting.
    pub fn drain_history(&mut self) -> Vector<ActionRecord> {
        std::mem::take(&mut self.history)
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the event log, leaving it empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Whether `player` holds enough coins that they must coup.
    ///
    /// Advisory only: the engine does not enforce it.
    pub fn must_coup(&self, player: PlayerId) -> Result<bool> {
        Ok(self.arena.get(player)?.coins() >= self.config.costs.must_coup_threshold)
    }

    /// Name of the last player standing.
    pub fn winner(&self) -> Result<&str> {
        match self.roster.as_slice() {
            [only] => Ok(self.arena[*only].name()),
            [] => Err(GameError::GameStillActive("No players remain".into())),
            _ => Err(GameError::GameStillActive(
                "More than one player remains".into(),
            )),
        }
    }

    /// Act as `player`.
    pub fn actor(&mut self, player: PlayerId) -> Actor<'_> {
        Actor::new(self, player)
    }

    // === Pool ===

    /// Withdraw `n` coins from the pool. Non-positive amounts are ignored.
    pub fn take_from_pool(&mut self, n: i64) -> Result<()> {
        if n <= 0 {
            return Ok(());
        }
        if n > self.pool {
            return Err(GameError::illegal("Not enough coins in the pool"));
        }
        self.pool -= n;
        Ok(())
    }

    /// Deposit `n` coins into the pool. Non-positive amounts are ignored.
    pub fn return_to_pool(&mut self, n: i64) {
        if n > 0 {
            self.pool += n;
        }
    }

    // === Registration ===
    //
    // These assume the caller already collected any stake from the actor. The
    // stake recorded is the configured price, and a veto returns it to the
    // pool.

    pub fn register_tax(&mut self, actor: PlayerId) -> Result<PendingId> {
        self.register(ActionKind::Tax, actor, None, 0)
    }

    pub fn register_bribe(&mut self, actor: PlayerId) -> Result<PendingId> {
        let stake = self.config.costs.bribe;
        self.register(ActionKind::Bribe, actor, None, stake)
    }

    pub fn register_arrest(&mut self, actor: PlayerId, target: PlayerId) -> Result<PendingId> {
        self.register(ActionKind::Arrest, actor, Some(target), 0)
    }

    pub fn register_sanction(&mut self, actor: PlayerId, target: PlayerId) -> Result<PendingId> {
        let stake = self.config.costs.sanction;
        self.register(ActionKind::Sanction, actor, Some(target), stake)
    }

    pub fn register_coup(&mut self, actor: PlayerId, target: PlayerId) -> Result<PendingId> {
        let stake = self.config.costs.coup;
        self.register(ActionKind::Coup, actor, Some(target), stake)
    }

    fn register(
        &mut self,
        kind: ActionKind,
        actor: PlayerId,
        target: Option<PlayerId>,
        stake: i64,
    ) -> Result<PendingId> {
        if !kind.is_contestable() {
            return Err(GameError::illegal(format!("{kind} is never pending")));
        }
        self.ensure_active(actor)?;
        if let Some(target) = target {
            self.ensure_active(target)?;
        }

        let id = self.pending.push(kind, actor, target, stake, self.turn_number);
        debug!(pending = %id, %kind, %actor, ?target, stake, "action registered");
        self.record(actor, kind, target);
        self.events.push(GameEvent::Registered {
            pending: id,
            kind,
            actor,
            target,
        });
        Ok(id)
    }

    pub(crate) fn record(&mut self, player: PlayerId, kind: ActionKind, target: Option<PlayerId>) {
        self.history.push_back(ActionRecord::new(
            player,
            kind,
            target,
            self.turn_number,
            self.sequence,
        ));
        self.sequence += 1;
    }

    // === Vetoes ===
    //
    // Tax and bribe vetoes name the actor, the others name the target. None
    // of these check the blocker's role; `Actor::block_*` does.

    pub fn block_tax(&mut self, blocker: PlayerId, target: PlayerId) -> Result<()> {
        self.veto(ActionKind::Tax, blocker, target)
    }

    pub fn block_bribe(&mut self, blocker: PlayerId, target: PlayerId) -> Result<()> {
        self.veto(ActionKind::Bribe, blocker, target)
    }

    pub fn block_arrest(&mut self, blocker: PlayerId, target: PlayerId) -> Result<()> {
        self.veto(ActionKind::Arrest, blocker, target)
    }

    /// Also fines the sanctioner, capped at their balance.
    pub fn block_sanction(&mut self, blocker: PlayerId, target: PlayerId) -> Result<()> {
        self.veto(ActionKind::Sanction, blocker, target)
    }

    /// Costs the blocker the coup veto fee. Fails with `OutOfCoins` before
    /// anything changes if they cannot pay.
    pub fn block_coup(&mut self, blocker: PlayerId, target: PlayerId) -> Result<()> {
        self.veto(ActionKind::Coup, blocker, target)
    }

    pub(crate) fn veto(&mut self, kind: ActionKind, blocker: PlayerId, subject: PlayerId) -> Result<()> {
        self.ensure_active(blocker)?;
        let (pending, actor, stake) = match self.pending.find_matching(kind, subject) {
            Some(entry) => (entry.id, entry.actor, entry.stake),
            None => {
                return Err(GameError::illegal(format!(
                    "No pending {kind} to block on {}",
                    self.describe(subject)
                )))
            }
        };

        match kind {
            ActionKind::Coup => {
                let fee = self.config.costs.coup_veto;
                if self.arena[blocker].coins() < fee {
                    return Err(GameError::out_of_coins(format!(
                        "Need {fee} coins to block coup"
                    )));
                }
                self.arena[blocker].remove_coins(fee)?;
            }
            ActionKind::Sanction => {
                let penalty = self.config.costs.sanction_veto_penalty;
                let paid = self.arena[actor].take_up_to(penalty);
                self.return_to_pool(paid);
            }
            _ => {}
        }

        self.pending.remove(pending);
        self.return_to_pool(stake);
        debug!(%pending, %kind, %blocker, %actor, refunded = stake, "action vetoed");
        self.events.push(GameEvent::Vetoed {
            pending,
            kind,
            blocker,
        });
        Ok(())
    }

    // === Turn advance ===

    /// Resolve everything pending, then hand the turn to the next player.
    ///
    /// If the player whose turn is ending leaves during resolution, the
    /// pointer already rests on their successor and does not move again. An
    /// unblocked bribe by the current player keeps the turn with them. The
    /// start-of-turn reaction fires in every case.
    pub fn next_turn(&mut self) {
        let outgoing = self.roster.get(self.current).copied();

        let entries: Vec<PendingAction> = self.pending.drain().collect();
        let mut keep_turn = false;
        for entry in entries {
            keep_turn |= self.resolve(entry);
        }

        if self.roster.is_empty() {
            self.current = 0;
            trace!("no players left, turn not advanced");
            return;
        }

        if outgoing.is_some_and(|id| self.is_active(id)) && !keep_turn {
            self.current = (self.current + 1) % self.roster.len();
        }

        self.turn_number += 1;
        self.sequence = 0;

        let id = self.roster[self.current];
        trace!(player = %id, turn = self.turn_number, "turn started");
        self.events.push(GameEvent::TurnStarted {
            player: id,
            turn: self.turn_number,
        });

        let reaction = self.arena[id].handle_start_turn(&self.config.costs);
        self.note_reaction(id, reaction);
    }

    /// Apply one entry. Returns whether the current player keeps the turn.
    fn resolve(&mut self, entry: PendingAction) -> bool {
        let PendingAction {
            id,
            kind,
            actor,
            target,
            stake,
            ..
        } = entry;
        let mut keep_turn = false;

        let applied = match (kind, target) {
            (ActionKind::Tax, _) => {
                let gain = self.arena[actor].role().tax_yield(&self.config.costs);
                self.arena[actor].add_coins(gain);
                true
            }
            (ActionKind::Bribe, _) => {
                keep_turn = self.roster.get(self.current) == Some(&actor);
                keep_turn
            }
            (ActionKind::Arrest, Some(victim)) if self.is_active(actor) && self.is_active(victim) => {
                let exposure = self.arena[victim].role().arrest_exposure(&self.config.costs);
                let stolen = self.arena[victim].take_up_to(exposure);
                self.arena[actor].add_coins(stolen);
                let reaction = self.arena[victim].handle_arrested();
                self.note_reaction(victim, reaction);
                true
            }
            (ActionKind::Sanction, Some(victim)) if self.is_active(actor) && self.is_active(victim) => {
                let fine = self.arena[victim].take_up_to(SANCTION_FINE);
                self.return_to_pool(fine);
                let reaction = self.arena[victim].handle_sanctioned();
                self.note_reaction(victim, reaction);
                true
            }
            (ActionKind::Coup, Some(victim)) => match self.position(victim) {
                Some(pos) => {
                    self.detach(pos);
                    true
                }
                None => {
                    self.return_to_pool(stake);
                    false
                }
            },
            _ => false,
        };

        if applied {
            debug!(pending = %id, %kind, %actor, ?target, "action resolved");
            self.events.push(GameEvent::Resolved {
                pending: id,
                kind,
                actor,
                target,
            });
        } else {
            debug!(pending = %id, %kind, %actor, ?target, "action fizzled");
            self.events.push(GameEvent::Fizzled {
                pending: id,
                kind,
                actor,
            });
        }
        keep_turn
    }

    fn note_reaction(&mut self, player: PlayerId, reaction: Reaction) {
        if reaction != Reaction::None {
            trace!(%player, ?reaction, "role reacted");
            self.events.push(GameEvent::Reacted { player, reaction });
        }
    }
}
