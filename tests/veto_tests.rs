//! Vetoes of pending actions, at the engine level and through role-gated
//! actors.

use coup_engine::{Abilities, ActionKind, Game, GameError, GameEvent, PlayerId, Role};

struct Table {
    game: Game,
    governor: PlayerId,
    auditor: PlayerId,
    spy: PlayerId,
    general: PlayerId,
    judge: PlayerId,
    rogue: PlayerId,
}

/// One of each vetoing role plus a player who can start everything.
fn table() -> Table {
    let mut game = Game::new();
    let rogue = game.add_player("Rogue", Role::Plain(Abilities::all())).unwrap();
    let governor = game.add_player("Governor", Role::Governor).unwrap();
    let auditor = game.add_player("Auditor", Role::Auditor).unwrap();
    let spy = game.add_player("Spy", Role::Spy).unwrap();
    let general = game.add_player("General", Role::General).unwrap();
    let judge = game.add_player("Judge", Role::Judge).unwrap();
    Table {
        game,
        governor,
        auditor,
        spy,
        general,
        judge,
        rogue,
    }
}

// =============================================================================
// Role-Gated Vetoes
// =============================================================================

#[test]
fn test_governor_and_auditor_block_tax() {
    for pick in [0, 1] {
        let mut t = table();
        let blocker = if pick == 0 { t.governor } else { t.auditor };
        t.game.register_tax(t.rogue).unwrap();

        t.game.actor(blocker).block_tax(t.rogue).unwrap();
        t.game.next_turn();
        assert_eq!(t.game.player(t.rogue).unwrap().coins(), 0);
        assert_eq!(t.game.pool_coins(), 50);
    }
}

#[test]
fn test_judge_blocks_bribe_during_extra_turn_window() {
    let mut t = table();
    t.game.player_mut(t.rogue).unwrap().add_coins(4);
    t.game.actor(t.rogue).bribe().unwrap();
    assert_eq!(t.game.player(t.rogue).unwrap().coins(), 0);

    t.game.actor(t.judge).block_bribe(t.rogue).unwrap();
    // The stake goes to the pool, not back to the briber.
    assert_eq!(t.game.player(t.rogue).unwrap().coins(), 0);
    assert_eq!(t.game.pool_coins(), 54);

    // With the bribe gone the turn passes normally.
    t.game.actor(t.rogue).gather().unwrap();
    assert_eq!(t.game.turn().unwrap(), "Governor");
}

#[test]
fn test_spy_blocks_arrest() {
    let mut t = table();
    let victim = t.governor;
    t.game.player_mut(victim).unwrap().add_coins(2);
    t.game.register_arrest(t.rogue, victim).unwrap();

    // Matched on the target, not the arrester.
    assert!(t.game.actor(t.spy).block_arrest(t.rogue).is_err());
    t.game.actor(t.spy).block_arrest(victim).unwrap();
    t.game.next_turn();

    assert_eq!(t.game.player(victim).unwrap().coins(), 2);
    assert_eq!(t.game.player(t.rogue).unwrap().coins(), 0);

    let err = t.game.actor(t.spy).block_arrest(victim).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction(_)));
}

#[test]
fn test_general_blocks_coup() {
    let mut t = table();
    t.game.player_mut(t.rogue).unwrap().add_coins(7);
    t.game.player_mut(t.general).unwrap().add_coins(5);
    t.game.register_coup(t.rogue, t.general).unwrap();

    t.game.actor(t.general).block_coup(t.general).unwrap();
    t.game.next_turn();

    assert!(t.game.is_active(t.general));
    assert_eq!(t.game.player(t.general).unwrap().coins(), 0);
    assert_eq!(t.game.pool_coins(), 57);
    assert_eq!(t.game.players().len(), 6);
}

#[test]
fn test_general_cannot_afford_coup_veto() {
    let mut t = table();
    t.game.player_mut(t.general).unwrap().add_coins(4);
    t.game.register_coup(t.rogue, t.spy).unwrap();

    let err = t.game.actor(t.general).block_coup(t.spy).unwrap_err();
    assert_eq!(err, GameError::OutOfCoins("Need 5 coins to block coup".into()));
    assert_eq!(t.game.player(t.general).unwrap().coins(), 4);

    t.game.next_turn();
    assert!(!t.game.is_active(t.spy));
}

#[test]
fn test_general_block_without_pending_coup() {
    let mut t = table();
    t.game.player_mut(t.general).unwrap().add_coins(5);
    let err = t.game.actor(t.general).block_coup(t.general).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction(_)));
    assert_eq!(t.game.player(t.general).unwrap().coins(), 5);
}

#[test]
fn test_wrong_role_cannot_veto() {
    let mut t = table();
    t.game.register_tax(t.rogue).unwrap();
    t.game.register_coup(t.rogue, t.spy).unwrap();

    for blocker in [t.spy, t.general, t.judge] {
        let err = t.game.actor(blocker).block_tax(t.rogue).unwrap_err();
        assert!(matches!(err, GameError::IllegalAction(_)));
    }
    assert!(t.game.actor(t.governor).block_coup(t.spy).is_err());
    assert_eq!(t.game.pending().len(), 2);
}

#[test]
fn test_no_role_blocks_sanction() {
    let mut t = table();
    t.game.register_sanction(t.rogue, t.judge).unwrap();

    for blocker in [t.governor, t.auditor, t.spy, t.general, t.judge] {
        let err = t.game.actor(blocker).block_sanction(t.judge).unwrap_err();
        assert!(matches!(err, GameError::IllegalAction(_)));
    }
    assert_eq!(t.game.pending().len(), 1);
}

// =============================================================================
// Engine-Level Vetoes
// =============================================================================

#[test]
fn test_block_sanction_fines_sanctioner() {
    let mut t = table();
    t.game.player_mut(t.rogue).unwrap().add_coins(5);
    t.game.player_mut(t.judge).unwrap().add_coins(2);
    t.game.register_sanction(t.rogue, t.judge).unwrap();

    t.game.block_sanction(t.judge, t.judge).unwrap();
    t.game.next_turn();

    assert_eq!(t.game.player(t.rogue).unwrap().coins(), 4);
    assert_eq!(t.game.player(t.judge).unwrap().coins(), 2);
    // Stake of 3 plus the 1 coin fine.
    assert_eq!(t.game.pool_coins(), 54);
}

#[test]
fn test_veto_cancels_only_the_earliest_match() {
    let mut t = table();
    t.game.register_tax(t.rogue).unwrap();
    t.game.register_tax(t.rogue).unwrap();

    t.game.block_tax(t.governor, t.rogue).unwrap();
    assert_eq!(t.game.pending().len(), 1);
    t.game.next_turn();
    assert_eq!(t.game.player(t.rogue).unwrap().coins(), 2);
}

#[test]
fn test_register_then_veto_leaves_actor_balance() {
    let mut t = table();
    let actor = t.rogue;
    t.game.player_mut(actor).unwrap().add_coins(9);
    t.game.player_mut(actor).unwrap().remove_coins(4).unwrap();
    t.game.register_bribe(actor).unwrap();
    let after_registration = t.game.player(actor).unwrap().coins();

    t.game.block_bribe(t.judge, actor).unwrap();
    t.game.register_tax(actor).unwrap();
    t.game.block_tax(t.auditor, actor).unwrap();
    t.game.register_arrest(actor, t.spy).unwrap();
    t.game.block_arrest(t.spy, t.spy).unwrap();
    t.game.next_turn();

    assert_eq!(t.game.player(actor).unwrap().coins(), after_registration);
    assert_eq!(t.game.pool_coins(), 54);
}

#[test]
fn test_removed_blocker_cannot_veto() {
    let mut t = table();
    t.game.register_tax(t.rogue).unwrap();
    t.game.remove_player(t.governor).unwrap();
    assert!(t.game.block_tax(t.governor, t.rogue).is_err());
}

#[test]
fn test_veto_event_names_blocker() {
    let mut t = table();
    t.game.register_arrest(t.rogue, t.judge).unwrap();
    t.game.block_arrest(t.spy, t.judge).unwrap();

    match t.game.events().last() {
        Some(GameEvent::Vetoed { kind, blocker, .. }) => {
            assert_eq!(*kind, ActionKind::Arrest);
            assert_eq!(*blocker, t.spy);
        }
        other => panic!("expected a veto event, got {other:?}"),
    }
}
