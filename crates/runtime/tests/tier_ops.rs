use std::sync::Arc;

use ladder_core::{LadderConfig, LadderKind, LadderRegistry, StateId, TierOutcome};
use runtime::{BattlerState, LadderRuntime, MarkerStore, RuntimeError};

fn runtime(config: LadderConfig) -> LadderRuntime {
    let registry = LadderRegistry::standard(config).unwrap();
    LadderRuntime::with_seed(Arc::new(registry), 7)
}

fn markers(battler: &BattlerState) -> Vec<u16> {
    battler.markers().map(|id| id.0).collect()
}

#[test]
fn sad_climbs_and_saturates() {
    let rt = runtime(LadderConfig::default());
    let mut battler = BattlerState::new(1);

    let result = rt.add_state_tier(&mut battler, LadderKind::Sad, 2).unwrap();
    assert_eq!(result.target, StateId(11));
    assert_eq!(markers(&battler), vec![11]);

    let result = rt.add_state_tier(&mut battler, LadderKind::Sad, 5).unwrap();
    assert_eq!(result.tier, 3);
    assert_eq!(markers(&battler), vec![12]);
    assert_eq!(rt.state_tier(&battler, LadderKind::Sad).unwrap(), 3);

    let result = rt.add_state_tier(&mut battler, LadderKind::Sad, 1).unwrap();
    assert_eq!(result.outcome, TierOutcome::Pinned);
    assert_eq!(markers(&battler), vec![12]);

    rt.add_state_tier(&mut battler, LadderKind::Sad, -9).unwrap();
    assert!(markers(&battler).is_empty());
    assert_eq!(rt.state_tier(&battler, LadderKind::Sad).unwrap(), 0);
}

#[test]
fn resisted_debuff_falls_back_toward_neutral() {
    let rt = runtime(LadderConfig::default());
    let mut battler = BattlerState::new(2).with_resistances([StateId(94)]);

    let result = rt.add_state_tier(&mut battler, LadderKind::Atk, -3).unwrap();
    assert_eq!(result.tier, -2);
    assert_eq!(result.fallback_steps, 1);
    assert_eq!(markers(&battler), vec![93]);
}

#[test]
fn fully_resisted_ladder_leaves_battler_untouched() {
    let rt = runtime(LadderConfig::default());
    let mut battler =
        BattlerState::new(3).with_resistances([StateId(10), StateId(11), StateId(12)]);

    let result = rt.add_state_tier(&mut battler, LadderKind::Sad, 3).unwrap();
    assert!(!result.changed());
    assert_eq!(result.outcome, TierOutcome::Unchanged);
    assert!(markers(&battler).is_empty());
}

#[test]
fn names_resolve_case_insensitively_through_aliases() {
    let rt = runtime(LadderConfig::default());
    let mut battler = BattlerState::new(4);

    rt.add_state_tier_named(&mut battler, "Speed", 2).unwrap();
    assert_eq!(rt.state_tier_named(&battler, "SPD").unwrap(), 2);
    assert_eq!(rt.state_tier_named(&battler, "agility").unwrap(), 2);

    let error = rt.add_state_tier_named(&mut battler, "luck", 1).unwrap_err();
    assert!(matches!(error, RuntimeError::Registry(_)));
    assert_eq!(markers(&battler), vec![102]);
}

#[test]
fn set_state_tier_replaces_the_current_marker() {
    let rt = runtime(LadderConfig::default());
    let mut battler = BattlerState::new(5).with_markers([StateId(91)]);

    let result = rt.set_state_tier(&mut battler, LadderKind::Atk, -1).unwrap();
    assert_eq!(result.tier, -1);
    assert_eq!(markers(&battler), vec![92]);

    rt.set_state_tier(&mut battler, LadderKind::Atk, 0).unwrap();
    assert!(markers(&battler).is_empty());
}

#[test]
fn set_state_tier_to_neutral_reports_the_removal() {
    let rt = runtime(LadderConfig::default());
    let mut battler = BattlerState::new(8).with_markers([StateId(12)]);

    let result = rt.set_state_tier(&mut battler, LadderKind::Sad, 0).unwrap();
    assert!(!battler.has_marker(StateId(12)));
    assert_eq!(result.previous, StateId(12));
    assert_eq!(result.previous_tier, 3);
    assert!(result.changed());
    assert_eq!(result.removed(), Some(StateId(12)));
    assert_eq!(result.added(), None);
    assert_eq!(result.applied(), -3);
    assert_eq!(result.outcome, TierOutcome::Changed);
}

#[test]
fn set_state_tier_to_the_held_tier_is_unchanged() {
    let rt = runtime(LadderConfig::default());
    let mut battler = BattlerState::new(9).with_markers([StateId(11)]);

    let result = rt.set_state_tier(&mut battler, LadderKind::Sad, 2).unwrap();
    assert_eq!(markers(&battler), vec![11]);
    assert_eq!(result.previous, StateId(11));
    assert_eq!(result.target, StateId(11));
    assert!(!result.changed());
    assert_eq!(result.applied(), 0);
    assert_eq!(result.outcome, TierOutcome::Unchanged);
}

#[test]
fn random_tier_stays_in_range() {
    let rt = runtime(LadderConfig::default());
    for id in 0..50 {
        let mut battler = BattlerState::new(id);
        let result = rt
            .add_random_tier(&mut battler, LadderKind::Def, 1, 2)
            .unwrap();
        assert!((1..=2).contains(&result.tier));
    }

    let mut battler = BattlerState::new(99);
    let error = rt
        .add_random_tier(&mut battler, LadderKind::Def, 2, 1)
        .unwrap_err();
    assert_eq!(error, RuntimeError::EmptyTierRange { min: 2, max: 1 });
}

#[test]
fn split_buffs_walk_one_half_per_sign() {
    let rt = runtime(LadderConfig::with_combine_buffs(false));
    let mut battler = BattlerState::new(6).with_markers([StateId(93)]);

    // the upper half does not see the debuff marker
    let result = rt.add_state_tier(&mut battler, LadderKind::Atk, 1).unwrap();
    assert_eq!(result.previous, StateId::NONE);
    assert_eq!(result.target, StateId(89));
    assert_eq!(markers(&battler), vec![89, 93]);

    let result = rt.add_state_tier(&mut battler, LadderKind::Atk, -5).unwrap();
    assert_eq!(result.target, StateId(94));
    assert_eq!(markers(&battler), vec![89, 94]);
}

#[test]
fn combined_buffs_cross_neutral() {
    let rt = runtime(LadderConfig::default());
    let mut battler = BattlerState::new(7).with_markers([StateId(93)]);

    rt.add_state_tier(&mut battler, LadderKind::Atk, 3).unwrap();
    assert_eq!(markers(&battler), vec![89]);
    assert!(!battler.has_marker(StateId(93)));
}

#[test]
fn same_seed_replays_the_same_rolls() {
    let roll = || {
        let rt = runtime(LadderConfig::default());
        (0..20)
            .map(|id| {
                let mut battler = BattlerState::new(id);
                rt.add_random_tier(&mut battler, LadderKind::Spd, -3, 3)
                    .unwrap()
                    .tier
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(roll(), roll());
}

#[cfg(feature = "content")]
#[test]
fn missing_content_dir_uses_bundled_ladders() {
    let rt = LadderRuntime::from_content_dir("does/not/exist").unwrap();
    assert!(rt.registry().config().combine_buffs);
    assert_eq!(rt.registry().lookup("Attack").unwrap(), LadderKind::Atk);
}
