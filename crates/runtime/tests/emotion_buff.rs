use std::sync::Arc;

use ladder_core::{
    LadderConfig, LadderKind, LadderRegistry, LadderSpec, LadderTable, RngOracle, StateId,
};
use runtime::{BattlerState, LadderRuntime};

/// Always draws the first candidate.
struct FirstPick;

impl RngOracle for FirstPick {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }
}

fn runtime() -> LadderRuntime {
    let registry = LadderRegistry::standard(LadderConfig::default()).unwrap();
    LadderRuntime::with_seed(Arc::new(registry), 11)
}

fn feeling(kind: LadderKind, tier: i32) -> BattlerState {
    let rt = runtime();
    let mut battler = BattlerState::new(1);
    rt.set_state_tier(&mut battler, kind, tier).unwrap();
    battler
}

#[test]
fn neutral_battler_has_no_emotion() {
    let rt = runtime();
    let battler = BattlerState::new(1).with_markers([StateId(89)]);
    assert_eq!(rt.emotion_kind(&battler), None);
    assert_eq!(rt.emotion_tier(&battler).unwrap(), 0);
}

#[test]
fn emotion_is_detected_with_its_tier() {
    let rt = runtime();
    let battler = feeling(LadderKind::Angry, 2);
    assert_eq!(rt.emotion_kind(&battler), Some(LadderKind::Angry));
    assert_eq!(rt.emotion_tier(&battler).unwrap(), 2);

    let afraid = BattlerState::new(2).with_markers([StateId(18)]);
    assert_eq!(rt.emotion_kind(&afraid), Some(LadderKind::Afraid));
}

#[test]
fn random_emotion_only_picks_primary_emotions() {
    let rt = runtime();
    for id in 0..40 {
        let mut battler = BattlerState::new(id);
        let result = rt.add_random_emotion(&mut battler, 1).unwrap().unwrap();
        assert!(LadderKind::PRIMARY_EMOTIONS.contains(&result.kind));
        assert_eq!(rt.emotion_kind(&battler), Some(result.kind));
    }
}

#[test]
fn supplementary_emotion_deepens_the_current_one() {
    let rt = runtime();
    let mut battler = feeling(LadderKind::Happy, 1);
    let result = rt.add_supplementary_emotion(&mut battler, 1).unwrap().unwrap();
    assert_eq!(result.kind, LadderKind::Happy);
    assert_eq!(rt.emotion_tier(&battler).unwrap(), 2);

    let mut neutral = BattlerState::new(3);
    assert!(rt.add_supplementary_emotion(&mut neutral, 1).unwrap().is_none());
    assert_eq!(neutral.markers().count(), 0);
}

#[test]
fn advantage_emotion_counters_the_target() {
    let rt = runtime();
    let target = feeling(LadderKind::Sad, 1);
    let mut battler = BattlerState::new(4);

    let result = rt
        .add_advantage_emotion(&mut battler, &target, 1)
        .unwrap()
        .unwrap();
    assert_eq!(result.kind, LadderKind::Angry);
    assert_eq!(rt.emotion_kind(&battler), Some(LadderKind::Angry));
}

#[test]
fn disadvantage_emotion_plays_into_the_target() {
    let rt = runtime();
    let target = feeling(LadderKind::Sad, 1);
    let mut battler = BattlerState::new(5);

    let result = rt
        .add_disadvantage_emotion(&mut battler, &target, 1)
        .unwrap()
        .unwrap();
    assert_eq!(result.kind, LadderKind::Happy);
}

#[test]
fn axis_operations_skip_neutral_and_afraid_targets() {
    let rt = runtime();
    let mut battler = BattlerState::new(6);

    let neutral = BattlerState::new(7);
    assert!(rt.add_advantage_emotion(&mut battler, &neutral, 1).unwrap().is_none());

    let afraid = BattlerState::new(8).with_markers([StateId(18)]);
    assert!(rt.add_advantage_emotion(&mut battler, &afraid, 1).unwrap().is_none());
    assert!(rt.add_disadvantage_emotion(&mut battler, &afraid, 1).unwrap().is_none());
    assert_eq!(battler.markers().count(), 0);
}

#[test]
fn paired_buffs_follow_the_emotion() {
    let rt = runtime();

    let mut happy = feeling(LadderKind::Happy, 1);
    let result = rt.add_supplementary_buff(&mut happy, 1).unwrap().unwrap();
    assert_eq!(result.kind, LadderKind::Spd);
    let result = rt.add_complementary_buff(&mut happy, 1).unwrap().unwrap();
    assert_eq!(result.kind, LadderKind::Atk);

    let mut angry = feeling(LadderKind::Angry, 1);
    let result = rt.add_supplementary_buff(&mut angry, 2).unwrap().unwrap();
    assert_eq!(result.kind, LadderKind::Atk);
    assert_eq!(rt.state_tier(&angry, LadderKind::Atk).unwrap(), 2);

    let mut neutral = BattlerState::new(9);
    assert!(rt.add_supplementary_buff(&mut neutral, 1).unwrap().is_none());

    let mut afraid = BattlerState::new(10).with_markers([StateId(18)]);
    assert!(rt.add_complementary_buff(&mut afraid, 1).unwrap().is_none());
}

#[test]
fn extremum_buffs_target_highest_and_lowest() {
    let rt = runtime();
    let mut battler = BattlerState::new(11);
    rt.set_state_tier(&mut battler, LadderKind::Atk, 2).unwrap();
    rt.set_state_tier(&mut battler, LadderKind::Def, -1).unwrap();

    let result = rt.add_highest_buff(&mut battler, 1).unwrap().unwrap();
    assert_eq!(result.kind, LadderKind::Atk);
    assert_eq!(result.tier, 3);

    let result = rt.add_lowest_buff(&mut battler, -1).unwrap().unwrap();
    assert_eq!(result.kind, LadderKind::Def);
    assert_eq!(result.tier, -2);
}

#[test]
fn extremum_ties_are_broken_by_the_rng() {
    let registry = LadderRegistry::standard(LadderConfig::default()).unwrap();
    let rt = LadderRuntime::with_seed(Arc::new(registry), 0).with_rng(Arc::new(FirstPick));
    let mut battler = BattlerState::new(12);

    let result = rt.add_highest_buff(&mut battler, 1).unwrap().unwrap();
    assert_eq!(result.kind, LadderKind::Atk);

    let result = rt.add_random_buff(&mut battler, 1).unwrap().unwrap();
    assert_eq!(result.kind, LadderKind::Atk);
    assert_eq!(rt.state_tier(&battler, LadderKind::Atk).unwrap(), 2);
}

#[test]
fn missing_ladders_make_category_picks_empty() {
    let table = LadderTable {
        ladders: vec![LadderSpec::new(LadderKind::Afraid, &[0, 18])],
        ..LadderTable::default()
    };
    let registry = LadderRegistry::build(&table, LadderConfig::default()).unwrap();
    let rt = LadderRuntime::with_seed(Arc::new(registry), 3);
    let mut battler = BattlerState::new(13);

    assert!(rt.add_random_emotion(&mut battler, 1).unwrap().is_none());
    assert!(rt.add_random_buff(&mut battler, 1).unwrap().is_none());
    assert!(rt.add_highest_buff(&mut battler, 1).unwrap().is_none());
    assert_eq!(battler.markers().count(), 0);
}
