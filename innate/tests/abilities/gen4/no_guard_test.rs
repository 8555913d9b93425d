use anyhow::Result;
use innate::{
    Id,
    Status,
    WrapResultError,
    battle::{
        BattleState,
        MonData,
    },
};
use innate_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    get_controlled_rng_for_battle,
};

fn machamp() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Machamp",
            "types": ["Fighting"],
            "ability": "No Guard"
        }"#,
    )
    .wrap_error()
}

fn zigzagoon() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Zigzagoon",
            "types": ["Normal"],
            "ability": "No Ability"
        }"#,
    )
    .wrap_error()
}

fn swellow() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Swellow",
            "types": ["Normal", "Flying"],
            "ability": "No Ability"
        }"#,
    )
    .wrap_error()
}

fn espeon() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Espeon",
            "types": ["Psychic"],
            "ability": "Magic Bounce"
        }"#,
    )
    .wrap_error()
}

fn make_battle(side_1: MonData, side_2: MonData) -> Result<BattleState> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_mon_to_side_1(side_1)
        .add_mon_to_side_2(side_2)
        .build()
}

#[test]
fn no_guard_skips_the_accuracy_check() {
    let mut battle = make_battle(machamp().unwrap(), zigzagoon().unwrap()).unwrap();
    battle.log_mut().read_out();

    // Hypnosis would normally roll against 60 accuracy.
    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Hypnosis"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Machamp|name:Hypnosis|target:Zigzagoon",
            "status|mon:Zigzagoon|status:Sleep",
        ],
    );
    assert_eq!(battle.mon(1).unwrap().status, Some(Status::Sleep));

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    assert_eq!(rng.sequence_count(), 0);
}

#[test]
fn no_guard_applies_to_incoming_moves() {
    let mut battle = make_battle(zigzagoon().unwrap(), machamp().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Hypnosis"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Hypnosis|target:Machamp",
            "status|mon:Machamp|status:Sleep",
        ],
    );

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    assert_eq!(rng.sequence_count(), 0);
}

#[test]
fn no_guard_strikes_through_semi_invulnerability() {
    let mut battle = make_battle(machamp().unwrap(), swellow().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Fly"), Some(0)), Ok(()));
    assert_new_logs_eq(&mut battle, &["prepare|mon:Swellow|move:Fly"]);
    assert!(battle.mon(1).unwrap().semi_invulnerable);

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Tackle"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Machamp|name:Tackle|target:Swellow",
            "damage|mon:Swellow|health:60/100",
        ],
    );
}

#[test]
fn no_guard_hits_airborne_reflectors_without_a_bounce() {
    let mut battle = make_battle(machamp().unwrap(), espeon().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Fly"), Some(0)), Ok(()));
    battle.log_mut().read_out();

    // An airborne reflector cannot bounce, so the pierced hit lands plain.
    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Hypnosis"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Machamp|name:Hypnosis|target:Espeon",
            "status|mon:Espeon|status:Sleep",
        ],
    );
    assert_eq!(battle.mon(1).unwrap().status, Some(Status::Sleep));

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    assert_eq!(rng.sequence_count(), 0);
}
