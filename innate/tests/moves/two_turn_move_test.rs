use anyhow::Result;
use innate::{
    Id,
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

fn make_battle() -> Result<BattleState> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_mon_to_side_1(swellow().unwrap())
        .add_mon_to_side_2(zigzagoon().unwrap())
        .build()
}

#[test]
fn fly_charges_then_releases() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Fly"), Some(1)), Ok(()));
    assert_new_logs_eq(&mut battle, &["prepare|mon:Swellow|move:Fly"]);

    let swellow = battle.mon(0).unwrap();
    assert_eq!(swellow.charging, Some(Id::from("Fly")));
    assert!(swellow.semi_invulnerable);

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_value(1, 0);

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Fly"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Swellow|name:Fly|target:Zigzagoon",
            "damage|mon:Zigzagoon|health:10/100",
        ],
    );

    let swellow = battle.mon(0).unwrap();
    assert_eq!(swellow.charging, None);
    assert!(!swellow.semi_invulnerable);
}

#[test]
fn airborne_mons_cannot_be_hit() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Fly"), Some(1)), Ok(()));
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Tackle"), Some(0)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Tackle|target:Swellow",
            "miss|mon:Zigzagoon|target:Swellow",
        ],
    );

    // The miss is decided without an accuracy roll.
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    assert_eq!(rng.sequence_count(), 0);
}

#[test]
fn the_release_can_still_miss() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Fly"), Some(1)), Ok(()));
    battle.log_mut().read_out();

    // Fly carries 95 accuracy on release.
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_value(1, 97);

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Fly"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Swellow|name:Fly|target:Zigzagoon",
            "miss|mon:Swellow|target:Zigzagoon",
        ],
    );
}
