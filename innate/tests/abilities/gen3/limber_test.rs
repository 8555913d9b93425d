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

fn zigzagoon() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Zigzagoon",
            "ability": "No Ability"
        }"#,
    )
    .wrap_error()
}

fn hitmonlee() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Hitmonlee",
            "types": ["Fighting"],
            "ability": "Limber"
        }"#,
    )
    .wrap_error()
}

fn make_battle() -> Result<BattleState> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_mon_to_side_1(zigzagoon()?)
        .add_mon_to_side_2(hitmonlee()?)
        .build()
}

#[test]
fn limber_blocks_paralysis() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_value(1, 0);

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Thunder Wave"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Thunder Wave|target:Hitmonlee",
            "activate|mon:Hitmonlee|ability:Limber",
            "immune|mon:Hitmonlee",
        ],
    );
    assert_eq!(battle.mon(1).unwrap().status, None);
}

#[test]
fn limber_blocks_paralysis_from_direct_effects() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.set_status(1, None, Status::Paralysis), Ok(false));
    assert_new_logs_eq(
        &mut battle,
        &[
            "activate|mon:Hitmonlee|ability:Limber",
            "immune|mon:Hitmonlee",
        ],
    );
}

#[test]
fn limber_does_not_block_other_statuses() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_value(1, 0);

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Spore"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Spore|target:Hitmonlee",
            "status|mon:Hitmonlee|status:Sleep",
        ],
    );
    assert_eq!(battle.mon(1).unwrap().status, Some(Status::Sleep));
}
