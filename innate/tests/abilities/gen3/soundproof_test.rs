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

fn whismur() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Whismur",
            "ability": "Soundproof"
        }"#,
    )
    .wrap_error()
}

fn make_battle() -> Result<BattleState> {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1(zigzagoon()?)
        .add_mon_to_side_2(whismur()?)
        .build()
}

#[test]
fn soundproof_blocks_spread_sound_moves() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Growl"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Growl",
            "activate|mon:Whismur|ability:Soundproof",
            "immune|mon:Whismur",
        ],
    );
    assert_eq!(battle.mon(1).unwrap().boosts.atk, 0);
}

#[test]
fn soundproof_blocks_targeted_sound_moves() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Confide"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Confide|target:Whismur",
            "activate|mon:Whismur|ability:Soundproof",
            "immune|mon:Whismur",
        ],
    );
}

#[test]
fn soundproof_lets_other_moves_through() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Sand Attack"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Sand Attack|target:Whismur",
            "unboost|mon:Whismur|stat:acc|by:1",
        ],
    );
}
