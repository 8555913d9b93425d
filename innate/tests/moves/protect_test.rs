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
            "types": ["Normal"],
            "ability": "No Ability"
        }"#,
    )
    .wrap_error()
}

fn poochyena() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Poochyena",
            "types": ["Dark"],
            "ability": "No Ability"
        }"#,
    )
    .wrap_error()
}

fn make_battle() -> Result<BattleState> {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1(zigzagoon().unwrap())
        .add_mon_to_side_2(poochyena().unwrap())
        .build()
}

#[test]
fn protect_shields_for_the_turn() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Protect"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Poochyena|name:Protect",
            "singleturn|mon:Poochyena|move:Protect",
        ],
    );
    assert!(battle.mon(1).unwrap().protected);

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Tackle"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Tackle|target:Poochyena",
            "activate|mon:Poochyena|move:Protect",
        ],
    );

    let poochyena = battle.mon(1).unwrap();
    assert_eq!(poochyena.hp, poochyena.max_hp);
}

#[test]
fn protection_ends_when_the_user_acts_again() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Protect"), None), Ok(()));
    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Tackle"), Some(0)), Ok(()));
    assert!(!battle.mon(1).unwrap().protected);
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Tackle"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Tackle|target:Poochyena",
            "damage|mon:Poochyena|health:60/100",
        ],
    );
}

#[test]
fn moves_without_the_protect_flag_go_through() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Protect"), None), Ok(()));
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Confide"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Confide|target:Poochyena",
            "unboost|mon:Poochyena|stat:spa|by:1",
        ],
    );
    assert_eq!(battle.mon(1).unwrap().boosts.spa, -1);
}
