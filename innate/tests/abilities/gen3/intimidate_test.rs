use anyhow::Result;
use innate::{
    WrapResultError,
    battle::MonData,
};
use innate_test_utils::{
    TestBattleBuilder,
    assert_logs_since_start_eq,
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

fn klink() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Klink",
            "types": ["Steel"],
            "ability": "Clear Body"
        }"#,
    )
    .wrap_error()
}

fn mightyena() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Mightyena",
            "types": ["Dark"],
            "ability": "Intimidate"
        }"#,
    )
    .wrap_error()
}

#[test]
fn intimidate_lowers_attack_of_active_foes_on_summon() {
    let battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1(zigzagoon().unwrap())
        .add_mon_to_side_2(mightyena().unwrap())
        .build()
        .unwrap();

    assert_logs_since_start_eq(
        &battle,
        &[
            "switch|mon:Zigzagoon|side:0|position:0",
            "switch|mon:Mightyena|side:1|position:0",
            "activate|mon:Mightyena|ability:Intimidate",
            "unboost|mon:Zigzagoon|stat:atk|by:1|from:ability:Intimidate|of:Mightyena",
        ],
    );
}

#[test]
fn intimidate_does_nothing_without_active_foes() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_auto_leads(false)
        .add_mon_to_side_1(zigzagoon().unwrap())
        .add_mon_to_side_2(mightyena().unwrap())
        .build()
        .unwrap();

    assert_matches::assert_matches!(battle.switch_in(1), Ok(()));
    assert_matches::assert_matches!(battle.switch_in(0), Ok(()));
    assert_logs_since_start_eq(
        &battle,
        &[
            "switch|mon:Mightyena|side:1|position:0",
            "switch|mon:Zigzagoon|side:0|position:0",
        ],
    );
}

#[test]
fn intimidate_hits_every_foe_in_position_order() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_auto_leads(false)
        .add_mon_to_side_1(zigzagoon().unwrap())
        .add_mon_to_side_1(poochyena().unwrap())
        .add_mon_to_side_2(mightyena().unwrap())
        .build()
        .unwrap();

    assert_matches::assert_matches!(battle.switch_in(0), Ok(()));
    assert_matches::assert_matches!(battle.switch_in(1), Ok(()));
    assert_matches::assert_matches!(battle.switch_in(2), Ok(()));
    assert_logs_since_start_eq(
        &battle,
        &[
            "switch|mon:Zigzagoon|side:0|position:0",
            "switch|mon:Poochyena|side:0|position:1",
            "switch|mon:Mightyena|side:1|position:0",
            "activate|mon:Mightyena|ability:Intimidate",
            "unboost|mon:Zigzagoon|stat:atk|by:1|from:ability:Intimidate|of:Mightyena",
            "unboost|mon:Poochyena|stat:atk|by:1|from:ability:Intimidate|of:Mightyena",
        ],
    );
}

#[test]
fn intimidate_is_blocked_by_stat_stage_guards() {
    let battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1(klink().unwrap())
        .add_mon_to_side_2(mightyena().unwrap())
        .build()
        .unwrap();

    assert_logs_since_start_eq(
        &battle,
        &[
            "switch|mon:Klink|side:0|position:0",
            "switch|mon:Mightyena|side:1|position:0",
            "activate|mon:Mightyena|ability:Intimidate",
            "activate|mon:Klink|ability:Clear Body",
            "fail|mon:Klink|stat:atk",
        ],
    );
}
