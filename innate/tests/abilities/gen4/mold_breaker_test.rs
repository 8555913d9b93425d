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

fn pinsir() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Pinsir",
            "types": ["Bug"],
            "ability": "Mold Breaker"
        }"#,
    )
    .wrap_error()
}

fn reshiram() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Reshiram",
            "types": ["Dragon", "Fire"],
            "ability": "Turboblaze"
        }"#,
    )
    .wrap_error()
}

fn zekrom() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Zekrom",
            "types": ["Dragon", "Electric"],
            "ability": "Teravolt"
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

fn lanturn() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Lanturn",
            "types": ["Water", "Electric"],
            "ability": "Volt Absorb"
        }"#,
    )
    .wrap_error()
}

fn phanpy() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Phanpy",
            "types": ["Ground"],
            "ability": "No Ability"
        }"#,
    )
    .wrap_error()
}

fn make_battle(attacker: MonData, defender: MonData) -> Result<BattleState> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_mon_to_side_1(attacker)
        .add_mon_to_side_2(defender)
        .build()
}

#[test]
fn mold_breaker_ignores_stat_stage_guards() {
    let mut battle = make_battle(pinsir().unwrap(), klink().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Growl"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Pinsir|name:Growl",
            "unboost|mon:Klink|stat:atk|by:1",
        ],
    );
}

#[test]
fn mold_breaker_ignores_status_immunities() {
    let mut battle = make_battle(pinsir().unwrap(), hitmonlee().unwrap()).unwrap();
    battle.log_mut().read_out();

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_value(1, 0);

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Thunder Wave"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Pinsir|name:Thunder Wave|target:Hitmonlee",
            "status|mon:Hitmonlee|status:Paralysis",
        ],
    );
    assert_eq!(battle.mon(1).unwrap().status, Some(Status::Paralysis));
}

#[test]
fn mold_breaker_ignores_type_absorption() {
    let mut battle = make_battle(pinsir().unwrap(), lanturn().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Thunderbolt"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Pinsir|name:Thunderbolt|target:Lanturn",
            "damage|mon:Lanturn|health:10/100",
        ],
    );
}

#[test]
fn mold_breaker_cannot_pierce_the_type_chart() {
    let mut battle = make_battle(pinsir().unwrap(), phanpy().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Thunder Wave"), Some(1)), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Pinsir|name:Thunder Wave|target:Phanpy",
            "immune|mon:Phanpy",
        ],
    );
}

#[test]
fn turboblaze_and_teravolt_share_the_bypass() {
    let mut battle = make_battle(reshiram().unwrap(), klink().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Growl"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Reshiram|name:Growl",
            "unboost|mon:Klink|stat:atk|by:1",
        ],
    );

    let mut battle = make_battle(zekrom().unwrap(), klink().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Growl"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zekrom|name:Growl",
            "unboost|mon:Klink|stat:atk|by:1",
        ],
    );
}
