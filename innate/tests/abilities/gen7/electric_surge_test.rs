use anyhow::Result;
use innate::{
    Id,
    TerrainType,
    WrapResultError,
    battle::{
        BattleState,
        MonData,
    },
};
use innate_test_utils::{
    TestBattleBuilder,
    assert_logs_since_start_eq,
    assert_new_logs_eq,
};

fn tapu_koko() -> Result<MonData> {
    serde_json::from_str(
        r#"{
            "name": "Tapu Koko",
            "types": ["Electric", "Fairy"],
            "ability": "Electric Surge"
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

fn make_battle(side_1: MonData, side_2: MonData) -> Result<BattleState> {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_to_side_1(side_1)
        .add_mon_to_side_2(side_2)
        .build()
}

#[test]
fn electric_surge_charges_the_field_on_summon() {
    let mut battle = make_battle(tapu_koko().unwrap(), zigzagoon().unwrap()).unwrap();
    assert_eq!(battle.field().terrain, Some(TerrainType::Electric));
    assert_logs_since_start_eq(
        &mut battle,
        &[
            "switch|mon:Tapu Koko|side:0|position:0",
            "activate|mon:Tapu Koko|ability:Electric Surge",
            "terrain|terrain:Electric|from:ability:Electric Surge|of:Tapu Koko",
            "switch|mon:Zigzagoon|side:1|position:0",
        ],
    );
}

#[test]
fn the_terrain_move_fails_on_charged_ground() {
    let mut battle = make_battle(tapu_koko().unwrap(), zigzagoon().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Electric Terrain"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Electric Terrain",
            "fail|mon:Zigzagoon",
        ],
    );
    assert_eq!(battle.field().terrain, Some(TerrainType::Electric));
}

#[test]
fn the_terrain_move_charges_a_clear_field() {
    let mut battle = make_battle(zigzagoon().unwrap(), poochyena().unwrap()).unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Electric Terrain"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Electric Terrain",
            "terrain|terrain:Electric",
        ],
    );
    assert_eq!(battle.field().terrain, Some(TerrainType::Electric));
}
