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
fn spikes_stacks_up_to_three_layers() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    for count in 1..=3 {
        assert_matches::assert_matches!(battle.use_move(0, &Id::from("Spikes"), None), Ok(()));
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Zigzagoon|name:Spikes",
                &format!("sidestart|side:1|move:Spikes|count:{count}"),
            ],
        );
    }
    assert_eq!(battle.side(1).unwrap().condition_layers(&Id::from("Spikes")), 3);

    // A fourth layer has nowhere to go.
    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Spikes"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Spikes",
            "fail|mon:Zigzagoon",
        ],
    );
    assert_eq!(battle.side(1).unwrap().condition_layers(&Id::from("Spikes")), 3);
}

#[test]
fn toxic_spikes_stop_at_two_layers() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    for count in 1..=2 {
        assert_matches::assert_matches!(battle.use_move(0, &Id::from("Toxic Spikes"), None), Ok(()));
        assert_new_logs_eq(
            &mut battle,
            &[
                "move|mon:Zigzagoon|name:Toxic Spikes",
                &format!("sidestart|side:1|move:Toxic Spikes|count:{count}"),
            ],
        );
    }

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Toxic Spikes"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Toxic Spikes",
            "fail|mon:Zigzagoon",
        ],
    );
    assert_eq!(battle.side(1).unwrap().condition_layers(&Id::from("Toxic Spikes")), 2);
}

#[test]
fn sticky_web_lays_a_single_layer() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Sticky Web"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Sticky Web",
            "sidestart|side:1|move:Sticky Web|count:1",
        ],
    );
    assert!(battle.side(1).unwrap().has_condition(&Id::from("Sticky Web")));

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Sticky Web"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Sticky Web",
            "fail|mon:Zigzagoon",
        ],
    );
}

#[test]
fn hazards_on_the_two_sides_are_independent() {
    let mut battle = make_battle().unwrap();
    battle.log_mut().read_out();

    assert_matches::assert_matches!(battle.use_move(0, &Id::from("Spikes"), None), Ok(()));
    assert_matches::assert_matches!(battle.use_move(1, &Id::from("Spikes"), None), Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &[
            "move|mon:Zigzagoon|name:Spikes",
            "sidestart|side:1|move:Spikes|count:1",
            "move|mon:Poochyena|name:Spikes",
            "sidestart|side:0|move:Spikes|count:1",
        ],
    );
    assert_eq!(battle.side(0).unwrap().condition_layers(&Id::from("Spikes")), 1);
    assert_eq!(battle.side(1).unwrap().condition_layers(&Id::from("Spikes")), 1);
}
