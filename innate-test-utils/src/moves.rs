use anyhow::Result;
use innate::{
    MoveData,
    WrapResultError,
};

/// The move catalog used by integration tests.
///
/// Small but wide: at least one move per delivery shape the battle
/// distinguishes (single target, spread, side, field, self, charge).
pub fn standard_moves() -> Result<Vec<MoveData>> {
    serde_json::from_str(
        r#"[
            {
                "name": "Tackle",
                "category": "Physical",
                "primary_type": "Normal",
                "base_power": 40,
                "accuracy": 100,
                "flags": ["Contact", "Protect"]
            },
            {
                "name": "Vine Whip",
                "category": "Physical",
                "primary_type": "Grass",
                "base_power": 45,
                "accuracy": 100,
                "flags": ["Contact", "Protect"]
            },
            {
                "name": "Water Gun",
                "category": "Special",
                "primary_type": "Water",
                "base_power": 40,
                "accuracy": 100,
                "flags": ["Protect"]
            },
            {
                "name": "Thunderbolt",
                "category": "Special",
                "primary_type": "Electric",
                "base_power": 90,
                "accuracy": 100,
                "flags": ["Protect"]
            },
            {
                "name": "Fly",
                "category": "Physical",
                "primary_type": "Flying",
                "base_power": 90,
                "accuracy": 95,
                "flags": ["Charge", "Contact", "Protect"],
                "semi_invulnerable": true
            },
            {
                "name": "Growl",
                "category": "Status",
                "primary_type": "Normal",
                "accuracy": 100,
                "target": "AllAdjacentFoes",
                "flags": ["Reflectable", "Sound", "Protect"],
                "hit_effect": { "boosts": { "atk": -1 } }
            },
            {
                "name": "Screech",
                "category": "Status",
                "primary_type": "Normal",
                "accuracy": 85,
                "flags": ["Reflectable", "Sound", "Protect"],
                "hit_effect": { "boosts": { "def": -2 } }
            },
            {
                "name": "Sand Attack",
                "category": "Status",
                "primary_type": "Ground",
                "accuracy": 100,
                "flags": ["Reflectable", "Protect"],
                "hit_effect": { "boosts": { "acc": -1 } }
            },
            {
                "name": "Confide",
                "category": "Status",
                "primary_type": "Normal",
                "flags": ["Reflectable", "Sound"],
                "hit_effect": { "boosts": { "spa": -1 } }
            },
            {
                "name": "Thunder Wave",
                "category": "Status",
                "primary_type": "Electric",
                "accuracy": 90,
                "flags": ["Reflectable", "Protect"],
                "hit_effect": { "status": "par" },
                "ignore_immunity": false
            },
            {
                "name": "Spore",
                "category": "Status",
                "primary_type": "Grass",
                "accuracy": 100,
                "flags": ["Reflectable", "Protect", "Powder"],
                "hit_effect": { "status": "slp" }
            },
            {
                "name": "Hypnosis",
                "category": "Status",
                "primary_type": "Psychic",
                "accuracy": 60,
                "flags": ["Reflectable", "Protect"],
                "hit_effect": { "status": "slp" }
            },
            {
                "name": "Toxic",
                "category": "Status",
                "primary_type": "Poison",
                "accuracy": 90,
                "flags": ["Reflectable", "Protect"],
                "hit_effect": { "status": "tox" },
                "perfect_accuracy_for_user_type": "Poison"
            },
            {
                "name": "Spikes",
                "category": "Status",
                "primary_type": "Ground",
                "target": "FoeSide",
                "flags": ["Reflectable"],
                "hit_effect": { "side_condition": "Spikes", "side_condition_layers": 3 }
            },
            {
                "name": "Toxic Spikes",
                "category": "Status",
                "primary_type": "Poison",
                "target": "FoeSide",
                "flags": ["Reflectable"],
                "hit_effect": { "side_condition": "Toxic Spikes", "side_condition_layers": 2 }
            },
            {
                "name": "Sticky Web",
                "category": "Status",
                "primary_type": "Bug",
                "target": "FoeSide",
                "flags": ["Reflectable"],
                "hit_effect": { "side_condition": "Sticky Web" }
            },
            {
                "name": "Protect",
                "category": "Status",
                "primary_type": "Normal",
                "target": "User",
                "protects_user": true
            },
            {
                "name": "Swords Dance",
                "category": "Status",
                "primary_type": "Normal",
                "target": "User",
                "hit_effect": { "boosts": { "atk": 2 } }
            },
            {
                "name": "Recover",
                "category": "Status",
                "primary_type": "Normal",
                "target": "User",
                "hit_effect": { "heal_percent": 50 }
            },
            {
                "name": "Rain Dance",
                "category": "Status",
                "primary_type": "Water",
                "target": "Field",
                "hit_effect": { "weather": "Rain" }
            },
            {
                "name": "Sunny Day",
                "category": "Status",
                "primary_type": "Fire",
                "target": "Field",
                "hit_effect": { "weather": "Sun" }
            },
            {
                "name": "Sandstorm",
                "category": "Status",
                "primary_type": "Rock",
                "target": "Field",
                "hit_effect": { "weather": "Sandstorm" }
            },
            {
                "name": "Electric Terrain",
                "category": "Status",
                "primary_type": "Electric",
                "target": "Field",
                "hit_effect": { "terrain": "Electric" }
            }
        ]"#,
    )
    .wrap_error()
}
