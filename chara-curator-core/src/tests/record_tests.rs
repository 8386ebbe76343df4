use super::*;
use serde_json::json;

fn sample_raw() -> Value {
    json!({
        "Id": 1001,
        "Name": {"ja": "アリス", "en": "Alice"},
        "CodeName": "Alice",
        "Rarity": 4,
        "WeaponType": {"ja": "Sword"},
        "ElementType": {"en": null, "ja": "Fire"},
        "HitType": {"ja": "Slash"},
        "Camp": {"ja": "Blue Order"},
        "Stats": {"HP": 100, "HPGrowth": 5, "Note": "x"},
        "Skill": [{
            "SkillName": "<b>Flame</b> Edge <icon=fire>",
            "Param": {
                "Damage": {"Format": "{0}%", "Value": 100, "ValueGrowth": 10}
            }
        }],
        "Live2d": {"Model": "alice_l2d"},
        "InternalDebug": {"seed": 42}
    })
}

#[test]
fn test_allowlist_and_order() {
    let simplified = simplify(&sample_raw());
    let keys: Vec<&str> = simplified.as_map().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "name",
            "codeName",
            "rarity",
            "weaponType",
            "elementType",
            "hitType",
            "camp",
            "stats",
            "skill",
            "live2d",
        ]
    );
}

#[test]
fn test_scalar_fields() {
    let record = simplify(&sample_raw()).into_value();
    assert_eq!(record["id"], json!(1001));
    assert_eq!(record["name"], json!("アリス"));
    assert_eq!(record["codeName"], json!("Alice"));
    assert_eq!(record["rarity"], json!("S"));
    assert_eq!(record["weaponType"], json!("Sword"));
    assert_eq!(record["elementType"], json!("Fire"));
    assert_eq!(record["camp"], json!("Blue Order"));
}

#[test]
fn test_stats_drop_growth_and_non_numeric() {
    let record = simplify(&sample_raw()).into_value();
    assert_eq!(record["stats"], json!({"hp": 100}));
}

#[test]
fn test_skill_params_projected() {
    let record = simplify(&sample_raw()).into_value();
    let skill = &record["skill"][0];
    assert_eq!(skill["skillName"], json!("Flame Edge <icon=fire>"));
    assert_eq!(
        skill["param"]["damage"],
        json!({
            "format": "{0}%",
            "levelValues": {"12": {"value": 2.1}, "16": {"value": 2.5}}
        })
    );
}

#[test]
fn test_projection_disabled_keeps_raw_params() {
    let simplifier = Simplifier::default().project_skill_levels(false);
    let record = simplifier.simplify(&sample_raw()).into_value();
    assert_eq!(
        record["skill"][0]["param"]["damage"],
        json!({"format": "{0}%", "value": 100, "valueGrowth": 10})
    );
}

#[test]
fn test_missing_optional_fields_omitted() {
    let record = simplify(&json!({"Id": 7, "Rarity": 5})).into_value();
    assert_eq!(record, json!({"id": 7, "rarity": 5}));
}

#[test]
fn test_null_rarity_passes_through() {
    let record = simplify(&json!({"Id": 7, "Rarity": null})).into_value();
    assert_eq!(record, json!({"id": 7, "rarity": null}));
}

#[test]
fn test_empty_stats_omitted() {
    let record = simplify(&json!({"Stats": {"Note": "x"}})).into_value();
    assert_eq!(record, json!({}));
}

#[test]
fn test_non_object_input_yields_empty_record() {
    assert!(simplify(&json!([1, 2, 3])).as_map().is_empty());
    assert!(simplify(&json!(null)).as_map().is_empty());
}

#[test]
fn test_mixed_case_source_fields() {
    let record = simplify(&json!({
        "weapon_type": {"ja": "Spear"},
        "codename": "Spear Girl",
        "skill_list": [1, 2]
    }))
    .into_value();
    assert_eq!(record["weaponType"], json!("Spear"));
    assert_eq!(record["codeName"], json!("Spear Girl"));
    assert_eq!(record["skillList"], json!([1, 2]));
}

#[test]
fn test_custom_projected_fields() {
    let rules = Rules {
        projected_fields: vec!["skill".to_string(), "passive".to_string()],
        ..Rules::default()
    };
    let record = Simplifier::new(rules)
        .simplify(&json!({
            "Passive": {"Param": {"Heal": {"Amount": 10}}}
        }))
        .into_value();
    assert_eq!(
        record["passive"]["param"]["heal"]["levelValues"]["12"]["amount"],
        json!(10)
    );
}
