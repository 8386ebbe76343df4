//! Defensive probes over schema-less upstream objects.

use serde_json::{Map, Value};

use crate::casing::to_lower_camel;

/// Look up `name` in `map`, tolerating casing differences.
///
/// An exact match wins; otherwise the first key whose lowerCamelCase form
/// equals that of `name` is used (`weapon_type` matches `WeaponType`).
pub fn lookup<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(name) {
        return Some(value);
    }
    let wanted = to_lower_camel(name);
    map.iter()
        .find(|(key, _)| to_lower_camel(key) == wanted)
        .map(|(_, value)| value)
}

/// Return the first non-null value of a localized map, in source order.
///
/// `None` for a missing, empty or all-null map. A bare scalar is already
/// canonical and is returned as-is.
pub fn first_value(value: Option<&Value>) -> Option<&Value> {
    match value? {
        Value::Object(map) => map.values().find(|v| !v.is_null()),
        Value::Null => None,
        other => Some(other),
    }
}

/// Keep only the numeric entries of a stat map.
///
/// Returns `None` when the input is not an object or nothing numeric is left.
pub fn numeric_stats(value: &Value) -> Option<Map<String, Value>> {
    let map = value.as_object()?;
    let stats: Map<String, Value> = map
        .iter()
        .filter(|(_, v)| v.is_number())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    (!stats.is_empty()).then_some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_value_skips_null() {
        let names = json!({"en": null, "ja": "剣"});
        assert_eq!(first_value(Some(&names)), Some(&json!("剣")));
    }

    #[test]
    fn test_first_value_insertion_order() {
        let names = json!({"zh": "剑", "en": "Sword"});
        assert_eq!(first_value(Some(&names)), Some(&json!("剑")));
    }

    #[test]
    fn test_first_value_empty_or_absent() {
        assert_eq!(first_value(Some(&json!({}))), None);
        assert_eq!(first_value(None), None);
        assert_eq!(first_value(Some(&json!(null))), None);
    }

    #[test]
    fn test_first_value_scalar() {
        assert_eq!(first_value(Some(&json!("Sword"))), Some(&json!("Sword")));
    }

    #[test]
    fn test_numeric_stats_filters() {
        let stats = json!({"HP": 100, "Note": "x", "ATK": 12.5, "Flag": true, "Nested": {"a": 1}});
        let filtered = numeric_stats(&stats).unwrap();
        assert_eq!(Value::Object(filtered), json!({"HP": 100, "ATK": 12.5}));
    }

    #[test]
    fn test_numeric_stats_empty_is_none() {
        assert_eq!(numeric_stats(&json!({"Note": "x"})), None);
        assert_eq!(numeric_stats(&json!({})), None);
        assert_eq!(numeric_stats(&json!([1, 2])), None);
    }

    #[test]
    fn test_lookup_tolerates_casing() {
        let map = json!({"weapon_type": {"ja": "Sword"}, "Rarity": 4});
        let map = map.as_object().unwrap();
        assert_eq!(lookup(map, "WeaponType"), Some(&json!({"ja": "Sword"})));
        assert_eq!(lookup(map, "Rarity"), Some(&json!(4)));
        assert_eq!(lookup(map, "Camp"), None);
    }
}
