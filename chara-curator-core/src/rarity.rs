use serde_json::Value;

/// Map internal rarity codes to their public letter grades.
///
/// Only the two known codes are rewritten; anything else (including codes
/// added upstream later) is returned unchanged.
pub fn format_rarity(rarity: Value) -> Value {
    match rarity.as_i64() {
        Some(3) => Value::from("A"),
        Some(4) => Value::from("S"),
        _ => rarity,
    }
}
