//! Per-level projection of skill parameters.
//!
//! Upstream stores a skill parameter as a base value plus an optional growth
//! companion (`damage` / `damageGrowth`). Consumers want the value at a few
//! reference levels instead, so each param block is rewritten into a
//! `levelValues` table:
//!
//! ```text
//! {"format": "{0}%", "value": 20, "valueGrowth": 2}
//!   => {"format": "{0}%", "levelValues": {"12": {"value": 0.42}, "16": {"value": 0.5}}}
//! ```

use serde_json::{Map, Number, Value};

use crate::rules::{FORMAT_KEY, LEVEL_TABLE_KEY, PARAM_KEY, Rules};

/// Largest integer an f64 holds exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Project one param stat block onto the milestone levels.
///
/// Every numeric, non-growth field is evaluated as
/// `base + (level - 1) * growth` at each milestone level, with percentage
/// stats divided by 100. The returned block keeps the non-numeric fields and
/// gains the level table; raw base and growth values are dropped.
///
/// A block that already has a level table is returned unchanged.
pub fn project_levels(block: &Map<String, Value>, rules: &Rules) -> Map<String, Value> {
    if block.contains_key(LEVEL_TABLE_KEY) {
        return block.clone();
    }

    let format = block.get(FORMAT_KEY).and_then(Value::as_str);
    let mut table = Map::new();

    for &level in &rules.milestone_levels {
        let mut values = Map::new();
        for (name, base) in block {
            if rules.is_growth_stat(name) {
                continue;
            }
            let Some(base) = base.as_f64() else {
                continue;
            };
            let growth = block
                .get(&rules.growth_key(name))
                .and_then(Value::as_f64)
                .unwrap_or(0.0);

            let mut projected = base + (f64::from(level) - 1.0) * growth;
            if rules.is_percent_stat(name, format) {
                projected /= 100.0;
            }
            values.insert(name.clone(), number_value(projected));
        }
        if !values.is_empty() {
            table.insert(level.to_string(), Value::Object(values));
        }
    }

    let mut projected: Map<String, Value> = block
        .iter()
        .filter(|(_, v)| !v.is_number())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    projected.insert(LEVEL_TABLE_KEY.to_string(), Value::Object(table));
    projected
}

/// Walk a (normalized) skill structure and project every object child of
/// every `param` object found at any depth.
pub fn project_params(value: Value, rules: &Rules) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, child)| {
                    let child = match child {
                        Value::Object(params) if key == PARAM_KEY => {
                            Value::Object(project_param_children(params, rules))
                        }
                        other => project_params(other, rules),
                    };
                    (key, child)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| project_params(item, rules))
                .collect(),
        ),
        other => other,
    }
}

fn project_param_children(params: Map<String, Value>, rules: &Rules) -> Map<String, Value> {
    params
        .into_iter()
        .map(|(name, stat)| match stat {
            Value::Object(block) => (name, Value::Object(project_levels(&block, rules))),
            other => (name, other),
        })
        .collect()
}

/// Integral results are stored as JSON integers so `210.0` serializes as `210`.
fn number_value(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
#[path = "tests/projector_tests.rs"]
mod tests;
