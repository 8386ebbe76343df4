use serde::Serialize;
use serde_json::{Map, Value};

use crate::casing::{normalize_keys, to_lower_camel};
use crate::fields::{first_value, lookup, numeric_stats};
use crate::naming::CODE_NAME_KEYS;
use crate::projector::project_params;
use crate::rarity::format_rarity;
use crate::rules::Rules;

/// Identity fields copied as-is (or collapsed to their first localized value).
const IDENTITY_FIELDS: &[&str] = &["Id", "Name"];

/// Localized single-value fields collapsed to their first value.
const LOCALIZED_FIELDS: &[&str] = &["WeaponType", "ElementType", "HitType", "Camp"];

/// Blocks copied through untouched when present in the source.
const PASS_THROUGH_FIELDS: &[&str] = &[
    "Level",
    "Skill",
    "SkillList",
    "Passive",
    "Talent",
    "Potential",
    "Live2d",
];

/// A character reduced to the allowlisted fields, with normalized keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SimplifiedCharacter(Map<String, Value>);

impl SimplifiedCharacter {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Turns raw upstream character records into [`SimplifiedCharacter`]s.
#[derive(Debug, Clone)]
pub struct Simplifier {
    pub rules: Rules,
    /// Replace skill param base/growth values with per-level tables.
    pub project_skill_levels: bool,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            project_skill_levels: true,
        }
    }
}

impl Simplifier {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn project_skill_levels(mut self, project: bool) -> Self {
        self.project_skill_levels = project;
        self
    }

    /// Build the simplified record for one raw character.
    ///
    /// Non-object input has no fields to pick and yields an empty record.
    pub fn simplify(&self, raw: &Value) -> SimplifiedCharacter {
        let empty = Map::new();
        let source = raw.as_object().unwrap_or(&empty);

        let mut record: Map<String, Value> = self
            .assemble(source)
            .into_iter()
            .map(|(key, value)| {
                (
                    to_lower_camel(&key),
                    normalize_keys(value, &self.rules.icon_tag_prefix),
                )
            })
            .collect();

        if self.project_skill_levels {
            for field in &self.rules.projected_fields {
                if let Some(value) = record.get_mut(field) {
                    *value = project_params(value.take(), &self.rules);
                }
            }
        }

        SimplifiedCharacter(record)
    }

    fn assemble(&self, source: &Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::new();

        for &field in IDENTITY_FIELDS {
            if let Some(value) = first_value(lookup(source, field)) {
                out.insert(field.to_string(), value.clone());
            }
        }

        if let Some(code_name) = CODE_NAME_KEYS
            .iter()
            .find_map(|key| first_value(source.get(*key)))
        {
            out.insert("CodeName".to_string(), code_name.clone());
        }

        if let Some(rarity) = lookup(source, "Rarity") {
            out.insert("Rarity".to_string(), format_rarity(rarity.clone()));
        }

        for &field in LOCALIZED_FIELDS {
            if let Some(value) = first_value(lookup(source, field)) {
                out.insert(field.to_string(), value.clone());
            }
        }

        if let Some(stats) = lookup(source, "Stats").and_then(|s| self.display_stats(s)) {
            out.insert("Stats".to_string(), Value::Object(stats));
        }

        for &field in PASS_THROUGH_FIELDS {
            if let Some(value) = lookup(source, field) {
                out.insert(field.to_string(), value.clone());
            }
        }

        out
    }

    /// Numeric stats without their growth companions, which only matter
    /// inside skill param projection.
    fn display_stats(&self, stats: &Value) -> Option<Map<String, Value>> {
        let mut stats = numeric_stats(stats)?;
        stats.retain(|name, _| !self.rules.is_growth_stat(&to_lower_camel(name)));
        (!stats.is_empty()).then_some(stats)
    }
}

/// Simplify `raw` with the default rules and skill projection enabled.
pub fn simplify(raw: &Value) -> SimplifiedCharacter {
    Simplifier::default().simplify(raw)
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
