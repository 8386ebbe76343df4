use serde::{Deserialize, Serialize};

use crate::casing::split_words;

/// Key under which projected per-level values are stored in a param block.
pub const LEVEL_TABLE_KEY: &str = "levelValues";

/// Field name whose object children are run through the level projector.
pub const PARAM_KEY: &str = "param";

/// Field holding the display format hint of a param block (e.g. `"{0}%"`).
pub const FORMAT_KEY: &str = "format";

/// How `percent_name_markers` are matched against a stat name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerMatch {
    /// The marker must start at a word boundary of the camel-cased name, so
    /// `critRatio` matches `ratio` but `duration` does not.
    #[default]
    Word,
    /// Case-insensitive substring anywhere in the name.
    Substring,
}

/// Naming heuristics and constants used while simplifying character records.
///
/// The upstream data follows informal naming conventions, so every string
/// the transformation matches against lives here instead of being hard-coded.
/// Loaded from the `[rules]` table of the config file; missing fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Suffix marking a stat as the growth-rate companion of another stat
    /// (`hp` + `Growth` = `hpGrowth`).
    pub growth_suffix: String,
    /// Stat name (case-insensitive) that is divided by 100 when the block's
    /// format hint contains `percent_format_marker`.
    pub main_value_name: String,
    /// Substring of a format hint that marks its main value as a percentage.
    pub percent_format_marker: String,
    /// Case-insensitive substrings of a stat name that always mark it as a
    /// percentage or ratio.
    pub percent_name_markers: Vec<String>,
    /// Whether name markers must start on a word boundary.
    pub percent_name_match: MarkerMatch,
    /// Skill levels at which projected values are computed.
    pub milestone_levels: Vec<u32>,
    /// Markup tags whose content starts with this prefix survive tag stripping.
    pub icon_tag_prefix: String,
    /// Normalized record fields whose `param` blocks are projected.
    pub projected_fields: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            growth_suffix: "Growth".to_string(),
            main_value_name: "value".to_string(),
            percent_format_marker: "%".to_string(),
            percent_name_markers: vec!["percent".to_string(), "ratio".to_string()],
            percent_name_match: MarkerMatch::Word,
            milestone_levels: vec![12, 16],
            icon_tag_prefix: "icon".to_string(),
            projected_fields: vec!["skill".to_string()],
        }
    }
}

impl Rules {
    /// Whether `name` is a growth companion rather than a stat of its own.
    pub fn is_growth_stat(&self, name: &str) -> bool {
        !self.growth_suffix.is_empty()
            && name.len() > self.growth_suffix.len()
            && name.ends_with(&self.growth_suffix)
    }

    /// Name of the growth companion for `stat`.
    pub fn growth_key(&self, stat: &str) -> String {
        format!("{stat}{}", self.growth_suffix)
    }

    /// Whether a projected value for `stat` must be converted from an
    /// upstream percentage (e.g. `25`) to a ratio (`0.25`).
    pub fn is_percent_stat(&self, stat: &str, format: Option<&str>) -> bool {
        let lower = stat.to_lowercase();

        let main_is_percent = format.is_some_and(|f| {
            !self.percent_format_marker.is_empty() && f.contains(&self.percent_format_marker)
        }) && lower == self.main_value_name.to_lowercase();

        main_is_percent || self.has_percent_marker(stat)
    }

    fn has_percent_marker(&self, stat: &str) -> bool {
        let markers: Vec<String> = self
            .percent_name_markers
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| m.to_lowercase())
            .collect();

        match self.percent_name_match {
            MarkerMatch::Substring => {
                let lower = stat.to_lowercase();
                markers.iter().any(|m| lower.contains(m.as_str()))
            }
            MarkerMatch::Word => {
                let words: Vec<String> =
                    split_words(stat).iter().map(|w| w.to_lowercase()).collect();
                (0..words.len()).any(|i| {
                    let tail = words[i..].concat();
                    markers.iter().any(|m| tail.starts_with(m.as_str()))
                })
            }
        }
    }
}
