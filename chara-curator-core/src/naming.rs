//! Output file naming.
//!
//! A character is written to `<slug>.json`, where the slug comes from its
//! code name. Characters without a usable code name fall back to their raw
//! upstream key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Spellings under which upstream stores the code name, in probe order.
pub const CODE_NAME_KEYS: [&str; 2] = ["CodeName", "codename"];

/// Where the code name used for naming is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingPolicy {
    /// Use the index entry. Names are known before fetching, so existing
    /// files can be skipped without a detail request.
    #[default]
    Index,
    /// Use the fetched detail record.
    Detail,
}

impl std::fmt::Display for NamingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index => write!(f, "index"),
            Self::Detail => write!(f, "detail"),
        }
    }
}

/// Error returned when a string cannot be parsed into a `NamingPolicy`.
#[derive(Debug, Clone)]
pub struct NamingPolicyParseError(pub String);

impl std::fmt::Display for NamingPolicyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown naming policy: '{}' (expected 'index' or 'detail')", self.0)
    }
}

impl std::error::Error for NamingPolicyParseError {}

impl std::str::FromStr for NamingPolicy {
    type Err = NamingPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "index" => Ok(Self::Index),
            "detail" => Ok(Self::Detail),
            _ => Err(NamingPolicyParseError(s.to_string())),
        }
    }
}

/// Turn a display string into a filesystem-safe slug.
///
/// Lowercases ASCII letters and folds every run of anything that is not
/// `[a-z0-9]` (whitespace included) into a single hyphen, with no leading or
/// trailing hyphen. May return an empty string.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Read the code name from an index entry or a raw detail record.
pub fn code_name(entry: &Value) -> Option<&str> {
    let map = entry.as_object()?;
    CODE_NAME_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
}

/// File stem for a character: the slugged code name, or `key` when the
/// entry has no code name or it slugs to nothing.
///
/// Index entries and detail records go through this same function, so both
/// naming policies agree whenever the two carry the same code name.
pub fn output_name(entry: Option<&Value>, key: &str) -> String {
    entry
        .and_then(code_name)
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| key.to_string())
}
