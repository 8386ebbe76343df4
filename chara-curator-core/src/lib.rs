//! Character record curation.
//!
//! Pure transformations that reduce a raw, inconsistently-keyed upstream
//! character payload into a small record with lowerCamelCase keys, collapsed
//! localized fields, filtered stats and per-level skill parameter tables.

pub mod casing;
pub mod fields;
pub mod markup;
pub mod naming;
pub mod projector;
pub mod rarity;
pub mod record;
pub mod rules;

pub use casing::{normalize_keys, to_lower_camel};
pub use fields::{first_value, numeric_stats};
pub use markup::strip_tags;
pub use naming::{NamingPolicy, NamingPolicyParseError, code_name, output_name, slugify};
pub use projector::{project_levels, project_params};
pub use rarity::format_rarity;
pub use record::{SimplifiedCharacter, Simplifier, simplify};
pub use rules::{MarkerMatch, Rules};
