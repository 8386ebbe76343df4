//! Key normalization: rewrites every object key of a JSON tree to lowerCamelCase.
//!
//! Upstream payloads mix `PascalCase`, `snake_case` and acronym-prefixed keys
//! (`HPGrowth`), sometimes within the same object. Everything downstream of
//! the normalizer can assume a single convention.

use serde_json::{Map, Value};

use crate::markup::strip_tags;

/// Convert a single key to lowerCamelCase.
///
/// Words are split at non-alphanumeric separators, at any non-uppercase to
/// uppercase transition, and at the end of an acronym (`HPGrowth` splits
/// into `HP` + `Growth`). Digits stay attached to the word they follow.
/// Adjacent single-letter words are joined into one (`Rank_A_B` becomes
/// `rankAb`), so applying this twice gives the same result as applying it once.
pub fn to_lower_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in split_words(key).iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut rest = word.chars();
            if let Some(first) = rest.next() {
                out.extend(first.to_uppercase());
                out.push_str(&rest.as_str().to_lowercase());
            }
        }
    }
    out
}

/// Split a key into the words [`to_lower_camel`] capitalizes, original case kept.
pub(crate) fn split_words(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if !prev.is_uppercase() || next_is_lower {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    // `A_B` would otherwise come out as `AB` and read back as one acronym.
    let mut joined: Vec<String> = Vec::with_capacity(words.len());
    let mut in_letter_run = false;
    for word in words {
        let single_letter = is_single_letter(&word);
        match joined.last_mut() {
            Some(last) if single_letter && in_letter_run => last.push_str(&word),
            _ => joined.push(word),
        }
        in_letter_run = single_letter;
    }
    joined
}

fn is_single_letter(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_alphabetic) && chars.next().is_none()
}

/// Recursively normalize every object key in `value` and strip markup tags
/// from string leaves (keeping tags that start with `icon_tag_prefix`).
///
/// When two source keys collapse to the same normalized key, the later value
/// wins and the position of the first is kept.
pub fn normalize_keys(value: Value, icon_tag_prefix: &str) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                out.insert(to_lower_camel(&key), normalize_keys(child, icon_tag_prefix));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| normalize_keys(item, icon_tag_prefix))
                .collect(),
        ),
        Value::String(text) => Value::String(strip_tags(&text, icon_tag_prefix)),
        other => other,
    }
}
