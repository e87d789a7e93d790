//! Initial state from a JSON seed file.
//!
//! A seed is a flat JSON object. Strings are taken verbatim, numbers and
//! booleans by their JSON text, and `null` entries are skipped.

use crate::error::{Result, StoreError};
use crate::state::State;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Null(()),
    Nested(serde_json::Value),
}

/// Parse a seed document into a fresh root state.
pub fn parse_seed(json: &str) -> Result<State> {
    let raw: BTreeMap<String, SeedValue> = serde_json::from_str(json)?;

    let mut entries = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let value = match value {
            SeedValue::Text(text) => text,
            SeedValue::Number(number) => number.to_string(),
            SeedValue::Flag(flag) => flag.to_string(),
            SeedValue::Null(()) => continue,
            SeedValue::Nested(_) => {
                return Err(StoreError::InvalidSeed(format!(
                    "value for {:?} must be a string, number or boolean",
                    key
                )))
            }
        };
        entries.push((key, value));
    }

    Ok(State::from_entries(entries))
}

/// Read a seed file into a fresh root state.
pub fn load_seed(path: impl AsRef<Path>) -> Result<State> {
    let json = fs::read_to_string(path.as_ref())?;
    parse_seed(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_scalars() {
        let state = parse_seed(r#"{"foo": 123, "bar": "456", "on": true, "gone": null}"#).unwrap();
        assert_eq!(state.get("foo"), Some("123"));
        assert_eq!(state.get("bar"), Some("456"));
        assert_eq!(state.get("on"), Some("true"));
        assert_eq!(state.get("gone"), None);
        assert_eq!(state.keys(), vec!["bar", "foo", "on"]);
        assert_eq!(state.count("123"), 1);
    }

    #[test]
    fn test_parse_seed_rejects_nested() {
        let result = parse_seed(r#"{"list": [1, 2]}"#);
        assert!(matches!(result, Err(StoreError::InvalidSeed(_))));
    }

    #[test]
    fn test_parse_seed_rejects_non_object() {
        let result = parse_seed("[1, 2, 3]");
        assert!(matches!(result, Err(StoreError::Deserialization(_))));
    }
}
