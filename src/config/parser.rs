//! Color configuration parsing and shape validation

use serde_json::Value;
use std::collections::BTreeMap;

use super::models::{ColorConfig, ColorEntry, MIN_SLOTS};

/// Error type for a failed configuration application
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// The input string is not syntactically valid JSON.
    #[error("invalid JSON in color configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The decoded document does not match the expected shape.
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Error type for shape mismatches in a decoded configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("configuration root is not a JSON object")]
    RootNotObject,
    #[error("configuration has no `colors` field")]
    MissingColors,
    #[error("`colors` is not a mapping")]
    ColorsNotMapping,
    #[error("color entry `{key}` is not an array")]
    EntryNotArray { key: String },
    #[error("color entry `{key}` has {len} slot(s), expected at least {}", MIN_SLOTS)]
    EntryTooShort { key: String, len: usize },
    #[error("color entry `{key}` slot {slot} is not a string")]
    SlotNotString { key: String, slot: usize },
    #[error("color entry `{key}` has no color value at slot {slot}")]
    NoValueAtSlot { key: String, slot: usize },
}

/// Decode a serialized configuration and validate its shape.
///
/// Syntax failures surface as [`ApplyError::Parse`], shape failures as
/// [`ApplyError::Structure`]. The returned config is fully validated or
/// the whole call fails; no partially decoded config escapes.
pub fn parse_config(input: &str) -> Result<ColorConfig, ApplyError> {
    let doc: Value = serde_json::from_str(input)?;
    Ok(validate(doc)?)
}

/// Check a decoded document against the expected shape: an object with a
/// `colors` mapping of string arrays, each array at least [`MIN_SLOTS`]
/// long with the property name in its final slot.
fn validate(doc: Value) -> Result<ColorConfig, StructureError> {
    let Value::Object(mut root) = doc else {
        return Err(StructureError::RootNotObject);
    };
    let entries = match root.remove("colors") {
        Some(Value::Object(map)) => map,
        Some(_) => return Err(StructureError::ColorsNotMapping),
        None => return Err(StructureError::MissingColors),
    };

    let mut colors = BTreeMap::new();
    for (key, value) in entries {
        let entry = validate_entry(&key, value)?;
        colors.insert(key, entry);
    }
    Ok(ColorConfig { colors })
}

fn validate_entry(key: &str, value: Value) -> Result<ColorEntry, StructureError> {
    let Value::Array(raw) = value else {
        return Err(StructureError::EntryNotArray { key: key.to_owned() });
    };
    let mut slots = Vec::with_capacity(raw.len());
    for (slot, element) in raw.into_iter().enumerate() {
        match element {
            Value::String(s) => slots.push(s),
            _ => {
                return Err(StructureError::SlotNotString {
                    key: key.to_owned(),
                    slot,
                })
            }
        }
    }
    let len = slots.len();
    ColorEntry::new(slots).ok_or(StructureError::EntryTooShort {
        key: key.to_owned(),
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config(r##"{"colors":{"accent":["x","#112233","--accent"]}}"##).unwrap();
        let entry = &config.colors["accent"];
        assert_eq!(entry.property_name(), "--accent");
        assert_eq!(entry.day(), Some("#112233"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = parse_config("{not json").unwrap_err();
        assert!(matches!(err, ApplyError::Parse(_)));
    }

    #[test]
    fn test_missing_colors_field() {
        let err = parse_config(r#"{"palette":{}}"#).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Structure(StructureError::MissingColors)
        ));
    }

    #[test]
    fn test_colors_must_be_a_mapping() {
        let err = parse_config(r#"{"colors":[1,2,3]}"#).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Structure(StructureError::ColorsNotMapping)
        ));
    }

    #[test]
    fn test_root_must_be_an_object() {
        let err = parse_config(r#"["colors"]"#).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Structure(StructureError::RootNotObject)
        ));
    }

    #[test]
    fn test_entry_must_be_an_array() {
        let err = parse_config(r##"{"colors":{"accent":"#112233"}}"##).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Structure(StructureError::EntryNotArray { key }) if key == "accent"
        ));
    }

    #[test]
    fn test_entry_too_short() {
        let err = parse_config(r##"{"colors":{"accent":["--accent"]}}"##).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Structure(StructureError::EntryTooShort { key, len: 1 }) if key == "accent"
        ));
    }

    #[test]
    fn test_non_string_slot_is_rejected() {
        let err = parse_config(r##"{"colors":{"accent":["x",17,"--accent"]}}"##).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Structure(StructureError::SlotNotString { key, slot: 1 }) if key == "accent"
        ));
    }
}
