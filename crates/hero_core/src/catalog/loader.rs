//! Hero document decoding.
//!
//! The document is `{ "heroes": [ ... ] }`. Each entry is decoded on its own so
//! a bad record is reported and skipped instead of failing the whole load.

use crate::error::{CatalogError, RecordFault};
use crate::models::{Ability, HeroRecord, Role};
use serde_json::{Map, Value};

/// Top-level key holding the hero array.
pub const HEROES_KEY: &str = "heroes";

const STAT_FIELDS: [&str; 2] = ["health", "damage"];
const NAME_LIST_FIELDS: [&str; 4] = ["strengths", "weaknesses", "synergies", "counters"];

/// Decode raw document bytes into records (with their source index) and the
/// faults for entries that were skipped.
pub(crate) fn decode_document(
    bytes: &[u8],
) -> Result<(Vec<(usize, HeroRecord)>, Vec<RecordFault>), CatalogError> {
    let document: Value = serde_json::from_slice(bytes)?;

    let root = match document {
        Value::Object(map) => map,
        other => {
            return Err(CatalogError::corrupt(format!(
                "expected a JSON object at the top level, found {}",
                kind_of(&other)
            )))
        }
    };

    let entries = match root.get(HEROES_KEY) {
        None | Some(Value::Null) => {
            log::warn!("Hero document has no `{}` array; catalog is empty", HEROES_KEY);
            return Ok((Vec::new(), Vec::new()));
        }
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(CatalogError::corrupt(format!(
                "`{}` must be an array, found {}",
                HEROES_KEY,
                kind_of(other)
            )))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut faults = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match decode_entry(index, entry) {
            Ok(record) => records.push((index, record)),
            Err(fault) => faults.push(fault),
        }
    }

    Ok((records, faults))
}

/// Only `name` and `role` can fault an entry. Optional fields with the wrong
/// shape are repaired (see `relax_optional_fields`) and the hero is kept.
pub(crate) fn decode_entry(index: usize, entry: &Value) -> Result<HeroRecord, RecordFault> {
    let fields = entry.as_object().ok_or_else(|| RecordFault::Malformed {
        index,
        name: None,
        reason: format!("expected an object, found {}", kind_of(entry)),
    })?;

    let name = match fields.get("name") {
        None | Some(Value::Null) => {
            return Err(RecordFault::MissingField {
                index,
                field: "name",
            })
        }
        Some(Value::String(name)) if name.trim().is_empty() => {
            return Err(RecordFault::MissingField {
                index,
                field: "name",
            })
        }
        Some(Value::String(name)) => name.trim().to_string(),
        Some(other) => {
            return Err(RecordFault::Malformed {
                index,
                name: None,
                reason: format!("`name` must be a string, found {}", kind_of(other)),
            })
        }
    };

    match fields.get("role") {
        None | Some(Value::Null) => {
            return Err(RecordFault::MissingField {
                index,
                field: "role",
            })
        }
        Some(role) => {
            if serde_json::from_value::<Role>(role.clone()).is_err() {
                let role = match role {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                return Err(RecordFault::UnknownRole { index, name, role });
            }
        }
    }

    let mut fields = fields.clone();
    relax_optional_fields(index, &name, &mut fields);

    let mut record: HeroRecord =
        serde_json::from_value(Value::Object(fields)).map_err(|e| RecordFault::Malformed {
            index,
            name: Some(name.clone()),
            reason: e.to_string(),
        })?;
    record.normalize();
    Ok(record)
}

/// Coerce optional fields into shapes `HeroRecord` accepts:
/// - a stat that is neither a number nor a string keeps its raw JSON as text
/// - non-string entries in a name list are dropped
/// - abilities that still fail to decode are dropped
/// - a list field that is not an array reads as empty
fn relax_optional_fields(index: usize, name: &str, fields: &mut Map<String, Value>) {
    for key in STAT_FIELDS {
        if let Some(value) = fields.get_mut(key) {
            relax_stat(index, name, key, value);
        }
    }

    for key in NAME_LIST_FIELDS {
        let Some(value) = fields.get_mut(key) else {
            continue;
        };
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let before = items.len();
                items.retain(Value::is_string);
                if items.len() != before {
                    log::warn!(
                        "Hero entry {} ({}): dropped {} non-text item(s) from `{}`",
                        index,
                        name,
                        before - items.len(),
                        key
                    );
                }
            }
            other => {
                log::warn!(
                    "Hero entry {} ({}): `{}` should be a list, found {}; treating it as empty",
                    index,
                    name,
                    key,
                    kind_of(other)
                );
                *other = Value::Null;
            }
        }
    }

    if let Some(value) = fields.get_mut("abilities") {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let before = items.len();
                items.retain_mut(|item| {
                    if let Value::Object(ability) = item {
                        for key in ["cd", "cooldown"] {
                            if let Some(cd) = ability.get_mut(key) {
                                relax_stat(index, name, key, cd);
                            }
                        }
                    }
                    serde_json::from_value::<Ability>(item.clone()).is_ok()
                });
                if items.len() != before {
                    log::warn!(
                        "Hero entry {} ({}): dropped {} unreadable ability entries",
                        index,
                        name,
                        before - items.len()
                    );
                }
            }
            other => {
                log::warn!(
                    "Hero entry {} ({}): `abilities` should be a list, found {}; treating it as empty",
                    index,
                    name,
                    kind_of(other)
                );
                *other = Value::Null;
            }
        }
    }
}

fn relax_stat(index: usize, name: &str, key: &str, value: &mut Value) {
    if matches!(value, Value::Null | Value::Number(_) | Value::String(_)) {
        return;
    }
    log::warn!(
        "Hero entry {} ({}): `{}` is {}; keeping it as text",
        index,
        name,
        key,
        kind_of(value)
    );
    *value = Value::String(value.to_string());
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
