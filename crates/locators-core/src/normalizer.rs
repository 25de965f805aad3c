//! Reconciles the two on-disk database layouts into one entry sequence.
//!
//! Legacy databases are a JSON array of records that carry their own `id`
//! and `name`. Current databases are an object keyed by locator name.

use serde_json::Value;

/// A named set of raw locator attributes, independent of the file layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub attributes: Value,
}

pub fn normalize(parsed: Value) -> Vec<Entry> {
    match parsed {
        Value::Array(records) => normalize_legacy(records),
        Value::Object(map) => map
            .into_iter()
            .map(|(name, attributes)| Entry { name, attributes })
            .collect(),
        other => {
            tracing::debug!("Ignoring locator database with top-level {}", kind_of(&other));
            Vec::new()
        }
    }
}

fn normalize_legacy(records: Vec<Value>) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let Value::Object(mut attributes) = record else {
            tracing::trace!("Dropping legacy record {}: not an object", index);
            continue;
        };

        let name = match attributes.remove("name") {
            Some(Value::String(name)) => name,
            _ => {
                tracing::trace!("Dropping legacy record {}: no name", index);
                continue;
            }
        };
        attributes.remove("id");

        entries.push(Entry {
            name,
            attributes: Value::Object(attributes),
        });
    }

    entries
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
