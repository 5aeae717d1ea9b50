//! Canonical key spelling for parsed token documents.
//!
//! Design tools export either bare `type`/`value` keys or the `$`-prefixed
//! form. Everything downstream only looks at the `$`-prefixed form.

use serde_json::{Map, Value};

/// Canonical key holding a token's semantic type.
pub const TYPE_KEY: &str = "$type";

/// Canonical key holding a token's value.
pub const VALUE_KEY: &str = "$value";

fn canonical_key(key: &str) -> &str {
    match key {
        "type" => TYPE_KEY,
        "value" => VALUE_KEY,
        other => other,
    }
}

/// Rewrite every `type`/`value` object key to `$type`/`$value`, recursively.
///
/// Arrays and scalars pass through unchanged and key order is preserved.
/// The input is not modified.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                out.insert(canonical_key(key).to_string(), normalize(child));
            }
            Value::Object(out)
        }
        scalar => scalar.clone(),
    }
}
