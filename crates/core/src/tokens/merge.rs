//! Deep merge of several normalized token documents.

use serde_json::Value;
use tracing::warn;

/// Merge `overlay` into `base`.
///
/// Objects are merged key by key, recursively. Any other collision is won by
/// `overlay`; a warning names the token path when the two values differ.
/// Keys first seen in `base` keep their position.
pub fn merge_trees(base: &mut Value, overlay: Value) {
    let mut path = Vec::new();
    merge_at(&mut path, base, overlay);
}

fn merge_at(path: &mut Vec<String>, base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => {
                        path.push(key);
                        merge_at(path, existing, value);
                        path.pop();
                    }
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            if !slot.is_null() && *slot != value {
                warn!(
                    token = %path.join("."),
                    "Token defined by more than one source; the later source wins."
                );
            }
            *slot = value;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_disjoint_groups() {
        let mut base = json!({ "color": { "base": { "$value": "#000" } } });
        merge_trees(&mut base, json!({ "spacing": { "sm": { "$value": 4 } } }));
        assert_eq!(
            base,
            json!({
                "color": { "base": { "$value": "#000" } },
                "spacing": { "sm": { "$value": 4 } }
            })
        );
    }

    #[test]
    fn test_merge_nested_groups() {
        let mut base = json!({ "color": { "brand": { "a": 1 } } });
        merge_trees(&mut base, json!({ "color": { "brand": { "b": 2 }, "neutral": 3 } }));
        assert_eq!(
            base,
            json!({ "color": { "brand": { "a": 1, "b": 2 }, "neutral": 3 } })
        );
    }

    #[test]
    fn test_merge_later_source_wins() {
        let mut base = json!({ "spacing": { "sm": { "$value": 4, "$type": "dimension" } } });
        merge_trees(&mut base, json!({ "spacing": { "sm": { "$value": 8 } } }));
        assert_eq!(
            base,
            json!({ "spacing": { "sm": { "$value": 8, "$type": "dimension" } } })
        );
    }

    #[test]
    fn test_merge_keeps_first_seen_order() {
        let mut base = json!({ "b": 1, "a": 1 });
        merge_trees(&mut base, json!({ "c": 1, "a": 2 }));
        let keys: Vec<_> = base.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(base["a"], json!(2));
    }

    #[test]
    fn test_merge_into_empty_document() {
        let mut base = json!({});
        merge_trees(&mut base, json!({ "a": { "b": 1 } }));
        assert_eq!(base, json!({ "a": { "b": 1 } }));
    }
}
