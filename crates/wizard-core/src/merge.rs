//! JSON merge helpers used by keyed edits, presets and imports.

use serde_json::{Map, Value};

/// Replace top-level keys of `target` with those of `patch`.
pub fn merge_shallow(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        target.insert(key.clone(), value.clone());
    }
}

/// Recursively merge `patch` into `target`.
///
/// Objects merge key by key; any other value (arrays included) replaces the
/// target value. A `null` inside an object patch removes the key.
pub fn merge_deep(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                if value.is_null() {
                    target.remove(key);
                    continue;
                }
                let nested = value.is_object() && target.get(key).map_or(false, Value::is_object);
                if nested {
                    if let Some(existing) = target.get_mut(key) {
                        merge_deep(existing, value);
                    }
                } else {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shallow_replaces_sections() {
        let mut target = json!({"a": 1, "style": {"color": "red", "width": "1px"}});
        let patch = json!({"style": {"color": "blue"}, "b": true});
        merge_shallow(
            target.as_object_mut().unwrap(),
            patch.as_object().unwrap(),
        );
        assert_eq!(target, json!({"a": 1, "style": {"color": "blue"}, "b": true}));
    }

    #[test]
    fn test_deep_merges_objects() {
        let mut target = json!({"a": 1, "style": {"color": "red", "width": "1px"}, "list": [1, 2]});
        let patch = json!({"style": {"color": "blue", "width": null}, "list": [3]});
        merge_deep(&mut target, &patch);
        assert_eq!(target, json!({"a": 1, "style": {"color": "blue"}, "list": [3]}));
    }
}
