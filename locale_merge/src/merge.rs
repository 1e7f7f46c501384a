//! Recursive deep-merge mechanics for translation documents.

use serde_json::{Map, Value};

/// Overlay `supplement` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - Objects are merged recursively (keys are added or overwritten, and
///   nested objects are overlaid).
/// - Arrays and scalars (including `null`) replace `target` wholesale; arrays
///   are opaque leaves and are never merged element-wise.
/// - When an object is overlaid onto a non-object target, the target is reset
///   to `{}` first, so the supplement's subtree replaces the old scalar
///   entirely rather than merging into it.
///
/// # Examples
///
/// ```rust
/// use locale_merge::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"title": "Labs", "nav": {"home": "Home"}});
/// merge_value(&mut acc, json!({"nav": {"back": "Back"}, "footer": "Contact"}));
/// assert_eq!(
///     acc,
///     json!({"title": "Labs", "nav": {"home": "Home", "back": "Back"}, "footer": "Contact"}),
/// );
///
/// // Arrays replace existing values.
/// merge_value(&mut acc, json!({"nav": ["home", "back"]}));
/// assert_eq!(acc["nav"], json!(["home", "back"]));
/// ```
pub fn merge_value(target: &mut Value, supplement: Value) {
    match supplement {
        Value::Object(map) => merge_object(target, map),
        _ => *target = supplement,
    }
}

/// Merge the provided JSON object `map` into `target`.
///
/// Non-object targets are converted to empty objects before the overlay.
/// This is deliberate: when the base holds a scalar where the supplement
/// holds a nested document, the supplement's document wins at that key as a
/// whole. Merging into the stale scalar instead would be meaningless, and
/// keeping the scalar would silently drop the supplement's subtree.
fn merge_object(target: &mut Value, map: Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    let Some(target_map) = target.as_object_mut() else {
        return;
    };

    for (key, value) in map {
        match target_map.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target_map.insert(key, value);
            }
        }
    }
}

/// Merge two translation documents without mutating either argument.
///
/// Keys present only in `base` are kept, keys present only in `supplement`
/// are filled in, keys that are objects on both sides merge recursively, and
/// the supplement wins wherever at least one side holds a scalar or array.
///
/// # Examples
///
/// ```rust
/// use locale_merge::merge_documents;
/// use serde_json::json;
///
/// let base = json!({"greeting": {"hello": "Hello"}});
/// let supplement = json!({"greeting": {"bye": "Bye"}, "farewell": "See you"});
/// assert_eq!(
///     merge_documents(&base, &supplement),
///     json!({"greeting": {"hello": "Hello", "bye": "Bye"}, "farewell": "See you"}),
/// );
/// // Both inputs are left as they were.
/// assert_eq!(base, json!({"greeting": {"hello": "Hello"}}));
/// ```
#[must_use]
pub fn merge_documents(base: &Value, supplement: &Value) -> Value {
    let mut merged = base.clone();
    merge_value(&mut merged, supplement.clone());
    merged
}

#[cfg(test)]
mod tests {
    //! Unit tests for the deep-merge contract.

    use super::{merge_documents, merge_value};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn keeps_base_only_keys() {
        let merged = merge_documents(&json!({"title": "Labs"}), &json!({}));
        assert_eq!(merged, json!({"title": "Labs"}));
    }

    #[rstest]
    fn fills_in_supplement_only_keys() {
        let merged = merge_documents(&json!({}), &json!({"footer": "Contact"}));
        assert_eq!(merged, json!({"footer": "Contact"}));
    }

    #[rstest]
    fn produces_the_union_of_keys() {
        let merged = merge_documents(&json!({"a": 1, "b": 2}), &json!({"b": 3, "c": 4}));
        let keys: Vec<&str> = merged
            .as_object()
            .expect("merged document is an object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[rstest]
    fn merges_shared_nested_objects_recursively() {
        let merged = merge_documents(&json!({"a": {"x": 1}}), &json!({"a": {"y": 2}}));
        assert_eq!(merged, json!({"a": {"x": 1, "y": 2}}));
    }

    #[rstest]
    #[case(json!({"lang": "en"}), json!({"lang": "fr"}), json!({"lang": "fr"}))]
    #[case(json!({"count": 1}), json!({"count": null}), json!({"count": null}))]
    #[case(json!({"on": true}), json!({"on": false}), json!({"on": false}))]
    fn supplement_wins_on_shared_scalar_keys(
        #[case] base: Value,
        #[case] supplement: Value,
        #[case] expected: Value,
    ) {
        assert_eq!(merge_documents(&base, &supplement), expected);
    }

    #[rstest]
    fn replaces_arrays_wholesale() {
        let merged = merge_documents(&json!({"tags": ["a", "b", "c"]}), &json!({"tags": ["d"]}));
        assert_eq!(merged, json!({"tags": ["d"]}));
    }

    #[rstest]
    fn supplement_object_replaces_base_scalar() {
        let merged = merge_documents(&json!({"nav": "Home"}), &json!({"nav": {"home": "Home"}}));
        assert_eq!(merged, json!({"nav": {"home": "Home"}}));
    }

    #[rstest]
    fn supplement_scalar_replaces_base_object() {
        let merged = merge_documents(&json!({"nav": {"home": "Home"}}), &json!({"nav": "Home"}));
        assert_eq!(merged, json!({"nav": "Home"}));
    }

    #[rstest]
    fn reapplying_the_same_supplement_changes_nothing() {
        let base = json!({"greeting": {"hello": "Hello"}, "lang": "en"});
        let supplement = json!({"greeting": {"bye": "Bye"}, "lang": "fr"});

        let once = merge_documents(&base, &supplement);
        let twice = merge_documents(&once, &supplement);
        assert_eq!(once, twice);
    }

    #[rstest]
    fn leaves_both_inputs_unchanged() {
        let base = json!({"greeting": {"hello": "Hello"}, "tags": [1, 2]});
        let supplement = json!({"greeting": {"bye": "Bye"}, "tags": [3]});
        let base_before = base.clone();
        let supplement_before = supplement.clone();

        let _merged = merge_documents(&base, &supplement);
        assert_eq!(base, base_before);
        assert_eq!(supplement, supplement_before);
    }

    #[rstest]
    fn in_place_overlay_replaces_non_object_targets() {
        let mut target = json!("stale");
        merge_value(&mut target, json!({"fresh": true}));
        assert_eq!(target, json!({"fresh": true}));
    }
}
