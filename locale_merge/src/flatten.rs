//! Dot-path flattening used for merge reporting.

use std::collections::BTreeMap;

use serde_json::Value;

/// Flattens nested objects into dot-joined leaf paths.
///
/// Arrays and scalars are leaves and are never recursed into, matching the
/// merge's treatment of arrays as opaque values. A non-object root flattens
/// to a single entry under the empty path.
///
/// # Examples
///
/// ```rust
/// use locale_merge::flatten_document;
/// use serde_json::json;
///
/// let doc = json!({"greeting": {"hello": "Hello", "bye": "Bye"}, "farewell": "See you"});
/// let leaves = flatten_document(&doc);
/// assert_eq!(leaves.get("greeting.hello"), Some(&json!("Hello")));
/// assert_eq!(leaves.len(), 3);
/// ```
#[must_use]
pub fn flatten_document(doc: &Value) -> BTreeMap<String, Value> {
    let mut leaves = BTreeMap::new();
    collect_leaves("", doc, &mut leaves);
    leaves
}

/// Counts the leaf (scalar-valued) keys of a document.
///
/// Defined as the size of the flattened dot-path mapping, so empty nested
/// objects contribute nothing and arrays count as a single leaf.
#[must_use]
pub fn count_leaf_keys(doc: &Value) -> usize {
    flatten_document(doc).len()
}

fn collect_leaves(prefix: &str, value: &Value, leaves: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaves(&path, child, leaves);
            }
        }
        _ => {
            leaves.insert(prefix.to_owned(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for leaf-path flattening.

    use super::{count_leaf_keys, flatten_document};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn counts_scalar_keys_across_nesting_levels() {
        assert_eq!(count_leaf_keys(&json!({"a": {"b": 1, "c": 2}, "d": 3})), 3);
    }

    #[rstest]
    #[case(json!({}), 0)]
    #[case(json!({"a": {}}), 0)]
    #[case(json!({"tags": [1, 2, 3]}), 1)]
    #[case(json!({"a": {"b": {"c": null}}}), 1)]
    fn counts_edge_shapes(#[case] doc: Value, #[case] expected: usize) {
        assert_eq!(count_leaf_keys(&doc), expected);
    }

    #[rstest]
    fn joins_nested_keys_with_dots() {
        let doc = json!({"nav": {"menu": {"home": "Home"}}, "title": "Labs"});
        let leaves = flatten_document(&doc);
        let paths: Vec<&str> = leaves.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["nav.menu.home", "title"]);
    }

    #[rstest]
    fn treats_arrays_as_single_leaves() {
        let leaves = flatten_document(&json!({"steps": ["one", "two"]}));
        assert_eq!(leaves.get("steps"), Some(&json!(["one", "two"])));
    }

    #[rstest]
    fn flattens_a_non_object_root_to_the_empty_path() {
        let leaves = flatten_document(&json!("just a string"));
        assert_eq!(leaves.get(""), Some(&json!("just a string")));
        assert_eq!(leaves.len(), 1);
    }
}
