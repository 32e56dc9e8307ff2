use serde_json::{Map, Value};

use crate::error::TreeError;

/// Insertion-ordered mapping from string keys to nested values.
///
/// Both the options mapping and the config/defaults trees share this shape.
pub type Tree = Map<String, Value>;

/// Borrow the top-level mapping out of a loaded value.
///
/// Option and defaults files must deserialize to a mapping at the top
/// level; anything else is a caller error.
pub fn as_tree(value: &Value) -> Result<&Tree, TreeError> {
    value.as_object().ok_or_else(|| TreeError::NotAMapping {
        found: value_kind(value).to_string(),
    })
}

/// Short human-readable name for a value's variant.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// Whether a map has at least one non-numeric (associative) key.
///
/// Maps with only numeric keys are list-like: they came from serialized
/// sequential data and are re-indexed rather than treated as records.
pub fn has_string_keys(map: &Tree) -> bool {
    map.keys().any(|k| k.parse::<usize>().is_err())
}

/// Write `value` at a nested `path`, creating intermediate maps as needed.
///
/// An intermediate node that already exists but is not a map is replaced
/// by one — the last write to a path determines its shape, so a rule that
/// assigns `settings.content-archives.enable` after a sibling rule stored
/// a scalar at `settings.content-archives` converts that node into a map.
///
/// # Panics
///
/// Panics if `path` is empty.
pub fn set_path(tree: &mut Tree, path: &[&str], value: Value) {
    let (last, inner) = path.split_last().expect("set_path requires a non-empty path");

    let mut node = tree;
    for seg in inner {
        let entry = node
            .entry(seg.to_string())
            .or_insert_with(|| Value::Object(Tree::new()));
        if !entry.is_object() {
            *entry = Value::Object(Tree::new());
        }
        node = entry.as_object_mut().unwrap();
    }

    node.insert(last.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: Value) -> Tree {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn as_tree_accepts_mappings_only() {
        assert!(as_tree(&json!({"a": 1})).is_ok());

        let err = as_tree(&json!(["a"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected a top-level mapping, found a list"
        );
    }

    #[test]
    fn string_keys_detection() {
        assert!(has_string_keys(&tree(json!({"enable": true}))));
        assert!(has_string_keys(&tree(json!({"0": "a", "show": "b"}))));
        assert!(!has_string_keys(&tree(json!({"0": "a", "1": "b"}))));
        assert!(!has_string_keys(&tree(json!({}))));
    }

    #[test]
    fn set_path_creates_intermediate_maps() {
        let mut t = Tree::new();
        set_path(&mut t, &["settings", "page-header", "overlay"], json!("dark"));

        assert_eq!(
            Value::Object(t),
            json!({"settings": {"page-header": {"overlay": "dark"}}})
        );
    }

    #[test]
    fn set_path_replaces_scalar_intermediates() {
        let mut t = tree(json!({"settings": {"content-archives": "grid"}}));
        set_path(&mut t, &["settings", "content-archives", "enable"], json!(true));

        assert_eq!(
            Value::Object(t),
            json!({"settings": {"content-archives": {"enable": true}}})
        );
    }

    #[test]
    fn set_path_last_write_wins() {
        let mut t = Tree::new();
        set_path(&mut t, &["theme-support", "add"], json!("sticky-header"));
        set_path(&mut t, &["theme-support", "add"], json!("transparent-header"));

        assert_eq!(
            Value::Object(t),
            json!({"theme-support": {"add": "transparent-header"}})
        );
    }
}
