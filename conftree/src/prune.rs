use log::trace;
use serde_json::Value;

use crate::node::{Tree, has_string_keys};

/// Key substrings marking divider rows saved by the options UI.
///
/// Dividers are presentation-only artifacts; they carry no configuration
/// and are dropped wherever they appear.
const DIVIDER_MARKERS: [&str; 2] = ["-layout-divider", "-field-divider"];

/// Value stored for saved horizontal-rule rows (paired with an empty key).
const RULE_LITERAL: &str = "<hr>";

/// Prune a config tree against a defaults tree, returning a fresh copy.
///
/// Entry-by-entry, recursively:
///
/// 1. Divider artifacts are dropped (see [`is_divider`]).
/// 2. Associative sub-maps recurse with the matching defaults sub-map
///    (empty when absent or not a map); sub-maps left empty are dropped.
/// 3. Maps with only numeric keys are re-indexed to dense lists, with no
///    pruning of the elements themselves; lists pass through as-is.
/// 4. Leaves are dropped when the value is an empty string, or when a
///    default exists at the same key and equals the value exactly.
///
/// The result never contains empty strings, empty nested structures, or
/// default-equal leaves, and pruning an already-pruned tree against the
/// same defaults changes nothing.
pub fn prune(node: &Tree, defaults: &Tree) -> Tree {
    let empty = Tree::new();
    let mut out = Tree::new();

    for (key, value) in node {
        if is_divider(key, value) {
            trace!("prune: dropping divider entry {key:?}");
            continue;
        }

        match value {
            Value::Object(map) if has_string_keys(map) => {
                let sub_defaults = defaults
                    .get(key)
                    .and_then(Value::as_object)
                    .unwrap_or(&empty);
                let pruned = prune(map, sub_defaults);
                if pruned.is_empty() {
                    trace!("prune: dropping emptied sub-map {key:?}");
                    continue;
                }
                out.insert(key.clone(), Value::Object(pruned));
            }
            Value::Object(map) => {
                // Numeric keys only: saved sequential data. Re-index densely.
                if map.is_empty() {
                    continue;
                }
                let list: Vec<Value> = map.values().cloned().collect();
                out.insert(key.clone(), Value::Array(list));
            }
            Value::Array(items) => {
                if items.is_empty() {
                    continue;
                }
                out.insert(key.clone(), value.clone());
            }
            leaf => {
                if matches!(leaf, Value::String(s) if s.is_empty()) {
                    trace!("prune: dropping empty value for {key:?}");
                    continue;
                }
                if defaults.get(key) == Some(leaf) {
                    trace!("prune: {key:?} equals its default, dropping");
                    continue;
                }
                out.insert(key.clone(), leaf.clone());
            }
        }
    }

    out
}

/// Whether an entry is a saved divider artifact.
fn is_divider(key: &str, value: &Value) -> bool {
    if DIVIDER_MARKERS.iter().any(|m| key.contains(m)) {
        return true;
    }
    key.is_empty() && value.as_str() == Some(RULE_LITERAL)
}
