use serde_json::Value;

use crate::node::Tree;

/// One indentation unit of the rendered literal.
pub const TAB: &str = "\t";

/// Line terminator used between rendered entries.
///
/// The output is pasted into editors on any platform, so it matches what
/// the target files ship with.
pub const LINE_ENDING: &str = "\r\n";

/// Comment block emitted at the top of every rendered file.
const HEADER: &str = concat!(
    "<?php\r\n",
    "/**\r\n",
    " * Theme configuration overrides.\r\n",
    " *\r\n",
    " * Generated from the active option set. Only values that differ\r\n",
    " * from the shipped defaults are listed.\r\n",
    " */\r\n",
);

/// Render a pruned config tree as a complete PHP config file body.
///
/// The tree is wrapped in a `return [ ... ];` expression under a fixed
/// header comment, with one entry per line and one [`TAB`] per nesting
/// depth.
pub fn render_config(config: &Tree) -> String {
    let mut out = String::from(HEADER);
    out.push_str("return [");
    out.push_str(LINE_ENDING);
    out.push_str(&render_entries(config, TAB));
    out.push_str("];");
    out.push_str(LINE_ENDING);
    out
}

/// Render the entries of a map at the given indentation.
///
/// Each entry becomes one line (nested maps and lists open a bracketed
/// block and recurse one indent deeper):
///
/// - map or list value: `'<key>' => [` ... `],`
/// - list element: `'<value>',` with no key (booleans unquoted)
/// - boolean leaf: `'<key>' => true,` / `'<key>' => false,`
/// - any other leaf: `'<key>' => '<value>',`
pub fn render_entries(map: &Tree, indent: &str) -> String {
    let mut out = String::new();
    for (key, value) in map {
        render_entry(&mut out, Some(key), value, indent);
    }
    out
}

fn render_entry(out: &mut String, key: Option<&str>, value: &Value, indent: &str) {
    match value {
        Value::Object(map) => {
            open_block(out, key, indent);
            for (sub_key, sub_value) in map {
                render_entry(out, Some(sub_key), sub_value, &format!("{indent}{TAB}"));
            }
            close_block(out, indent);
        }
        Value::Array(items) => {
            open_block(out, key, indent);
            for item in items {
                render_entry(out, None, item, &format!("{indent}{TAB}"));
            }
            close_block(out, indent);
        }
        leaf => {
            out.push_str(indent);
            if let Some(key) = key {
                out.push_str(&quote(key));
                out.push_str(" => ");
            }
            out.push_str(&render_leaf(leaf));
            out.push(',');
            out.push_str(LINE_ENDING);
        }
    }
}

fn open_block(out: &mut String, key: Option<&str>, indent: &str) {
    out.push_str(indent);
    if let Some(key) = key {
        out.push_str(&quote(key));
        out.push_str(" => ");
    }
    out.push('[');
    out.push_str(LINE_ENDING);
}

fn close_block(out: &mut String, indent: &str) {
    out.push_str(indent);
    out.push_str("],");
    out.push_str(LINE_ENDING);
}

fn render_leaf(value: &Value) -> String {
    match value {
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Number(n) => quote(&n.to_string()),
        Value::String(s) => quote(s),
        Value::Null => quote(""),
        // Maps and lists are handled by the caller.
        other => quote(&other.to_string()),
    }
}

/// Quote a string for PHP single-quoted context.
///
/// Backslashes and single quotes are the only characters with meaning in
/// that context; escaping them keeps arbitrary saved values from breaking
/// the generated file.
fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
