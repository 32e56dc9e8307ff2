//! Flat-key-to-nested-path rewriting.
//!
//! Saved options arrive as a flat mapping whose key names encode where
//! they belong in the config tree (`color-primary`, `page-header-overlay`,
//! `heading-typography`, ...). An ordered rule table turns that flat
//! mapping into the nested tree the theme config expects.

use std::collections::HashSet;

use conftree::{Tree, set_path};
use log::debug;
use serde_json::Value;

/// How a rule recognizes an option key.
enum KeyPattern {
    /// The key equals this name.
    Exact(&'static str),
    /// The key starts with this prefix; the rest is the captured name.
    Prefix(&'static str),
    /// The key ends with this suffix; the rest is the captured name.
    Suffix(&'static str),
}

impl KeyPattern {
    /// Match a key, returning the captured name part on success.
    ///
    /// Exact patterns capture the whole key.
    fn captures<'a>(&self, key: &'a str) -> Option<&'a str> {
        match self {
            KeyPattern::Exact(name) => (key == *name).then_some(key),
            KeyPattern::Prefix(prefix) => key.strip_prefix(prefix),
            KeyPattern::Suffix(suffix) => key.strip_suffix(suffix),
        }
    }
}

/// What a matched rule writes into the config tree.
enum RuleAction {
    /// Join the value's `font-family` and `font-weight` sub-fields as
    /// `"family:weight"` under `dest`, keyed by the captured name.
    /// Values missing either sub-field are skipped.
    Typography { dest: &'static [&'static str] },
    /// Copy the value under `dest`, keyed by the captured name.
    Captured { dest: &'static [&'static str] },
    /// Copy the value to the fixed `dest` path.
    Passthrough { dest: &'static [&'static str] },
    /// Write a fixed string to the `dest` path, ignoring the value.
    Literal {
        dest: &'static [&'static str],
        value: &'static str,
    },
}

struct MapRule {
    pattern: KeyPattern,
    action: RuleAction,
}

impl MapRule {
    fn apply(&self, name: &str, value: &Value, config: &mut Tree) {
        match &self.action {
            RuleAction::Typography { dest } => {
                let (Some(family), Some(weight)) = (
                    value.get("font-family").and_then(text),
                    value.get("font-weight").and_then(text),
                ) else {
                    return;
                };
                let mut path = dest.to_vec();
                path.push(name);
                set_path(config, &path, Value::String(format!("{family}:{weight}")));
            }
            RuleAction::Captured { dest } => {
                let mut path = dest.to_vec();
                path.push(name);
                set_path(config, &path, value.clone());
            }
            RuleAction::Passthrough { dest } => {
                set_path(config, dest, value.clone());
            }
            RuleAction::Literal { dest, value } => {
                set_path(config, dest, Value::String((*value).to_string()));
            }
        }
    }
}

/// The rule table, evaluated top-to-bottom.
///
/// Order is semantic twice over: a key is claimed by the first rule whose
/// pattern matches it, and later rules may rewrite paths earlier rules
/// created (`archive-settings` turns the scalar `content-archives` wrote
/// at `settings.content-archives` into a nested map).
const RULES: &[MapRule] = &[
    MapRule {
        pattern: KeyPattern::Suffix("-typography"),
        action: RuleAction::Typography {
            dest: &["global-styles", "fonts"],
        },
    },
    MapRule {
        pattern: KeyPattern::Prefix("color-"),
        action: RuleAction::Captured {
            dest: &["global-styles", "colors"],
        },
    },
    MapRule {
        pattern: KeyPattern::Exact("site-header-sticky"),
        action: RuleAction::Literal {
            dest: &["theme-support", "add"],
            value: "sticky-header",
        },
    },
    MapRule {
        pattern: KeyPattern::Exact("site-header-transparent"),
        action: RuleAction::Literal {
            dest: &["theme-support", "add"],
            value: "transparent-header",
        },
    },
    MapRule {
        pattern: KeyPattern::Exact("boxed-container"),
        action: RuleAction::Passthrough {
            dest: &["theme-support", "add"],
        },
    },
    MapRule {
        pattern: KeyPattern::Prefix("page-header-"),
        action: RuleAction::Captured {
            dest: &["settings", "page-header"],
        },
    },
    MapRule {
        pattern: KeyPattern::Exact("content-archives"),
        action: RuleAction::Passthrough {
            dest: &["settings", "content-archives"],
        },
    },
    MapRule {
        pattern: KeyPattern::Exact("single-content"),
        action: RuleAction::Passthrough {
            dest: &["settings", "single-content"],
        },
    },
    // Must stay after content-archives.
    MapRule {
        pattern: KeyPattern::Exact("archive-settings"),
        action: RuleAction::Passthrough {
            dest: &["settings", "content-archives", "enable"],
        },
    },
    // Must stay after single-content.
    MapRule {
        pattern: KeyPattern::Exact("single-settings"),
        action: RuleAction::Passthrough {
            dest: &["settings", "single-content", "enable"],
        },
    },
    MapRule {
        pattern: KeyPattern::Exact("site-layouts"),
        action: RuleAction::Passthrough {
            dest: &["settings", "site-layouts"],
        },
    },
    MapRule {
        pattern: KeyPattern::Exact("after-header-menu-alignment"),
        action: RuleAction::Passthrough {
            dest: &["settings", "after-header-menu-alignment"],
        },
    },
];

/// Builds a nested config tree from a flat options mapping.
///
/// Stateless apart from its keepers list; a fresh tree is produced on
/// every [`Mapper::map`] call.
pub struct Mapper {
    /// Top-level option keys copied through unchanged.
    ///
    /// No shipped option currently needs this, so it defaults to empty,
    /// but it stays configurable rather than hard-coded away.
    keepers: Vec<String>,
}

impl Mapper {
    /// Create a mapper with the given keepers allow-list.
    pub fn new(keepers: impl IntoIterator<Item = String>) -> Self {
        Self {
            keepers: keepers.into_iter().collect(),
        }
    }

    /// Evaluate the rule table over `options` into a fresh config tree.
    ///
    /// Falsy values (empty strings, `false`, zero, `"0"`, empty
    /// containers, null) and keys no rule matches are skipped silently.
    pub fn map(&self, options: &Tree) -> Tree {
        let mut config = Tree::new();
        let mut claimed: HashSet<&str> = HashSet::new();

        for rule in RULES {
            for (key, value) in options {
                if claimed.contains(key.as_str()) || !is_truthy(value) {
                    continue;
                }
                let Some(name) = rule.pattern.captures(key) else {
                    continue;
                };
                debug!("mapper: {key:?} matched, name {name:?}");
                claimed.insert(key.as_str());
                rule.apply(name, value, &mut config);
            }
        }

        for key in &self.keepers {
            if claimed.contains(key.as_str()) {
                continue;
            }
            if let Some(value) = options.get(key)
                && is_truthy(value)
            {
                debug!("mapper: keeping top-level {key:?}");
                config.insert(key.clone(), value.clone());
            }
        }

        fixup_page_header_image(&mut config);
        config
    }
}

/// Whether an option value counts as set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Drop `settings.page-header.image` when it holds a media attachment id.
///
/// A numeric id points into one site's media library and means nothing
/// on the site the generated config is pasted into; only URL values are
/// portable.
fn fixup_page_header_image(config: &mut Tree) {
    let Some(page_header) = config
        .get_mut("settings")
        .and_then(|v| v.get_mut("page-header"))
        .and_then(Value::as_object_mut)
    else {
        return;
    };

    let is_id = match page_header.get("image") {
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    };

    if is_id {
        debug!("mapper: dropping non-portable page-header image id");
        page_header.shift_remove("image");
    }
}
