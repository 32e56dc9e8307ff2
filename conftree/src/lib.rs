//! # conftree
//!
//! An ordered configuration-tree layer for generating static theme config
//! files from saved option data.
//!
//! The tree type is [`serde_json::Value`] with insertion-ordered maps, so a
//! tree built by walking options in a defined order renders in that same
//! order. On top of that, this crate provides:
//!
//! - Node helpers: top-level-mapping checks, associative-vs-list map
//!   classification, and auto-vivifying nested writes ([`node`])
//! - Defaults pruning: a recursive diff that drops empty, default-equal,
//!   and divider-artifact entries ([`prune`])
//! - Literal rendering: serialization of a pruned tree into a PHP
//!   `return [...]` array literal ([`render`])
//!
//! ## Quick Start
//!
//! ```rust
//! use conftree::{prune, render_config, Tree};
//! use serde_json::json;
//!
//! let tree: Tree = serde_json::from_value(json!({
//!     "global-styles": { "colors": { "primary": "#fff" } },
//! }))
//! .unwrap();
//!
//! let pruned = prune(&tree, &Tree::new());
//! let literal = render_config(&pruned);
//! assert!(literal.contains("'primary' => '#fff',"));
//! ```

/// Library error types.
pub mod error;

/// Tree node helpers: classification and nested writes.
pub mod node;

/// Recursive pruning of a config tree against a defaults tree.
pub mod prune;

/// Rendering of a config tree as a PHP array literal.
pub mod render;

pub use error::TreeError;
pub use node::{Tree, as_tree, has_string_keys, set_path};
pub use prune::prune;
pub use render::{render_config, render_entries};
pub use serde_json::Value;
