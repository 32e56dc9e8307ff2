//! # themegen
//!
//! Generates theme `config.php` override files from saved customizer
//! options.
//!
//! Theme options are stored as one flat mapping of conventionally named
//! keys. This crate rewrites that mapping into the nested shape a theme
//! config file uses, drops everything that matches the theme's shipped
//! defaults, and renders what is left as a PHP array literal ready to
//! paste into `config.php`.
//!
//! ## Modules
//!
//! - [`mapper`] - Ordered rule table mapping flat option keys to nested
//!   config paths
//! - [`generate`] - Pipeline composition (map, prune, render)
//! - [`load`] - Option/defaults file loading (JSON or TOML)
//!
//! The tree layer itself (pruning and rendering) lives in the
//! [`conftree`] crate.
//!
//! ## Example
//!
//! ```rust
//! use conftree::Tree;
//! use serde_json::json;
//!
//! let options: Tree = serde_json::from_value(json!({
//!     "color-primary": "#fff",
//!     "site-header-sticky": true,
//! }))
//! .unwrap();
//!
//! let literal = themegen::generate(&options, &Tree::new(), &[]);
//! assert!(literal.contains("'add' => 'sticky-header',"));
//! ```

/// Pipeline composition: map, prune, render.
pub mod generate;

/// Option and defaults file loading.
pub mod load;

/// Ordered rule table mapping flat option keys to nested config paths.
pub mod mapper;

pub use generate::generate;
pub use load::load_tree;
pub use mapper::Mapper;
