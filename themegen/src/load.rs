//! Option and defaults file loading.

use std::{fs, path::Path};

use anyhow::bail;
use conftree::{Tree, as_tree};
use serde_json::Value;

/// Load a flat option mapping or defaults tree from a file.
///
/// The format is chosen by extension: `.json` parses directly, `.toml`
/// is converted through a JSON value. The top level must be a mapping.
pub fn load_tree(path: &Path) -> anyhow::Result<Tree> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let value: Value = match ext {
        "json" => serde_json::from_str(&content)?,
        "toml" | "tml" => {
            let v: toml::Value = toml::from_str(&content)?;
            serde_json::to_value(v)?
        }
        ext => {
            bail!("Unsupported file extension: {ext:?}");
        }
    };

    let tree = as_tree(&value)?.clone();
    Ok(tree)
}
