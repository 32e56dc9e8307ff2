//! Pipeline composition: map, prune, render.

use conftree::{Tree, prune, render_config};

use crate::mapper::Mapper;

/// Run the full pipeline over one option set.
///
/// Maps the flat `options` into a nested config tree, prunes it against
/// `defaults`, and renders the result as a PHP config file body. Each
/// call is independent; nothing is shared between invocations.
pub fn generate(options: &Tree, defaults: &Tree, keepers: &[String]) -> String {
    let mapper = Mapper::new(keepers.iter().cloned());
    let config = mapper.map(options);
    let pruned = prune(&config, defaults);
    render_config(&pruned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn tree(value: Value) -> Tree {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn end_to_end_example() {
        let options = tree(json!({
            "color-primary": "#fff",
            "site-header-sticky": true,
            "boxed-container": "",
        }));

        let rendered = generate(&options, &Tree::new(), &[]);

        let expected = concat!(
            "return [\r\n",
            "\t'global-styles' => [\r\n",
            "\t\t'colors' => [\r\n",
            "\t\t\t'primary' => '#fff',\r\n",
            "\t\t],\r\n",
            "\t],\r\n",
            "\t'theme-support' => [\r\n",
            "\t\t'add' => 'sticky-header',\r\n",
            "\t],\r\n",
            "];\r\n",
        );
        assert!(rendered.starts_with("<?php\r\n"));
        assert!(rendered.ends_with(expected));
    }

    #[test]
    fn defaults_suppress_mapped_values() {
        let options = tree(json!({
            "color-primary": "#fff",
            "color-link": "#06c",
        }));
        let defaults = tree(json!({
            "global-styles": {"colors": {"primary": "#fff"}},
        }));

        let rendered = generate(&options, &defaults, &[]);

        assert!(!rendered.contains("primary"));
        assert!(rendered.contains("'link' => '#06c',"));
    }

    #[test]
    fn fully_default_option_sets_render_an_empty_return() {
        let options = tree(json!({"color-primary": "#fff"}));
        let defaults = tree(json!({
            "global-styles": {"colors": {"primary": "#fff"}},
        }));

        let rendered = generate(&options, &defaults, &[]);

        assert!(rendered.ends_with("return [\r\n];\r\n"));
    }

    #[test]
    fn quoted_values_render_escaped_through_the_pipeline() {
        let options = tree(json!({"page-header-title": "Del Monico's"}));

        let rendered = generate(&options, &Tree::new(), &[]);

        assert!(rendered.contains("'title' => 'Del Monico\\'s',"));
    }

    #[test]
    fn archive_ordering_survives_the_full_pipeline() {
        let options = tree(json!({
            "archive-settings": true,
            "content-archives": "grid",
        }));

        let rendered = generate(&options, &Tree::new(), &[]);

        assert!(rendered.contains("'content-archives' => [\r\n"));
        assert!(rendered.contains("'enable' => true,\r\n"));
        assert!(!rendered.contains("'grid'"));
    }
}
