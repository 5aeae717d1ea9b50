//! Root custom-property block and the final stylesheet.

use serde_json::Value;
use tracing::debug;

use super::emit::Emit;
use super::names::format_name;
use super::types::{Declaration, RuleBlock, Stylesheet};
use super::typography::{TYPOGRAPHY_CATEGORY, impact_classes};
use super::values::{ROOT_VALUE_KEY, format_value};
use crate::tokens::{Node, TokenTree, normalize};

/// Default selector of the custom-property block.
pub const ROOT_SELECTOR: &str = ":root";

/// Top-level group holding color tokens.
pub const COLOR_CATEGORY: &str = "color";

/// Color tokens whose formatted name contains any of these are derived
/// variants and are not exposed. Matched anywhere in the name.
pub const EXCLUDED_COLOR_VARIANTS: [&str; 2] = ["tint", "shade"];

const CUSTOM_PROPERTY_MARKER: &str = "--";

/// Options for [`format_stylesheet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Selector of the custom-property block.
    pub selector: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            selector: ROOT_SELECTOR.to_string(),
        }
    }
}

/// One custom property per exposed leaf token, in tree order.
///
/// Skipped: anything under `typography`, color tint/shade variants, and
/// tokens without a value. Typography composites are never custom properties.
pub fn root_declarations(tree: &TokenTree) -> Vec<Declaration> {
    tree.entries()
        .iter()
        .filter_map(|entry| {
            let Node::Leaf { token_type, value } = entry.node else {
                return None;
            };
            let top = *entry.path.first()?;
            if top == TYPOGRAPHY_CATEGORY {
                return None;
            }

            let name = format_name(&entry.path);
            if top == COLOR_CATEGORY && is_color_variant(&name) {
                debug!(token = %name, "Skipping derived color variant.");
                return None;
            }

            let Some(value) = format_value(ROOT_VALUE_KEY, value, token_type.as_ref()) else {
                debug!(token = %name, "Skipping token without a value.");
                return None;
            };
            Some(Declaration::new(format!("{CUSTOM_PROPERTY_MARKER}{name}"), value))
        })
        .collect()
}

fn is_color_variant(name: &str) -> bool {
    EXCLUDED_COLOR_VARIANTS
        .iter()
        .any(|variant| name.contains(variant))
}

/// Build the stylesheet IR for a token tree.
pub fn build_stylesheet(tree: &TokenTree, options: &FormatOptions) -> Stylesheet {
    Stylesheet {
        root: RuleBlock::new(options.selector.as_str(), root_declarations(tree)),
        classes: impact_classes(tree),
    }
}

/// Format a token tree as stylesheet text.
pub fn format_stylesheet(tree: &TokenTree, options: &FormatOptions) -> String {
    build_stylesheet(tree, options).emit()
}

/// Normalize, classify and format a parsed token document with default options.
pub fn format_tokens(document: &Value) -> String {
    let tree = TokenTree::from_value(&normalize(document));
    format_stylesheet(&tree, &FormatOptions::default())
}
