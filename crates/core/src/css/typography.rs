//! Utility classes for "impact" typography tokens.
//!
//! A typography composite whose last path segment ends in `--impact` or
//! `-impact` becomes a class named after its path, minus the suffix and minus
//! a leading `typography` segment:
//!
//! ```text
//! typography.heading.display--impact  ->  .heading-display { ... }
//! ```
//!
//! Other typography composites produce nothing.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::names::format_name;
use super::properties::css_property_name;
use super::types::{Declaration, RuleBlock};
use super::values::format_value;
use crate::tokens::{Node, TokenTree};

/// Top-level group holding typography tokens. Never exposed as custom
/// properties and dropped from generated class names.
pub const TYPOGRAPHY_CATEGORY: &str = "typography";

/// Trailing `--impact` or `-impact`, case-insensitive. The double-hyphen
/// form is tried first so both hyphens are stripped.
pub const IMPACT_SUFFIX_PATTERN: &str = r"(?i)(--impact|-impact)$";

#[allow(clippy::expect_used)]
static IMPACT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMPACT_SUFFIX_PATTERN).expect("impact suffix pattern is valid"));

const CLASS_MARKER: char = '.';

/// Strip the impact suffix from a path segment.
///
/// Returns `None` when the segment does not end in an impact suffix.
pub fn strip_impact_suffix(segment: &str) -> Option<&str> {
    IMPACT_SUFFIX_RE
        .find(segment)
        .map(|suffix| &segment[..suffix.start()])
}

/// Class blocks for every impact typography composite, in tree order.
pub fn impact_classes(tree: &TokenTree) -> Vec<RuleBlock> {
    tree.entries()
        .iter()
        .filter_map(|entry| match entry.node {
            Node::Typography(fields) => impact_class(&entry.path, fields),
            Node::Leaf { .. } | Node::Group(_) => None,
        })
        .collect()
}

fn impact_class(path: &[&str], fields: &[(String, Value)]) -> Option<RuleBlock> {
    let (last, parents) = path.split_last()?;
    let Some(base) = strip_impact_suffix(last) else {
        debug!(token = %path.join("."), "Typography token is not an impact variant; skipping.");
        return None;
    };

    let parents = match parents.split_first() {
        Some((first, rest)) if *first == TYPOGRAPHY_CATEGORY => rest,
        _ => parents,
    };
    let mut segments = parents.to_vec();
    segments.push(base);

    let name = format_name(&segments);
    if name.is_empty() {
        warn!(token = %path.join("."), "Impact typography token has an empty class name; skipping.");
        return None;
    }

    let declarations: Vec<Declaration> = fields
        .iter()
        .filter_map(|(key, raw)| {
            format_value(key, raw, None).map(|value| Declaration::new(css_property_name(key), value))
        })
        .collect();
    if declarations.is_empty() {
        debug!(class = %name, "Impact typography token has no values; skipping.");
        return None;
    }

    Some(RuleBlock::new(format!("{CLASS_MARKER}{name}"), declarations))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::tokens::normalize;
    use serde_json::json;

    fn classes(raw: &Value) -> Vec<RuleBlock> {
        impact_classes(&TokenTree::from_value(&normalize(raw)))
    }

    #[test]
    fn test_strip_impact_suffix_forms() {
        assert_eq!(strip_impact_suffix("display--impact"), Some("display"));
        assert_eq!(strip_impact_suffix("display-impact"), Some("display"));
        assert_eq!(strip_impact_suffix("Display--IMPACT"), Some("Display"));
        assert_eq!(strip_impact_suffix("display-Impact"), Some("display"));
        assert_eq!(strip_impact_suffix("-impact"), Some(""));
    }

    #[test]
    fn test_strip_impact_suffix_rejects_non_suffix() {
        assert_eq!(strip_impact_suffix("display"), None);
        assert_eq!(strip_impact_suffix("impact"), None);
        assert_eq!(strip_impact_suffix("displayimpact"), None);
        assert_eq!(strip_impact_suffix("impact-display"), None);
        assert_eq!(strip_impact_suffix("display--impact-2"), None);
    }

    #[test]
    fn test_impact_class_generation() {
        let out = classes(&json!({
            "typography": {
                "heading": {
                    "display--impact": { "fontSize": 32, "fontFamily": "Inter" }
                }
            }
        }));
        assert_eq!(
            out,
            vec![RuleBlock::new(
                ".heading-display",
                vec![
                    Declaration::new("font-size", "32px"),
                    Declaration::new("font-family", "Inter"),
                ]
            )]
        );
    }

    #[test]
    fn test_non_impact_typography_produces_nothing() {
        let out = classes(&json!({
            "typography": {
                "body": { "fontSize": 16, "lineHeight": 24 }
            }
        }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_leading_category_only_dropped_at_root() {
        let out = classes(&json!({
            "brand": {
                "typography": {
                    "hero-impact": { "fontSize": { "value": 48, "type": "dimension" } }
                }
            }
        }));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].selector, ".brand-typography-hero");
        assert_eq!(out[0].declarations, vec![Declaration::new("font-size", "48px")]);
    }

    #[test]
    fn test_sub_values_mapped_and_nulls_skipped() {
        let out = classes(&json!({
            "typography": {
                "Label--Impact": {
                    "fontFamily": { "$value": "Helvetica Neue" },
                    "fontWeight": { "$value": 700 },
                    "fontSize": { "$value": "1.25rem" },
                    "lineHeight": null,
                    "letterSpacing": { "$value": null },
                    "textCase": "uppercase",
                    "textDecoration": "none",
                    "paragraphIndent": 0,
                    "paragraphSpacing": "8",
                    "fontStretch": "condensed",
                    "fontStyle": "italic",
                    "textShadow": "none"
                }
            }
        }));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].selector, ".label");
        assert_eq!(
            out[0].declarations,
            vec![
                Declaration::new("font-family", "\"Helvetica Neue\""),
                Declaration::new("font-weight", "700"),
                Declaration::new("font-size", "1.25rem"),
                Declaration::new("text-transform", "uppercase"),
                Declaration::new("text-decoration", "none"),
                Declaration::new("text-indent", "0px"),
                Declaration::new("margin-bottom", "8px"),
                Declaration::new("font-stretch", "condensed"),
                Declaration::new("font-style", "italic"),
                Declaration::new("textshadow", "none"),
            ]
        );
    }

    #[test]
    fn test_all_null_values_produce_no_block() {
        let out = classes(&json!({
            "typography": {
                "ghost--impact": {
                    "fontSize": { "$value": null },
                    "fontFamily": { "$value": null }
                }
            }
        }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_class_name_skipped() {
        let out = classes(&json!({
            "typography": {
                "-impact": { "fontSize": 10 }
            }
        }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_classes_in_tree_order() {
        let out = classes(&json!({
            "typography": {
                "b--impact": { "fontSize": 2 },
                "plain": { "fontSize": 3 },
                "a-impact": { "fontSize": 1 }
            }
        }));
        let selectors: Vec<_> = out.iter().map(|c| c.selector.as_str()).collect();
        assert_eq!(selectors, [".b", ".a"]);
    }
}
