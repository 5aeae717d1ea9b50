//! CSS generation from a classified token tree.
//!
//! This module defines a two-layer architecture:
//! 1. Formatting: token paths and raw values resolved into CSS names and values
//!    (`names`, `values`, `properties`, `typography`, `stylesheet`)
//! 2. Emission: the CSS IR (`types`) rendered to text via the `Emit` trait
//!
//! All token corner cases (unit inference, quoting, filtering) are resolved
//! while building the IR, so emission is purely mechanical string building.
//!
//! ## Module Structure
//!
//! - `names`: token path -> kebab-case identifier
//! - `values`: raw token value -> CSS value
//! - `properties`: static table of typography sub-properties
//! - `typography`: "impact" typography tokens -> utility class blocks
//! - `stylesheet`: root custom-property block and final document
//! - `types`: CSS IR (Declaration, RuleBlock, Stylesheet)
//! - `emit`: CSS IR -> text (via Emit trait)

mod emit;
mod names;
mod properties;
mod stylesheet;
mod types;
mod typography;
mod values;

pub use emit::Emit;
pub use names::{SEPARATOR, format_name};
pub use properties::{TypographyProperty, css_property_name};
pub use stylesheet::{
    COLOR_CATEGORY, EXCLUDED_COLOR_VARIANTS, FormatOptions, ROOT_SELECTOR, build_stylesheet,
    format_stylesheet, format_tokens, root_declarations,
};
pub use types::{Declaration, RuleBlock, Stylesheet};
pub use typography::{IMPACT_SUFFIX_PATTERN, TYPOGRAPHY_CATEGORY, impact_classes, strip_impact_suffix};
pub use values::{ROOT_VALUE_KEY, UNIT_SUFFIX_PATTERN, format_value};
