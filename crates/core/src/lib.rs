//! Design token to CSS compilation.
//!
//! The pipeline is:
//! 1. Parse: token JSON -> `serde_json::Value`
//! 2. Normalize: `type`/`value` keys rewritten to `$type`/`$value` ([`normalize`])
//! 3. Classify: JSON -> [`TokenTree`] (groups, leaves, typography composites)
//! 4. Format: [`TokenTree`] -> [`Stylesheet`] -> text (via the [`Emit`] trait)
//!
//! Steps 2-4 are pure. [`build`] wraps them with configuration, file IO and
//! multi-source merging.

pub mod config;
pub mod css;
mod error;
pub mod pipeline;
pub mod tokens;

pub use config::{Config, CssConfig};
pub use css::{
    Emit, FormatOptions, Stylesheet, build_stylesheet, format_name, format_stylesheet,
    format_tokens, format_value,
};
pub use error::{Error, Result};
pub use pipeline::{BuildReport, build, read_source};
pub use tokens::{Node, TokenTree, TokenType, merge_trees, normalize};
