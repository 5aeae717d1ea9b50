//! Token documents: key normalization, multi-source merging and the
//! classified tree consumed by the CSS formatter.
//!
//! ## Module Structure
//!
//! - `normalize`: canonical `$type`/`$value` key spelling (JSON -> JSON)
//! - `merge`: deep merge of several normalized source documents
//! - `tree`: classification of normalized JSON into [`Node`]s

mod merge;
mod normalize;
mod tree;

pub use merge::merge_trees;
pub use normalize::{TYPE_KEY, VALUE_KEY, normalize};
pub use tree::{Node, TokenEntry, TokenTree, TokenType};
