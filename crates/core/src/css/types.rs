//! CSS IR produced by the formatter and consumed by `emit`.

/// A single `property: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, e.g. `font-size` or `--color-brand-primary`.
    pub property: String,
    /// Formatted CSS value.
    pub value: String,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A selector followed by its declarations, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    /// Selector text, e.g. `:root` or `.heading-display`.
    pub selector: String,
    /// Declarations in output order.
    pub declarations: Vec<Declaration>,
}

impl RuleBlock {
    /// Create a rule block.
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

/// The generated document: custom properties first, then utility classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// Root block holding one custom property per exposed token.
    pub root: RuleBlock,
    /// Generated typography classes, in tree order.
    pub classes: Vec<RuleBlock>,
}
