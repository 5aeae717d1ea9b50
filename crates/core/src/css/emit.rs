//! CSS emission via the Emit trait.

use super::types::{Declaration, RuleBlock, Stylesheet};

/// Trait for emitting CSS text from IR nodes.
pub trait Emit {
    /// Convert the IR node to its CSS string representation.
    fn emit(&self) -> String;
}

impl Emit for Declaration {
    fn emit(&self) -> String {
        format!("{}: {};", self.property, self.value)
    }
}

impl Emit for RuleBlock {
    fn emit(&self) -> String {
        let mut output = format!("{} {{\n", self.selector);
        for declaration in &self.declarations {
            output.push_str("  ");
            output.push_str(&declaration.emit());
            output.push('\n');
        }
        output.push_str("}\n");
        output
    }
}

impl Emit for Stylesheet {
    fn emit(&self) -> String {
        let mut output = self.root.emit();
        if !self.classes.is_empty() {
            output.push('\n');
            let classes: Vec<_> = self.classes.iter().map(|c| c.emit()).collect();
            output.push_str(&classes.join("\n"));
        }
        output
    }
}
