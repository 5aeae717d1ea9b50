//! Classified token tree.
//!
//! Normalized JSON is classified exactly once into [`Node`]s. Downstream code
//! matches on the variant instead of re-inspecting object keys.

use serde_json::{Map, Value};
use tracing::debug;

use super::normalize::{TYPE_KEY, VALUE_KEY};
use crate::css::TypographyProperty;

/// Semantic category declared by a token's `$type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenType {
    /// A length such as `4` or `1.5rem`.
    Dimension,
    /// A font family name or stack.
    FontFamily,
    /// Any color value.
    Color,
    /// A composite of font sub-properties.
    Typography,
    /// Any other declared type, kept verbatim.
    Other(String),
}

impl TokenType {
    /// Parse a `$type` string. Unknown types are kept as [`TokenType::Other`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "dimension" => TokenType::Dimension,
            "fontFamily" => TokenType::FontFamily,
            "color" => TokenType::Color,
            "typography" => TokenType::Typography,
            other => TokenType::Other(other.to_string()),
        }
    }

    /// The `$type` spelling of this type.
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Dimension => "dimension",
            TokenType::FontFamily => "fontFamily",
            TokenType::Color => "color",
            TokenType::Typography => "typography",
            TokenType::Other(s) => s,
        }
    }

    /// Read the `$type` key of a token object, if it holds a string.
    pub fn of(token: &Map<String, Value>) -> Option<Self> {
        token.get(TYPE_KEY).and_then(Value::as_str).map(Self::parse)
    }
}

/// A classified node of the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A named group of child nodes, in source order.
    Group(Vec<(String, Node)>),
    /// A single token value.
    Leaf {
        /// Declared `$type`, if any.
        token_type: Option<TokenType>,
        /// Raw value (never an object carrying `$value`).
        value: Value,
    },
    /// A composite typography token: sub-property name -> raw value, in
    /// source order. Raw values may themselves be `$value` token objects.
    Typography(Vec<(String, Value)>),
}

impl Node {
    /// Classify a normalized JSON value. `null` yields no node.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(map) => Some(Self::from_object(map)),
            other => Some(Node::Leaf {
                token_type: None,
                value: other.clone(),
            }),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let token_type = TokenType::of(map);

        if let Some(value) = map.get(VALUE_KEY) {
            if let Value::Object(fields) = value
                && (token_type == Some(TokenType::Typography) || looks_like_typography(fields))
            {
                return Node::Typography(sub_properties(fields));
            }
            return Node::Leaf {
                token_type,
                value: value.clone(),
            };
        }

        if looks_like_typography(map) {
            return Node::Typography(sub_properties(map));
        }

        Node::Group(children(map))
    }
}

/// A composite is recognized by a truthy font size, font family or line height.
fn looks_like_typography(map: &Map<String, Value>) -> bool {
    map.iter().any(|(key, value)| {
        TypographyProperty::from_key(key).is_some_and(TypographyProperty::marks_typography)
            && is_truthy(value)
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `$`-prefixed keys (`$type`, `$description`, `$extensions`) are metadata.
fn is_metadata(key: &str) -> bool {
    key.starts_with('$')
}

fn sub_properties(map: &Map<String, Value>) -> Vec<(String, Value)> {
    map.iter()
        .filter(|(key, _)| !is_metadata(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn children(map: &Map<String, Value>) -> Vec<(String, Node)> {
    map.iter()
        .filter(|(key, _)| !is_metadata(key))
        .filter_map(|(key, value)| Node::from_value(value).map(|node| (key.clone(), node)))
        .collect()
}

/// A non-group node together with its path from the root.
#[derive(Debug, Clone)]
pub struct TokenEntry<'a> {
    /// Keys from the root down to this node. Never empty.
    pub path: Vec<&'a str>,
    /// The leaf or typography node.
    pub node: &'a Node,
}

/// Token tree built once per build from normalized JSON; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTree {
    children: Vec<(String, Node)>,
}

impl TokenTree {
    /// Classify a normalized document. A top-level value that is not an
    /// object yields an empty tree.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                children: children(map),
            },
            other => {
                debug!(kind = json_kind(other), "Token document is not an object; ignoring it.");
                Self::default()
            }
        }
    }

    /// Top-level nodes, in source order.
    pub fn children(&self) -> &[(String, Node)] {
        &self.children
    }

    /// True if the tree holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Every leaf and typography node, depth first, in source order.
    pub fn entries(&self) -> Vec<TokenEntry<'_>> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        collect_entries(&self.children, &mut path, &mut out);
        out
    }
}

fn collect_entries<'a>(
    nodes: &'a [(String, Node)],
    path: &mut Vec<&'a str>,
    out: &mut Vec<TokenEntry<'a>>,
) {
    for (key, node) in nodes {
        path.push(key.as_str());
        match node {
            Node::Group(children) => collect_entries(children, path, out),
            Node::Leaf { .. } | Node::Typography(_) => out.push(TokenEntry {
                path: path.clone(),
                node,
            }),
        }
        path.pop();
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
