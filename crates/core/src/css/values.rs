//! Raw token values to CSS values.
//!
//! Dispatch order matters and is fixed:
//! 1. missing value -> `None`, the declaration is skipped
//! 2. dimension (declared, or untyped length property) -> `px` unit default
//! 3. `fontFamily` key -> quoted when it contains whitespace or quotes
//! 4. anything else passes through

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};

use super::properties::TypographyProperty;
use crate::tokens::{TokenType, VALUE_KEY};

/// Property key used when formatting a plain token for the root block.
///
/// It is not a length-bearing key, so untyped root tokens are never given a
/// unit.
pub const ROOT_VALUE_KEY: &str = "value";

/// A string value already carrying a unit: a trailing run of ASCII letters
/// or `%` (`1.5rem`, `50%`, `auto`). Case-insensitive.
pub const UNIT_SUFFIX_PATTERN: &str = r"(?i)[a-z%]+$";

#[allow(clippy::expect_used)]
static UNIT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UNIT_SUFFIX_PATTERN).expect("unit suffix pattern is valid"));

const DEFAULT_UNIT: &str = "px";

/// Format a raw value for the CSS property read from token key `key`.
///
/// `raw` may be a nested token object carrying `$value` (and optionally
/// `$type`); the nested type takes precedence over `declared`.
/// Returns `None` when there is no value.
pub fn format_value(key: &str, raw: &Value, declared: Option<&TokenType>) -> Option<String> {
    let (value, token_type) = unwrap_token(raw, declared);
    if value.is_null() {
        return None;
    }

    let property = TypographyProperty::from_key(key);

    let is_dimension = match &token_type {
        Some(TokenType::Dimension) => true,
        Some(_) => false,
        None => property.is_some_and(TypographyProperty::is_length),
    };
    if is_dimension {
        return Some(format_dimension(value));
    }

    if property == Some(TypographyProperty::FontFamily) {
        return Some(format_font_family(value));
    }

    Some(render(value))
}

fn unwrap_token<'a>(raw: &'a Value, declared: Option<&TokenType>) -> (&'a Value, Option<TokenType>) {
    if let Value::Object(token) = raw
        && let Some(value) = token.get(VALUE_KEY)
    {
        let token_type = TokenType::of(token).or_else(|| declared.cloned());
        return (value, token_type);
    }
    (raw, declared.cloned())
}

fn format_dimension(value: &Value) -> String {
    let text = render(value);
    if value.is_number() || !UNIT_SUFFIX_RE.is_match(&text) {
        format!("{text}{DEFAULT_UNIT}")
    } else {
        text
    }
}

fn format_font_family(value: &Value) -> String {
    match value {
        Value::String(name) => quote_font_name(name),
        Value::Array(stack) => stack
            .iter()
            .map(|item| match item {
                Value::String(name) => quote_font_name(name),
                other => render(other),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => render(other),
    }
}

/// Quote a font name containing whitespace or quote characters.
fn quote_font_name(name: &str) -> String {
    if name.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
        format!("\"{}\"", name.replace('"', "\\\""))
    } else {
        name.to_string()
    }
}

/// Render a JSON value as CSS text without any unit or quoting rules.
fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Integral floats render without a fractional part (`32`, not `32.0`).
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}
