//! Typography sub-properties known to the formatter.
//!
//! Design tools name composite typography fields in camelCase (`fontSize`,
//! `textCase`, `paragraphSpacing`). Unit defaults and typography detection
//! only recognize those exact keys. The CSS property name lookup is looser
//! and goes through the kebab form, so `FontSize` still maps to `font-size`.

use super::names::format_name;

/// A typography sub-property with a fixed CSS mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypographyProperty {
    /// `fontSize` -> `font-size`
    FontSize,
    /// `lineHeight` -> `line-height`
    LineHeight,
    /// `letterSpacing` -> `letter-spacing`
    LetterSpacing,
    /// `fontFamily` -> `font-family`
    FontFamily,
    /// `fontWeight` -> `font-weight`
    FontWeight,
    /// `fontStyle` -> `font-style`
    FontStyle,
    /// `fontStretch` -> `font-stretch`
    FontStretch,
    /// `textDecoration` -> `text-decoration`
    TextDecoration,
    /// `textCase` -> `text-transform`
    TextCase,
    /// `paragraphIndent` -> `text-indent`
    ParagraphIndent,
    /// `paragraphSpacing` -> `margin-bottom`
    ParagraphSpacing,
}

impl TypographyProperty {
    /// Every known property, in table order.
    pub const ALL: [Self; 11] = [
        Self::FontSize,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::FontFamily,
        Self::FontWeight,
        Self::FontStyle,
        Self::FontStretch,
        Self::TextDecoration,
        Self::TextCase,
        Self::ParagraphIndent,
        Self::ParagraphSpacing,
    ];

    /// Token key this property is read from.
    pub fn token_key(self) -> &'static str {
        match self {
            Self::FontSize => "fontSize",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
            Self::FontFamily => "fontFamily",
            Self::FontWeight => "fontWeight",
            Self::FontStyle => "fontStyle",
            Self::FontStretch => "fontStretch",
            Self::TextDecoration => "textDecoration",
            Self::TextCase => "textCase",
            Self::ParagraphIndent => "paragraphIndent",
            Self::ParagraphSpacing => "paragraphSpacing",
        }
    }

    /// CSS property written for this sub-property.
    pub fn css_property(self) -> &'static str {
        match self {
            Self::FontSize => "font-size",
            Self::LineHeight => "line-height",
            Self::LetterSpacing => "letter-spacing",
            Self::FontFamily => "font-family",
            Self::FontWeight => "font-weight",
            Self::FontStyle => "font-style",
            Self::FontStretch => "font-stretch",
            Self::TextDecoration => "text-decoration",
            Self::TextCase => "text-transform",
            Self::ParagraphIndent => "text-indent",
            Self::ParagraphSpacing => "margin-bottom",
        }
    }

    /// Length-bearing properties get a `px` unit when their type is unset.
    pub fn is_length(self) -> bool {
        matches!(
            self,
            Self::FontSize
                | Self::LineHeight
                | Self::LetterSpacing
                | Self::ParagraphIndent
                | Self::ParagraphSpacing
        )
    }

    /// Properties whose presence marks an object as a typography composite.
    pub fn marks_typography(self) -> bool {
        matches!(self, Self::FontSize | Self::FontFamily | Self::LineHeight)
    }

    /// Look up a raw token key. Case-sensitive: only the exact camelCase
    /// key matches.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token_key() == key)
    }

    fn from_kebab(kebab: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| format_name(&[p.token_key()]) == kebab)
    }
}

/// CSS property name for a typography sub-property key.
///
/// Matched on the kebab form of the key. Keys outside the table are
/// kebab-formatted and used as-is.
pub fn css_property_name(key: &str) -> String {
    let kebab = format_name(&[key]);
    TypographyProperty::from_kebab(&kebab)
        .map_or(kebab, |property| property.css_property().to_string())
}
