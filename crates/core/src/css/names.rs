//! Flat identifiers for token paths.

/// Separator placed between path segments and words.
pub const SEPARATOR: char = '-';

/// Convert a token path into a lowercase kebab-case identifier.
///
/// Segments are joined with [`SEPARATOR`]. ASCII alphanumerics are kept,
/// runs of `_`, whitespace and `-` collapse into a single separator, and any
/// other character is dropped. Leading and trailing separators are trimmed.
///
/// The whole path is used, not only the leaf, so `spacing.sm` and
/// `radius.corner.sm` cannot collide. Formatting is idempotent.
pub fn format_name<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    let mut pending_separator = false;

    for (index, segment) in path.iter().enumerate() {
        if index > 0 {
            pending_separator = true;
        }
        for c in segment.as_ref().chars() {
            if c.is_ascii_alphanumeric() {
                if pending_separator && !out.is_empty() {
                    out.push(SEPARATOR);
                }
                pending_separator = false;
                out.push(c.to_ascii_lowercase());
            } else if c == '_' || c == SEPARATOR || c.is_whitespace() {
                pending_separator = true;
            }
        }
    }

    out
}
