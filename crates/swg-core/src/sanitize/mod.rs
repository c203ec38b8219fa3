//! Identifier sanitization.
//!
//! Untrusted identifiers are HTML-escaped before they reach the address bar or
//! any rendered block, and percent-encoded before they are placed in a widget
//! URL query component.

mod html;
mod uri;

pub use html::escape_html;
pub use uri::encode_uri_component;

/// Prepares a raw identifier for use by the generator.
///
/// Trims surrounding whitespace and HTML-escapes the rest. Returns `None` when
/// nothing is left, which the generator reports as an empty identifier.
///
/// # Examples
///
/// - `sanitize_identifier("  gabelogannewell ")` → `Some("gabelogannewell")`
/// - `sanitize_identifier("<b>")` → `Some("&lt;b&gt;")`
/// - `sanitize_identifier("   ")` → `None`
pub fn sanitize_identifier(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(escape_html(trimmed))
}
