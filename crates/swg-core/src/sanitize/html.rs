//! HTML escaping for untrusted identifiers.

/// Entities produced by [`escape_html`]. An `&` that already starts one of
/// these is kept as is.
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"];

/// Escapes `&`, `<`, `>`, `"` and `'` so the value can never be interpreted
/// as markup or script.
///
/// - `&` → `&amp;` (unless it already starts one of the five entities)
/// - `<` → `&lt;`, `>` → `&gt;`
/// - `"` → `&quot;`, `'` → `&#039;`
///
/// Escaping is idempotent: `escape_html(&escape_html(s)) == escape_html(s)`.
/// The page loader escapes the value it takes from the address bar and the
/// generator escapes the input again, so a value read back from the address
/// bar renders exactly like the same value typed by hand.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.char_indices() {
        match c {
            '&' if ENTITIES.iter().any(|e| input[i..].starts_with(e)) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html("<script>alert('x' & \"y\")</script>"),
            "&lt;script&gt;alert(&#039;x&#039; &amp; &quot;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn plain_ids_unchanged() {
        assert_eq!(escape_html("76561197960287930"), "76561197960287930");
        assert_eq!(escape_html("gabe_newell-2"), "gabe_newell-2");
        assert_eq!(escape_html("ünïcödé"), "ünïcödé");
    }

    #[test]
    fn idempotent() {
        for s in ["<a>", "a & b", "&amp;", "&lt;&gt;", "'\"", "&#039;x", "&&"] {
            let once = escape_html(s);
            assert_eq!(escape_html(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn bare_ampersand_and_unknown_entities() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("&nbsp;"), "&amp;nbsp;");
        assert_eq!(escape_html("&#39;"), "&amp;#39;");
        assert_eq!(escape_html("&lt"), "&amp;lt");
    }
}
