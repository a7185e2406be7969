//! Escaping of markup-significant characters in free-text fields.
//!
//! `escape_markup` runs on the write path before a value is persisted;
//! `unescape_markup` runs on the read path immediately before display.
//! Applying the pair consistently avoids double-encoding.

/// Replace the five markup-significant characters with named entities
/// in a single left-to-right pass.
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`escape_markup`]. Each entity is consumed once, so
/// `&amp;lt;` decodes to `&lt;` rather than `<`.
pub fn unescape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        if let Some(tail) = rest.strip_prefix("&amp;") {
            out.push('&');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("&lt;") {
            out.push('<');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("&gt;") {
            out.push('>');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("&quot;") {
            out.push('"');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("&#39;") {
            out.push('\'');
            rest = tail;
        } else {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markup_replaces_reserved_characters() {
        assert_eq!(
            escape_markup(r#"<b>"fish" & 'chips'</b>"#),
            "&lt;b&gt;&quot;fish&quot; &amp; &#39;chips&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_markup_leaves_plain_text_alone() {
        assert_eq!(escape_markup("slept 8 hours"), "slept 8 hours");
    }

    #[test]
    fn unescape_markup_round_trips() {
        let original = r#"mood < "great" & energy > 'low'"#;
        assert_eq!(unescape_markup(&escape_markup(original)), original);
    }

    #[test]
    fn unescape_markup_does_not_double_decode() {
        // "&amp;lt;" is an escaped "&lt;", not an escaped "<".
        assert_eq!(unescape_markup("&amp;lt;"), "&lt;");
    }

    #[test]
    fn unescape_markup_passes_bare_ampersands_through() {
        assert_eq!(unescape_markup("rock & roll"), "rock & roll");
        assert_eq!(unescape_markup("trailing &"), "trailing &");
    }
}
