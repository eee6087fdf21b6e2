//! Admin notice markup.

/// Opening wrapper for an error notice.
pub const NOTICE_OPEN: &str = r#"<div class="notice notice-error">"#;

/// Closing wrapper for an error notice.
pub const NOTICE_CLOSE: &str = "</div>";

/// Escape text for inclusion in HTML element content or attributes.
///
/// Well-formed entity references such as `&amp;` or `&#8211;` are left
/// alone, so already-escaped text is not encoded twice.
pub fn esc_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        match c {
            '&' if is_entity_reference(&s[i + 1..]) => out.push('&'),
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

/// Whether `rest` (the text after an `&`) opens a named, decimal or hex
/// character reference terminated by `;`.
fn is_entity_reference(rest: &str) -> bool {
    let Some(end) = rest.find(';') else {
        return false;
    };
    let body = &rest[..end];

    if let Some(num) = body.strip_prefix('#') {
        if let Some(hex) = num.strip_prefix(|c: char| c == 'x' || c == 'X') {
            return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
        }
        return !num.is_empty() && num.chars().all(|c| c.is_ascii_digit());
    }

    let mut chars = body.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// One notice line for an unmet requirement.
pub fn failure_line(name: &str, message: &str) -> String {
    format!(
        "<p>{} deactivated: {}</p>",
        esc_html(name),
        esc_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(esc_html("Some Plugin"), "Some Plugin");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(
            esc_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn existing_entities_are_not_double_encoded() {
        assert_eq!(esc_html("Tom &amp; Jerry"), "Tom &amp; Jerry");
        assert_eq!(esc_html("&#039;quoted&#x27;"), "&#039;quoted&#x27;");
        assert_eq!(esc_html("&copy; 2017"), "&copy; 2017");
    }

    #[test]
    fn malformed_entities_are_escaped() {
        assert_eq!(esc_html("AT&T"), "AT&amp;T");
        assert_eq!(esc_html("a & b; c"), "a &amp; b; c");
        assert_eq!(esc_html("&#;"), "&amp;#;");
        assert_eq!(esc_html("&#xZZ;"), "&amp;#xZZ;");
        assert_eq!(esc_html("trailing &"), "trailing &amp;");
    }

    #[test]
    fn failure_line_format() {
        assert_eq!(
            failure_line("Some Plugin", "The NotReal class is required but missing"),
            "<p>Some Plugin deactivated: The NotReal class is required but missing</p>"
        );
    }

    #[test]
    fn failure_line_escapes_both_parts() {
        assert_eq!(
            failure_line("A&B", "<script>"),
            "<p>A&amp;B deactivated: &lt;script&gt;</p>"
        );
    }
}
