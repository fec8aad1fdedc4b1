//! HTML and attribute escaping.

/// Escapes text for HTML content and attribute values.
pub trait Escaper: Send + Sync {
    /// Escapes text placed between tags.
    fn escape_html(&self, value: &str) -> String;

    /// Escapes text placed inside a double-quoted attribute value.
    fn escape_attr(&self, value: &str) -> String {
        self.escape_html(value)
    }
}

/// The default escaper, replacing the five HTML special characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape_html(&self, value: &str) -> String {
        html_escape(value)
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_attr_escape_defaults_to_html() {
        let escaper = HtmlEscaper;
        assert_eq!(escaper.escape_attr("a\"b"), "a&quot;b");
        assert_eq!(escaper.escape_attr("&amp;"), "&amp;amp;");
    }
}
