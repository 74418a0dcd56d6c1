//! Escaping for text dropped into generated markup.

/// Escape text content.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a double- or single-quoted attribute.
pub fn attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;").replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(html_escape("Lamps & <Shades>"), "Lamps &amp; &lt;Shades&gt;");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn attributes_also_escape_quotes() {
        assert_eq!(attr_escape(r#"6" "Moon's""#), "6&quot; &quot;Moon&#39;s&quot;");
    }
}
