//! Attribute escaping for generated markup

use std::borrow::Cow;

/// Escape a value for use inside a double-quoted SVG/HTML attribute
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_are_borrowed() {
        assert!(matches!(escape_attribute("opacity: 0.5;"), Cow::Borrowed(_)));
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(
            escape_attribute(r#"a"b<c>d&e"#),
            "a&quot;b&lt;c&gt;d&amp;e"
        );
    }
}
