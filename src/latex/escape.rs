//! LaTeX entity escaping.
//!
//! `{`, `}` and `$` are deliberately left alone: braces are written by hand
//! inside math, and dollar signs belong to the math postprocessor.

use regex::Regex;
use std::sync::LazyLock;

static START_SINGLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(^|\s|")'"#).expect("valid single quote regex"));
static START_DOUBLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(^|\s|'|`)""#).expect("valid double quote regex"));
static END_DOUBLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(,|\.|\s|$)"#).expect("valid closing quote regex"));

/// Inline and heading tags whose markers are dropped (content kept).
pub const STRIPPED_TAGS: [&str; 7] = ["h1", "h2", "h3", "h4", "p", "li", "em"];

/// Translate the HTML entities the serializer produces and drop the open and
/// close markers of [`STRIPPED_TAGS`].
///
/// `&gt;` maps to `<`, matching the output long-standing documents were
/// built against.
pub fn remove_html_entities(text: &str) -> String {
    let mut out = text
        .replace("&amp;", "\\&")
        .replace("&lt;", "<")
        .replace("&gt;", "<")
        .replace("&quot;", "\"");
    for tag in STRIPPED_TAGS {
        out = out
            .replace(&format!("<{}>", tag), "")
            .replace(&format!("</{}>", tag), "");
    }
    out
}

/// Escape LaTeX reserved characters and normalize quotation marks.
///
/// `%`, `&` and `#` are escaped in a single scan; one that is already
/// preceded by a backslash is kept as is, so escaping never doubles up.
pub fn escape(text: &str) -> String {
    let text = remove_html_entities(text);
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev = None;
    for ch in text.chars() {
        if matches!(ch, '%' | '&' | '#') && prev != Some('\\') {
            out.push('\\');
        }
        out.push(ch);
        prev = Some(ch);
    }
    let out = START_SINGLE_QUOTE.replace_all(&out, "${1}`");
    let out = START_DOUBLE_QUOTE.replace_all(&out, "${1}``");
    let out = END_DOUBLE_QUOTE.replace_all(&out, "''${1}");
    out.into_owned()
}

/// Revert the `&` escape. Only math content goes through this, right before
/// it is re-wrapped in math delimiters.
pub fn unescape(text: &str) -> String {
    text.replace("\\&", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape("50% of #1 & co"), "50\\% of \\#1 \\& co");
    }

    #[test]
    fn already_escaped_is_not_doubled() {
        assert_eq!(escape("\\% \\& \\#"), "\\% \\& \\#");
        assert_eq!(escape("a &amp; b"), "a \\& b");
    }

    #[test]
    fn braces_and_dollars_untouched() {
        assert_eq!(escape("{x} costs $5"), "{x} costs $5");
    }

    #[test]
    fn quotes_become_latex_quotes() {
        assert_eq!(escape("\"quoted\", she said"), "``quoted'', she said");
        assert_eq!(escape("a 'single' one"), "a `single' one");
        assert_eq!(escape("end \"here\""), "end ``here''");
    }

    #[test]
    fn entities_and_tags_removed() {
        assert_eq!(
            remove_html_entities("<p>&lt;x&gt; &quot;y&quot; <em>z</em></p>"),
            "<x< \"y\" z"
        );
        assert_eq!(remove_html_entities("<strong>k</strong>"), "<strong>k</strong>");
    }

    #[test]
    fn unescape_only_reverts_ampersand() {
        assert_eq!(unescape("a \\& b \\% c"), "a & b \\% c");
    }
}
