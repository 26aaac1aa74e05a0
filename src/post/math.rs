//! Math delimiters and stray dollar/percent signs.
//!
//! `$$...$$` is the only math delimiter in the source. A span that fills a
//! line becomes display math, a span inside running text becomes inline math,
//! and a single `$` between two other characters is currency. The passes run
//! in a fixed order; each one sees the output of the previous.

use crate::latex::unescape;
use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// <p>$$ ... $$ closing its line
static PARAGRAPH_DISPLAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)<p>\$\$([^$]*)\$\$\s*$").expect("valid paragraph display regex")
});
// $$ ... $$ alone on its line
static LINE_DISPLAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\$\$([^$]*)\$\$\s*$").expect("valid line display regex")
});
// $100 million
static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^$])\$([^$])").expect("valid currency regex"));
// Jones, $$x=3$$, is ...
static INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$([^$]*)\$\$").expect("valid inline math regex"));
static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\?%(\s-)?").expect("valid percent regex"));
static LT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\lt([^A-Za-z]|$)").expect("valid lt regex"));
static DEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\del([^A-Za-z]|$)").expect("valid del regex"));

fn display(caps: &Captures) -> String {
    let text = unescape(&caps[1]);
    let trimmed = text.trim();
    if trimmed.starts_with("\\[") || trimmed.starts_with("\\begin") {
        text
    } else {
        format!("\\[{}\\]", text)
    }
}

fn inline(caps: &Captures) -> String {
    format!("${}$", unescape(&caps[1]))
}

/// Run the math passes over the whole document text.
pub fn convert(text: &str) -> String {
    let out = PARAGRAPH_DISPLAY.replace_all(text, display);
    let out = LINE_DISPLAY.replace_all(&out, display);
    let out = CURRENCY.replace_all(&out, |caps: &Captures| {
        format!("{}\\${}", &caps[1], &caps[2])
    });
    let out = INLINE.replace_all(&out, inline);
    // a `%` starting a `% ---` comment line, or already escaped, stays
    let out = PERCENT.replace_all(&out, |caps: &Captures| {
        if caps[0].starts_with('\\') || caps.get(1).is_some() {
            caps[0].to_string()
        } else {
            "\\%".to_string()
        }
    });

    // left over from ASCII-math style input
    let out = LT.replace_all(&out, "<${1}");
    let out = out.replace(" * ", " \\cdot ");
    let out = DEL.replace_all(&out, "\\partial${1}").into_owned();

    debug!("math pass: {} -> {} bytes", text.len(), out.len());
    out
}
