use crate::latex::remove_html_entities;

/// HTML block markers and the LaTeX they turn into, applied in order.
const BLOCK_REPLACEMENTS: [(&str, &str); 10] = [
    ("<ul>", "\\begin{itemize}"),
    ("</ul>", "\\end{itemize}\n"),
    ("<ol>", "\\begin{enumerate}"),
    ("</ol>", "\\end{enumerate}\n"),
    ("<sup>", "\\footnote{"),
    ("</sup>", "}"),
    ("<blockquote>", "\\begin{quotation}"),
    ("</blockquote>", "\\end{quotation}\n"),
    ("<pre><code>", "\\begin{verbatim}\n"),
    ("</code></pre>", "\\end{verbatim}\n"),
];

/// Turn the remaining HTML block tags into LaTeX environments.
pub fn fix_html_blocks(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in BLOCK_REPLACEMENTS {
        out = out.replace(from, to);
    }
    out
}

/// Final pass: block environments, then entity and tag removal.
pub fn convert(text: &str) -> String {
    remove_html_entities(&fix_html_blocks(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_become_environments() {
        assert_eq!(
            convert("<ul>\n<li>  \\item a</li>\n</ul>"),
            "\\begin{itemize}\n  \\item a\n\\end{itemize}\n"
        );
        assert_eq!(
            convert("<ol>\n<li>  \\item a</li>\n</ol>"),
            "\\begin{enumerate}\n  \\item a\n\\end{enumerate}\n"
        );
    }

    #[test]
    fn quotation_footnote_and_verbatim() {
        assert_eq!(
            convert("<blockquote>\n<p>q\n</p>\n</blockquote>"),
            "\\begin{quotation}\nq\n\n\\end{quotation}\n"
        );
        assert_eq!(convert("x<sup>note</sup>"), "x\\footnote{note}");
        assert_eq!(
            convert("<pre><code>a\n</code></pre>"),
            "\\begin{verbatim}\na\n\\end{verbatim}\n"
        );
    }

    // Known limitation: entities inside verbatim are translated like any
    // other text, so `&&` picks up LaTeX escapes.
    #[test]
    fn verbatim_entities_known_limitation() {
        assert_eq!(
            convert("<pre><code>a &amp;&amp; b\n</code></pre>"),
            "\\begin{verbatim}\na \\&\\& b\n\\end{verbatim}\n"
        );
    }
}
