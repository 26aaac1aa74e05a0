use crate::ast::{Document, Element, Tag};

/// Comment-framed `\maketitle`, appended after every `\title{...}`.
pub const MAKETITLE: &str = "\n% ----------------------------------------------------------------\n\\maketitle\n% ----------------------------------------------------------------\n";

/// What the walker does with an element's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    ListItem,
    Paragraph,
    Emphasis,
    Other,
}

impl Rule {
    fn of(tag: Tag) -> Self {
        match tag {
            Tag::H1 => Rule::Heading1,
            Tag::H2 => Rule::Heading2,
            Tag::H3 => Rule::Heading3,
            Tag::H4 => Rule::Heading4,
            Tag::Li => Rule::ListItem,
            Tag::P => Rule::Paragraph,
            Tag::Em => Rule::Emphasis,
            _ => Rule::Other,
        }
    }
}

/// Rewrite element text into inline LaTeX macros, bottom-up.
///
/// Only `text` is touched; no element is added, removed or moved.
pub fn walk(doc: &mut Document) {
    for el in &mut doc.blocks {
        walk_element(el);
    }
}

fn walk_element(el: &mut Element) {
    // children are rewritten before the parent looks at their tags
    for child in &mut el.children {
        walk_element(child);
    }

    match Rule::of(el.tag) {
        Rule::Heading1 => {
            el.text = format!("\n\\title{{{}}}\n{}", el.text, MAKETITLE);
        }
        Rule::Heading2 => el.text = format!("\n\\section{{{}}}\n", el.text),
        Rule::Heading3 => el.text = format!("\n\\subsection{{{}}}\n", el.text),
        Rule::Heading4 => el.text = format!("\n\\subsubsection{{{}}}\n", el.text),
        Rule::ListItem => el.text = format!("  \\item {}", el.text),
        Rule::Paragraph => {
            let has_inline_markup = el
                .children
                .iter()
                .any(|c| matches!(c.tag, Tag::Sup | Tag::Em));
            if !has_inline_markup {
                el.text.push('\n');
            }
        }
        Rule::Emphasis => el.text = format!("\\emph{{{}}}", el.text),
        Rule::Other => {}
    }
}
