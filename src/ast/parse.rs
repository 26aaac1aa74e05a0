use crate::ast::element::{Document, Element, Tag};
use crate::options::Options;
use pulldown_cmark::{Event, Parser, Tag as MdTag, TagEnd};
use regex::Regex;
use std::sync::LazyLock;

static MATH_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$[^$]*\$\$").expect("valid math span regex"));

/// Backslash-escape the ASCII punctuation inside every `$$...$$` span so
/// CommonMark escapes and emphasis leave the TeX source alone.
pub fn protect_math(input: &str) -> String {
    MATH_SPAN
        .replace_all(input, |caps: &regex::Captures| {
            let span = &caps[0];
            let inner = &span[2..span.len() - 2];
            let mut out = String::with_capacity(span.len() + inner.len() / 2);
            out.push_str("$$");
            for ch in inner.chars() {
                if ch.is_ascii_punctuation() {
                    out.push('\\');
                }
                out.push(ch);
            }
            out.push_str("$$");
            out
        })
        .into_owned()
}

/// Parse Markdown source into the element tree.
pub fn parse_markdown(input: &str, options: &Options) -> Document {
    let source = if options.protect_math {
        protect_math(input)
    } else {
        input.to_string()
    };
    let events: Vec<Event> = Parser::new_ext(&source, options.parser_options()).collect();
    parse_events_to_document(&events)
}

/// Fold a pulldown-cmark `Event` slice into a `Document`.
///
/// Each `Start` opens a frame holding the element under construction; the
/// matching `End` closes it and attaches the element to its parent (or to the
/// document when the stack is empty).
pub fn parse_events_to_document(events: &[Event<'_>]) -> Document {
    struct Frame {
        el: Element,
        // frames for tags outside the vocabulary splice their content into
        // the parent instead of producing an element
        transparent: bool,
    }

    fn attach(stack: &mut [Frame], doc: &mut Document, el: Element) {
        match stack.last_mut() {
            Some(parent) => parent.el.children.push(el),
            None => doc.blocks.push(el),
        }
    }

    fn push_text(stack: &mut [Frame], doc: &mut Document, s: &str) {
        if s.is_empty() {
            return;
        }
        match stack.last_mut() {
            Some(top) => top.el.push_text(s),
            None => doc.blocks.push(Element::with_text(Tag::P, s)),
        }
    }

    let mut stack: Vec<Frame> = Vec::new();
    let mut doc = Document::default();

    for ev in events {
        match ev {
            Event::Start(tag) => {
                let (el, transparent) = match tag {
                    MdTag::Paragraph => (Element::new(Tag::P), false),
                    MdTag::Heading { level, .. } => {
                        let t = match *level as usize {
                            1 => Tag::H1,
                            2 => Tag::H2,
                            3 => Tag::H3,
                            4 => Tag::H4,
                            5 => Tag::H5,
                            _ => Tag::H6,
                        };
                        (Element::new(t), false)
                    }
                    MdTag::BlockQuote(_) => (Element::new(Tag::Blockquote), false),
                    MdTag::CodeBlock(_) => (Element::new(Tag::Pre), false),
                    MdTag::HtmlBlock => (Element::new(Tag::Raw), false),
                    MdTag::List(None) => (Element::new(Tag::Ul), false),
                    // the start number is dropped: `enumerate` always counts from one
                    MdTag::List(Some(_)) => (Element::new(Tag::Ol), false),
                    MdTag::Item => (Element::new(Tag::Li), false),
                    MdTag::Table(_) => (Element::new(Tag::Table), false),
                    MdTag::TableHead => (Element::new(Tag::Thead), false),
                    MdTag::TableRow => (Element::new(Tag::Tr), false),
                    MdTag::TableCell => (Element::new(Tag::Td), false),
                    MdTag::Emphasis => (Element::new(Tag::Em), false),
                    MdTag::Strong => (Element::new(Tag::Strong), false),
                    MdTag::Strikethrough => (Element::new(Tag::Del), false),
                    MdTag::Superscript => (Element::new(Tag::Sup), false),
                    MdTag::Link {
                        dest_url, title, ..
                    } => {
                        let mut el = Element::new(Tag::A).attr("href", dest_url.to_string());
                        if !title.is_empty() {
                            el = el.attr("title", title.to_string());
                        }
                        (el, false)
                    }
                    MdTag::Image {
                        dest_url, title, ..
                    } => {
                        let mut el = Element::new(Tag::Img).attr("src", dest_url.to_string());
                        if !title.is_empty() {
                            el = el.attr("title", title.to_string());
                        }
                        (el, false)
                    }
                    _ => (Element::new(Tag::Raw), true),
                };
                stack.push(Frame { el, transparent });
            }
            Event::End(tagend) => {
                let Some(frame) = stack.pop() else {
                    continue;
                };
                let mut el = frame.el;
                if frame.transparent {
                    push_text(&mut stack, &mut doc, &el.text);
                    for c in el.children {
                        attach(&mut stack, &mut doc, c);
                    }
                    continue;
                }
                match tagend {
                    TagEnd::CodeBlock => {
                        let code = Element::with_text(Tag::Code, std::mem::take(&mut el.text));
                        el.children = vec![code];
                    }
                    TagEnd::Image => {
                        // alt text is the flattened content of the image
                        let alt = el.plain_text();
                        el.text.clear();
                        el.children.clear();
                        el.attrs.insert(1, ("alt".to_string(), alt));
                    }
                    TagEnd::TableCell => {
                        let in_head = stack
                            .iter()
                            .rev()
                            .take(2)
                            .any(|f| f.el.tag == Tag::Thead);
                        if in_head {
                            el.tag = Tag::Th;
                        }
                    }
                    TagEnd::TableHead => {
                        // header cells arrive without a row of their own
                        if el.children.iter().any(|c| c.tag != Tag::Tr) {
                            let mut tr = Element::new(Tag::Tr);
                            tr.children = std::mem::take(&mut el.children);
                            el.children = vec![tr];
                        }
                    }
                    TagEnd::Table => {
                        let mut head = Vec::new();
                        let mut body = Element::new(Tag::Tbody);
                        for c in std::mem::take(&mut el.children) {
                            match c.tag {
                                Tag::Tr => body.children.push(c),
                                _ => head.push(c),
                            }
                        }
                        el.children = head;
                        if !body.children.is_empty() {
                            el.children.push(body);
                        }
                    }
                    _ => {}
                }
                attach(&mut stack, &mut doc, el);
            }
            Event::Text(t) => push_text(&mut stack, &mut doc, t),
            Event::Code(t) => attach(
                &mut stack,
                &mut doc,
                Element::with_text(Tag::Code, t.to_string()),
            ),
            Event::Html(t) => {
                let in_html_block =
                    matches!(stack.last(), Some(top) if top.el.tag == Tag::Raw && !top.transparent);
                if in_html_block {
                    push_text(&mut stack, &mut doc, t);
                } else {
                    attach(&mut stack, &mut doc, Element::with_text(Tag::Raw, t.to_string()));
                }
            }
            Event::InlineHtml(t) => attach(
                &mut stack,
                &mut doc,
                Element::with_text(Tag::Raw, t.to_string()),
            ),
            Event::SoftBreak => push_text(&mut stack, &mut doc, "\n"),
            Event::HardBreak => attach(&mut stack, &mut doc, Element::new(Tag::Br)),
            Event::Rule => attach(&mut stack, &mut doc, Element::new(Tag::Hr)),
            Event::TaskListMarker(done) => {
                push_text(&mut stack, &mut doc, if *done { "[x] " } else { "[ ] " })
            }
            Event::FootnoteReference(label) => {
                push_text(&mut stack, &mut doc, &format!("[^{}]", label))
            }
            Event::InlineMath(t) => push_text(&mut stack, &mut doc, &format!("$${}$$", t)),
            Event::DisplayMath(t) => push_text(&mut stack, &mut doc, &format!("$${}$$", t)),
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Document {
        parse_markdown(s, &Options::default())
    }

    #[test]
    fn heading_and_paragraph_with_emphasis() {
        let doc = parse("# Title\n\nSome *text* in a paragraph.");
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].tag, Tag::H1);
        assert_eq!(doc.blocks[0].text, "Title");
        let p = &doc.blocks[1];
        assert_eq!(p.tag, Tag::P);
        assert_eq!(p.text, "Some ");
        assert_eq!(p.children[0].tag, Tag::Em);
        assert_eq!(p.children[0].text, "text");
        assert_eq!(p.children[0].tail, " in a paragraph.");
    }

    #[test]
    fn tight_list_items_hold_text() {
        let doc = parse("- one\n- two\n");
        let ul = &doc.blocks[0];
        assert_eq!(ul.tag, Tag::Ul);
        let items: Vec<&str> = ul.children.iter().map(|li| li.text.as_str()).collect();
        assert_eq!(items, vec!["one", "two"]);
    }

    #[test]
    fn ordered_list_start_is_not_kept() {
        let doc = parse("3. a\n4. b\n");
        let ol = &doc.blocks[0];
        assert_eq!(ol.tag, Tag::Ol);
        assert!(ol.attrs.is_empty());
        assert_eq!(ol.children.len(), 2);
    }

    #[test]
    fn image_alt_from_children() {
        let doc = parse("![a *plot*](fig.png)");
        let img = &doc.blocks[0].children[0];
        assert_eq!(img.tag, Tag::Img);
        assert_eq!(img.get_attr("src"), Some("fig.png"));
        assert_eq!(img.get_attr("alt"), Some("a plot"));
        assert!(img.children.is_empty());
    }

    #[test]
    fn gfm_table_gets_thead_and_tbody() {
        let doc = parse("| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n");
        let table = &doc.blocks[0];
        assert_eq!(table.tag, Tag::Table);
        let tags: Vec<Tag> = table.children.iter().map(|c| c.tag).collect();
        assert_eq!(tags, vec![Tag::Thead, Tag::Tbody]);
        let head_row = &table.children[0].children[0];
        assert_eq!(head_row.tag, Tag::Tr);
        assert!(head_row.children.iter().all(|c| c.tag == Tag::Th));
        assert_eq!(table.children[1].children.len(), 2);
        assert_eq!(table.children[1].children[0].children[0].tag, Tag::Td);
    }

    #[test]
    fn code_block_nests_code_in_pre() {
        let doc = parse("```\nlet x = 1;\n```\n");
        let pre = &doc.blocks[0];
        assert_eq!(pre.tag, Tag::Pre);
        assert_eq!(pre.children[0].tag, Tag::Code);
        assert_eq!(pre.children[0].text, "let x = 1;\n");
    }

    #[test]
    fn math_survives_markdown_escapes() {
        let doc = parse("$$\\frac{a*b}{c_1 * d_2}$$");
        assert_eq!(doc.blocks[0].text, "$$\\frac{a*b}{c_1 * d_2}$$");
        assert!(doc.blocks[0].children.is_empty());
    }

    #[test]
    fn protect_math_only_touches_spans() {
        assert_eq!(protect_math("a_b $$x_1$$ c_d"), "a_b $$x\\_1$$ c_d");
    }

    #[test]
    fn raw_html_block_is_kept() {
        let doc = parse("<table>\n<tr><td>x</td></tr>\n</table>\n");
        assert_eq!(doc.blocks[0].tag, Tag::Raw);
        assert!(doc.blocks[0].text.starts_with("<table>"));
    }
}
