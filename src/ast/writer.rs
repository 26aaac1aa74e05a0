use crate::ast::element::{Document, Element, Tag};

fn escape_text(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            c => escape_text(c.encode_utf8(&mut [0u8; 4]), out),
        }
    }
}

/// Write one element (and its subtree) as XHTML. The element's own tail is
/// left to the caller.
pub fn write_element(out: &mut String, el: &Element) {
    if el.tag == Tag::Raw {
        out.push_str(el.text.trim_end_matches('\n'));
        return;
    }

    let name = el.tag.name();
    out.push('<');
    out.push_str(name);
    for (k, v) in &el.attrs {
        out.push(' ');
        out.push_str(k);
        out.push_str("=\"");
        escape_attr(v, out);
        out.push('"');
    }
    if el.tag.is_void() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    escape_text(&el.text, out);
    let has_block_children = el.children.iter().any(|c| c.tag.is_block());
    if has_block_children && el.text.trim().is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    for c in &el.children {
        write_element(out, c);
        if c.tag.is_block() {
            out.push('\n');
        }
        escape_text(&c.tail, out);
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Serialize the document, one top-level block per line.
pub fn document_to_html(doc: &Document) -> String {
    let mut out = String::new();
    for (i, b) in doc.blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_element(&mut out, b);
        escape_text(&b.tail, &mut out);
    }
    out
}
