/// Tag vocabulary of the element tree.
///
/// This is the closed set of elements the Markdown parser produces. Tags the
/// LaTeX walker has no rule for fall through to the text-level passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Li,
    Em,
    Strong,
    Del,
    Sup,
    Ul,
    Ol,
    Blockquote,
    Pre,
    Code,
    A,
    Img,
    Hr,
    Br,
    Table,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
    /// Markup passed through verbatim (raw HTML in the Markdown source).
    Raw,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::P => "p",
            Tag::Li => "li",
            Tag::Em => "em",
            Tag::Strong => "strong",
            Tag::Del => "del",
            Tag::Sup => "sup",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Blockquote => "blockquote",
            Tag::Pre => "pre",
            Tag::Code => "code",
            Tag::A => "a",
            Tag::Img => "img",
            Tag::Hr => "hr",
            Tag::Br => "br",
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Raw => "",
        }
    }

    /// Block elements are written on a line of their own.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Tag::H1
                | Tag::H2
                | Tag::H3
                | Tag::H4
                | Tag::H5
                | Tag::H6
                | Tag::P
                | Tag::Li
                | Tag::Ul
                | Tag::Ol
                | Tag::Blockquote
                | Tag::Pre
                | Tag::Hr
                | Tag::Table
                | Tag::Thead
                | Tag::Tbody
                | Tag::Tr
                | Tag::Th
                | Tag::Td
        )
    }

    pub fn is_void(self) -> bool {
        matches!(self, Tag::Img | Tag::Hr | Tag::Br)
    }
}

/// A node of the element tree.
///
/// Text follows the etree model: `text` is the content before the first
/// child, and each child's `tail` is the content between it and the next
/// sibling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
    pub tail: String,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Element {
            tag,
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            tail: String::new(),
        }
    }

    pub fn with_text(tag: Tag, text: impl Into<String>) -> Self {
        let mut el = Element::new(tag);
        el.text = text.into();
        el
    }

    /// Builder-style child append.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append text at the current end of this element: into `text` when
    /// there are no children yet, otherwise into the last child's tail.
    pub fn push_text(&mut self, s: &str) {
        match self.children.last_mut() {
            Some(last) => last.tail.push_str(s),
            None => self.text.push_str(s),
        }
    }

    /// Concatenated text of this element and all its descendants, tails of
    /// descendants included but not this element's own tail.
    pub fn plain_text(&self) -> String {
        let mut out = self.text.clone();
        for c in &self.children {
            out.push_str(&c.plain_text());
            out.push_str(&c.tail);
        }
        out
    }
}

/// The parsed document: the ordered top-level blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Element>,
}
