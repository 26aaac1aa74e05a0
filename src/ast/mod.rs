//! The element tree the Markdown parser produces, and its XHTML form.

pub mod element;
pub mod parse;
pub mod writer;

pub use element::{Document, Element, Tag};
pub use parse::{parse_events_to_document, parse_markdown, protect_math};
pub use writer::document_to_html;
