//! Markdown to LaTeX on top of pulldown-cmark.
//!
//! The Markdown is parsed into an element tree, the tree's text is rewritten
//! into LaTeX macros, the tree is serialized, and a fixed pipeline of text
//! passes converts what is left (tables, math, images, block tags).
//!
//! ```no_run
//! use pulldown_cmark_latex::{markdown_to_latex, Options};
//!
//! let out = markdown_to_latex("# Title\n\nSome *text*.", &Options::default())?;
//! println!("{}", out.latex);
//! # Ok::<(), pulldown_cmark_latex::ConvertError>(())
//! ```

pub mod ast;
pub mod error;
pub mod latex;
pub mod options;
pub mod post;
pub mod template;
pub mod text;

pub use ast::{Document, Element, Tag};
pub use error::{ConvertError, Result, Warning};
pub use options::Options;
pub use post::{Pipeline, Postprocessor};
pub use template::latex_to_document;
pub use text::Region;

/// Result of a successful conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub latex: String,
    /// Constructs that were converted but may not render as intended.
    pub warnings: Vec<Warning>,
}

/// Convert an already parsed element tree. The tree is consumed: the walker
/// rewrites it in place before it is serialized.
pub fn tree_to_latex(mut doc: Document) -> Result<Conversion> {
    latex::walk(&mut doc);
    let html = ast::document_to_html(&doc);
    let mut warnings = Vec::new();
    let latex = Pipeline::default().run(&html, &mut warnings)?;
    Ok(Conversion { latex, warnings })
}

/// Convert a Markdown document to a LaTeX body.
pub fn markdown_to_latex(input: &str, options: &Options) -> Result<Conversion> {
    let doc = ast::parse_markdown(input, options);
    log::debug!("parsed {} top-level block(s)", doc.blocks.len());
    tree_to_latex(doc)
}
