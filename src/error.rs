//! Errors and diagnostics produced while converting a document.

use thiserror::Error;

/// Fatal conversion errors.
///
/// Fragment errors abort the whole conversion: the converters never guess a
/// best-effort structure for markup that does not parse.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("malformed table fragment: {source}")]
    MalformedTable {
        #[source]
        source: roxmltree::Error,
    },

    #[error("malformed image tag `{fragment}`: {source}")]
    MalformedImage {
        fragment: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("template does not contain the `{}` marker", crate::template::MARKER)]
    TemplateMarkerMissing,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Non-fatal problems. The output is still produced, but it may not look the
/// way the author intended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// A cell declared `rowspan`; it is rendered as a single-row cell.
    RowspanIgnored { cell: String },
    /// A table was found inside another table.
    NestedTable,
    /// A `colspan` that is not a positive integer; treated as 1.
    InvalidColspan { value: String },
    /// A table fragment that does not sit on lines of its own.
    TableNotIsolated,
    /// An image sharing its line with text; it is left inline.
    ImageNotIsolated,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::RowspanIgnored { cell } => {
                write!(f, "rowspan is not supported, cell `{}` spans one row", cell)
            }
            Warning::NestedTable => f.write_str("nested tables are not supported"),
            Warning::InvalidColspan { value } => {
                write!(f, "invalid colspan `{}`, using 1", value)
            }
            Warning::TableNotIsolated => {
                f.write_str("table is not separated from surrounding text by blank lines")
            }
            Warning::ImageNotIsolated => {
                f.write_str("image shares its line with text and is not converted to a figure")
            }
        }
    }
}
