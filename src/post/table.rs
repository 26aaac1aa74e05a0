//! HTML table fragments to LaTeX `table`/`tabular` blocks.
//!
//! Every fragment is parsed on its own as strict XML. The column count is
//! inferred from the widest row (colspans included); `rowspan` is not
//! supported and only produces a warning.

use crate::error::{ConvertError, Result, Warning};
use crate::latex::escape;
use crate::text::Region;
use log::{debug, warn};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static TABLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?table\b[^>]*>").expect("valid table tag regex"));

/// Byte ranges of the outermost `<table>...</table>` fragments. A nested
/// table stays inside its enclosing fragment; a table that is never closed
/// is left in the text untouched.
fn table_fragments(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for m in TABLE_TAG.find_iter(text) {
        if m.as_str().starts_with("</") {
            match depth {
                0 => {}
                1 => {
                    ranges.push(start..m.end());
                    depth = 0;
                }
                _ => depth -= 1,
            }
        } else {
            if depth == 0 {
                start = m.start();
            }
            depth += 1;
        }
    }
    ranges
}

fn is_cell(node: roxmltree::Node) -> bool {
    node.is_element() && matches!(node.tag_name().name(), "td" | "th")
}

/// Escaped text of a node and its descendants. Whitespace-only pieces are
/// dropped.
fn node_text(node: roxmltree::Node) -> String {
    if node.is_text() {
        return escape(node.text().unwrap_or(""));
    }
    let mut out = String::new();
    for child in node.children() {
        let t = node_text(child);
        if !t.trim().is_empty() {
            out.push_str(&t);
        }
    }
    out
}

/// Converts one table fragment at a time. The column counters only live for
/// the duration of a single [`TableConverter::convert`] call.
#[derive(Debug, Default)]
pub struct TableConverter {
    numcols: usize,
    maxcols: usize,
    warnings: Vec<Warning>,
}

impl TableConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column count inferred for the last converted table.
    pub fn columns(&self) -> usize {
        self.maxcols
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    fn warn(&mut self, w: Warning) {
        warn!("{}", w);
        self.warnings.push(w);
    }

    /// `|c|c|...|`, one centered column per inferred column.
    fn column_spec(&self) -> String {
        let mut spec = "|c".repeat(self.maxcols);
        spec.push('|');
        spec
    }

    fn process_cell(&mut self, cell: roxmltree::Node) -> String {
        let mut content = node_text(cell);
        if cell.tag_name().name() == "th" {
            content = format!("\\textbf{{{}}}", content);
        }
        if cell.attribute("rowspan").is_some() {
            self.warn(Warning::RowspanIgnored {
                cell: content.clone(),
            });
        }

        let (colspan, mut buf) = match cell.attribute("colspan") {
            Some(value) => {
                let n = match value.trim().parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        self.warn(Warning::InvalidColspan {
                            value: value.to_string(),
                        });
                        1
                    }
                };
                (n, format!(" \\multicolumn{{{}}}{{|c|}}{{{}}}", n, content))
            }
            None => (1, format!(" {}", content)),
        };

        let not_last = cell.next_siblings().skip(1).any(is_cell);
        if not_last {
            buf.push_str(" &");
        }
        self.numcols += colspan;
        buf
    }

    fn to_latex(&mut self, node: roxmltree::Node) -> String {
        if !node.is_element() {
            return String::new();
        }
        if is_cell(node) {
            return self.process_cell(node);
        }

        let mut sub = String::new();
        for child in node.children() {
            let t = self.to_latex(child);
            if !t.trim().is_empty() {
                sub.push_str(&t);
            }
        }
        let sub = sub.trim();

        match node.tag_name().name() {
            "thead" => format!("{}\n", sub),
            "tr" => {
                self.maxcols = self.maxcols.max(self.numcols);
                self.numcols = 0;
                format!("\n\\hline\n{} \\\\", sub)
            }
            _ => sub.to_string(),
        }
    }

    /// Convert a fragment holding exactly one `<table>` element.
    pub fn convert(&mut self, fragment: &str) -> Result<String> {
        self.numcols = 0;
        self.maxcols = 0;

        let doc = roxmltree::Document::parse(fragment)
            .map_err(|source| ConvertError::MalformedTable { source })?;
        let root = doc.root_element();
        if root
            .descendants()
            .skip(1)
            .any(|n| n.has_tag_name("table"))
        {
            self.warn(Warning::NestedTable);
        }

        let core = self.to_latex(root);
        let caption = root
            .descendants()
            .skip(1)
            .find(|n| n.has_tag_name("caption"))
            .map(node_text)
            .unwrap_or_default();

        let mut block = Region::from_str(&core);
        block
            .push_back_line("\\hline")
            .wrap_environment("tabular", Some(&self.column_spec()))
            .push_back_line("\\\\[5pt]")
            .push_back_line(format!("\\caption{{{}}}", caption))
            .wrap_environment("table", None);
        debug!("converted table with {} columns", self.maxcols);
        Ok(block.apply())
    }
}

/// Convert a single table fragment.
pub fn convert(fragment: &str) -> Result<String> {
    TableConverter::new().convert(fragment)
}

/// Replace every `<table>...</table>` fragment in the document text.
pub fn process_tables(text: &str, warnings: &mut Vec<Warning>) -> Result<String> {
    let mut converter = TableConverter::new();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0usize;

    for range in table_fragments(text) {
        let isolated = (range.start == 0 || text[..range.start].ends_with('\n'))
            && (range.end == text.len() || text[range.end..].starts_with('\n'));
        if !isolated {
            warn!("{}", Warning::TableNotIsolated);
            warnings.push(Warning::TableNotIsolated);
        }

        let latex = converter.convert(&text[range.clone()])?;
        warnings.extend(converter.take_warnings());
        out.push_str(&text[last..range.start]);
        out.push('\n');
        out.push_str(latex.trim());
        out.push('\n');
        last = range.end;
        count += 1;
    }
    out.push_str(&text[last..]);

    debug!("table pass converted {} fragment(s)", count);
    Ok(out)
}
