/// Conversion settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Parse GFM pipe tables.
    pub tables: bool,
    /// Parse `~~strikethrough~~`.
    pub strikethrough: bool,
    /// Shield `$$...$$` spans from Markdown escapes and emphasis.
    pub protect_math: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            tables: true,
            strikethrough: true,
            protect_math: true,
        }
    }
}

impl Options {
    /// The pulldown-cmark extensions these settings turn on. Math and
    /// footnote syntax are never enabled: dollar signs belong to the math
    /// postprocessor.
    pub fn parser_options(&self) -> pulldown_cmark::Options {
        let mut opts = pulldown_cmark::Options::empty();
        if self.tables {
            opts.insert(pulldown_cmark::Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            opts.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parser_options() {
        let opts = Options::default().parser_options();
        assert!(opts.contains(pulldown_cmark::Options::ENABLE_TABLES));
        assert!(!opts.contains(pulldown_cmark::Options::ENABLE_MATH));
        assert!(!opts.contains(pulldown_cmark::Options::ENABLE_FOOTNOTES));
    }

    #[test]
    fn tables_can_be_disabled() {
        let opts = Options {
            tables: false,
            ..Options::default()
        }
        .parser_options();
        assert!(!opts.contains(pulldown_cmark::Options::ENABLE_TABLES));
    }
}
