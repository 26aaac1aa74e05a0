//! Text-level postprocessors run over the serialized document.
//!
//! Each pass is a pure function of the full text. They are not reorderable:
//! tables must be converted before the math pass escapes their dollar signs,
//! and the cleanup pass has to come last because it strips the markers the
//! other passes anchor on.

pub mod cleanup;
pub mod image;
pub mod math;
pub mod table;

use crate::error::{Result, Warning};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Postprocessor {
    Table,
    Math,
    Image,
    Cleanup,
}

impl Postprocessor {
    pub fn name(self) -> &'static str {
        match self {
            Postprocessor::Table => "table",
            Postprocessor::Math => "math",
            Postprocessor::Image => "image",
            Postprocessor::Cleanup => "cleanup",
        }
    }

    pub fn run(self, text: &str, warnings: &mut Vec<Warning>) -> Result<String> {
        match self {
            Postprocessor::Table => table::process_tables(text, warnings),
            Postprocessor::Math => Ok(math::convert(text)),
            Postprocessor::Image => image::process_images(text, warnings),
            Postprocessor::Cleanup => Ok(cleanup::convert(text)),
        }
    }
}

/// An ordered list of passes, built for one conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pipeline {
    passes: Vec<Postprocessor>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline {
            passes: vec![
                Postprocessor::Table,
                Postprocessor::Math,
                Postprocessor::Image,
                Postprocessor::Cleanup,
            ],
        }
    }
}

impl Pipeline {
    pub fn new(passes: Vec<Postprocessor>) -> Self {
        Pipeline { passes }
    }

    pub fn passes(&self) -> &[Postprocessor] {
        &self.passes
    }

    /// Feed the text through every pass in order. The first fatal error
    /// aborts the run.
    pub fn run(&self, text: &str, warnings: &mut Vec<Warning>) -> Result<String> {
        let mut out = text.to_string();
        for pass in &self.passes {
            out = pass.run(&out, warnings)?;
            debug!("after {} pass: {} bytes", pass.name(), out.len());
        }
        Ok(out)
    }
}
