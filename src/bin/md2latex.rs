//! md2latex - convert a Markdown file to LaTeX

use clap::Parser;
use log::info;
use pulldown_cmark_latex::{ConvertError, Options, latex_to_document, markdown_to_latex};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "md2latex")]
#[command(version)]
#[command(about = "Convert a Markdown document to LaTeX", long_about = None)]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// LaTeX template; the body replaces INSERT-TEXT-HERE
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not parse GFM pipe tables
    #[arg(long)]
    no_tables: bool,

    /// Let Markdown escapes and emphasis apply inside $$...$$
    #[arg(long)]
    no_protect_math: bool,
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let input = fs::read_to_string(&cli.input)?;
    let options = Options {
        tables: !cli.no_tables,
        protect_math: !cli.no_protect_math,
        ..Options::default()
    };

    let conversion = markdown_to_latex(&input, &options)?;
    if !conversion.warnings.is_empty() {
        info!(
            "{}: converted with {} warning(s)",
            cli.input.display(),
            conversion.warnings.len()
        );
    }

    let out = match &cli.template {
        Some(path) => latex_to_document(&conversion.latex, &fs::read_to_string(path)?)?,
        None => conversion.latex,
    };

    match &cli.output {
        Some(path) => fs::write(path, out)?,
        None => println!("{}", out),
    }
    Ok(())
}

fn main() {
    let _ = {
        use log::LevelFilter::*;
        env_logger::builder()
            .filter_module("md2latex", Info)
            .filter_module("pulldown_cmark_latex", Info)
            .parse_default_env()
            .try_init()
    };

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("md2latex: {}", e);
        std::process::exit(1);
    }
}
