//! retable CLI - table reconstruction from word dumps

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use retable::{
    extract_document_page, extract_document_tables, to_json, ExtractOptions, JsonFormat, Page,
};

#[derive(Parser)]
#[command(name = "retable")]
#[command(version)]
#[command(
    about = "Reconstruct tables from a JSON word dump",
    long_about = "Reads a JSON word dump (an array of pages, each with width, height and \
                  extracted words) and prints the reconstructed tables as a page-index to \
                  tables mapping."
)]
struct Cli {
    /// Input word-dump JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Process only this page (0-based index)
    #[arg(short, long, value_name = "N")]
    page: Option<usize>,

    /// Output compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Disable two-column page splitting
    #[arg(long)]
    no_split: bool,

    /// Process pages sequentially instead of in parallel
    #[arg(long)]
    sequential: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let Some(input) = &cli.input else {
        println!("require a word-dump JSON file; see --help for the expected format");
        return ExitCode::SUCCESS;
    };

    match run(input, &cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, cli: &Cli) -> retable::Result<String> {
    let data = fs::read_to_string(input)?;
    let pages: Vec<Page> = serde_json::from_str(&data)?;
    log::info!("loaded {} pages from {}", pages.len(), input.display());

    let mut options = ExtractOptions::default();
    if cli.no_split {
        options = options.single_column();
    }
    if cli.sequential {
        options = options.sequential();
    }

    let tables = match cli.page {
        Some(index) => extract_document_page(&pages, index, &options)?,
        None => extract_document_tables(&pages, &options),
    };

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    to_json(&tables, format)
}
