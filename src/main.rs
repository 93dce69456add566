//! Anki-Connect action extractor.
//!
//! Loader → extractor → emitter, in one pass:
//!   1. read the markdown document
//!   2. split it at level-4 code-span headings and pull out each action's fields
//!   3. write the delimited listing and its `_index.json` sibling

mod emit;
mod error;
mod loader;
mod parser;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "anki_actions",
    version,
    about = "Split API action documentation into delimited records and a JSON index"
)]
struct Cli {
    /// Markdown document to read
    input_file: PathBuf,
    /// Delimited text output; the index is written next to it as <stem>_index.json
    output_file: PathBuf,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", Cli::command().render_usage());
            process::exit(1);
        }
    };

    run(&cli.input_file, &cli.output_file)
}

fn run(input: &Path, output: &Path) -> Result<()> {
    let markdown = loader::load_document(input)?;
    let actions = parser::extract_actions(&markdown);
    let outputs = emit::write_outputs(&actions, output)?;
    info!(
        actions = actions.len(),
        text = %outputs.text.display(),
        index = %outputs.index.display(),
        "done"
    );
    Ok(())
}
