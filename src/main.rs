//! `degree-normalizer` — label free-text degree descriptors with a canonical rank.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Load the descriptor table in full ([`table::load_descriptors`]).
//! 4. Label the batch in three passes ([`degree::pipeline`]).
//! 5. Export `original_str,regexp_str` ([`table::export_results`]).
//! 6. Render the requested report ([`report`]).

mod cli;
mod config;
mod degree;
mod error;
mod models;
mod report;
mod table;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::load_config;
use degree::dictionary::Dictionary;
use degree::pipeline::Pipeline;
use report::terminal::Summary;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let working_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&working_dir, cli.config.as_deref())?;
    let format = config.input_format(cli.delimiter)?;
    let output = cli.output.clone().unwrap_or_else(|| config.output.path.clone());
    let terminal = matches!(cli.report, ReportFormat::Terminal);

    // Nothing is classified or written until the whole input is in memory
    let descriptors = table::load_descriptors(&cli.input, &format)?;
    if terminal && !cli.quiet {
        eprintln!(
            "  {} loaded {} descriptors from {}",
            "→".cyan(),
            descriptors.len(),
            cli.input.display()
        );
    }

    let dictionary = Dictionary::with_aliases(config.aliases()?);
    let mut pipeline = Pipeline::with_dictionary(dictionary)?;
    let results = pipeline.run(descriptors)?;
    let discovered = pipeline.dictionary().discovered().len();
    debug!(learned = ?pipeline.dictionary().discovered(), "learned abbreviations");
    info!(
        results = results.len(),
        discovered,
        dictionary_size = pipeline.dictionary().len(),
        "batch labelled"
    );

    table::export_results(&output, &results)?;

    match cli.report {
        ReportFormat::Terminal => {
            let summary = Summary::new(&results, discovered);
            report::terminal::render(
                &results,
                &summary,
                &cli.input,
                &output,
                cli.verbose,
                cli.quiet,
            )?;
            if !cli.quiet {
                println!("{}", "Success".green().bold());
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
