//! `layered-metrics` command line.
//!
//! Loads a run configuration, fetches and scores every document on the
//! worklist and writes the metrics table. Exit code 1 when the run cannot start or the
//! table cannot be written; skipped documents do not change the exit code.

use clap::Parser;
use layered_metrics::MetricsTableDisplay;
use layered_metrics_batch::{run_batch, BatchConfig, BatchResult, SourceKind};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Readability and sentiment metrics for a batch of documents
#[derive(Parser)]
#[command(name = "layered-metrics")]
#[command(version)]
#[command(about = "Readability and sentiment metrics for a batch of documents")]
struct Cli {
    /// TOML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worklist CSV (overrides the config)
    #[arg(long)]
    worklist: Option<PathBuf>,

    /// Output table, `.xlsx` or CSV (overrides the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where document text comes from (overrides the config)
    #[arg(long, value_enum)]
    source: Option<SourceKind>,

    /// Directory of pre-extracted `<URL_ID>.txt` files (overrides the config)
    #[arg(long)]
    text_dir: Option<PathBuf>,

    /// Do not keep copies of article text
    #[arg(long)]
    no_articles: bool,

    /// Print the scored rows as a table
    #[arg(long)]
    show: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> BatchResult<()> {
    let mut config = match &cli.config {
        Some(path) => BatchConfig::load(path)?,
        None => BatchConfig::default(),
    };
    if let Some(worklist) = cli.worklist {
        config.worklist = worklist;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(text_dir) = cli.text_dir {
        config.text_dir = text_dir;
    }
    if cli.no_articles {
        config.persist_articles = false;
    }

    let report = run_batch(&config)?;

    if cli.show {
        let mut display = MetricsTableDisplay::new(&report.rows);
        display
            .include("WORD COUNT")
            .include("POLARITY SCORE")
            .include("SUBJECTIVITY SCORE")
            .include("FOG INDEX");
        println!("{}", display);
    }

    println!(
        "Processed {} documents: {} scored, {} skipped. Results saved to {}.",
        report.processed(),
        report.rows.len(),
        report.skipped.len(),
        config.output.display()
    );
    Ok(())
}
