//! mcqtest CLI: take a timed multiple-choice test, record a key, or grade.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mcqtest_core::config::load_config_from;
use mcqtest_core::files::SessionFiles;
use mcqtest_core::model::SessionConfig;

mod commands;

#[derive(Parser)]
#[command(name = "mcqtest", version, about = "Timed multiple-choice test runner")]
struct Cli {
    /// Start from question index
    #[arg(short = 's', long, alias = "startIdx")]
    start_idx: Option<u32>,

    /// Stop at question index
    #[arg(short = 'e', long, alias = "stopIdx")]
    stop_idx: Option<u32>,

    /// Duration of the test in minutes
    #[arg(short = 't', long)]
    dur: Option<u32>,

    /// Answer key mode: record the key instead of taking the test
    #[arg(short = 'k', long)]
    key: bool,

    /// Check responses against the answer key and exit
    #[arg(short = 'c', long, conflicts_with = "key")]
    check: bool,

    /// Print an existing results file and exit
    #[arg(long, conflicts_with_all = ["key", "check"])]
    show: bool,

    /// Output format for --check and --show
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Directory holding the key, responses, and results files
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here while the test screen is open
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Console rendering for graded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    fn interactive(&self) -> bool {
        !self.check && !self.show
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match init_tracing(cli.interactive(), cli.log_file.as_deref()) {
        Ok(()) => run(cli).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let defaults = load_config_from(cli.config.as_deref())?;

    let config = SessionConfig::new(
        cli.start_idx.unwrap_or(defaults.start_index),
        cli.stop_idx.unwrap_or(defaults.stop_index),
        cli.dur.unwrap_or(defaults.duration_minutes),
        cli.key,
        cli.check,
    )?;
    let files = SessionFiles::new(
        cli.dir.unwrap_or(defaults.output_dir),
        config.start_index,
        config.stop_index,
    );

    if cli.show {
        commands::show::execute(&files, cli.format)
    } else if config.check {
        commands::check::execute(&files, cli.format)
    } else {
        commands::take::execute(config, files).await
    }
}

/// Logs go to stderr, except while the shell owns the terminal: then they go
/// to `--log-file` or nowhere.
fn init_tracing(interactive: bool, log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcqtest=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (interactive, log_file) {
        (_, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (true, None) => builder.with_writer(std::io::sink).init(),
        (false, None) => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
