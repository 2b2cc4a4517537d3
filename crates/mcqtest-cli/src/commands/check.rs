//! `mcqtest --check`: grade recorded responses against the answer key.

use anyhow::{Context, Result};

use mcqtest_core::files::SessionFiles;
use mcqtest_core::grading::check_responses;
use mcqtest_report::{render_table, GradeSummary, GradedReport};

use crate::OutputFormat;

pub fn execute(files: &SessionFiles, format: OutputFormat) -> Result<()> {
    let outcome = check_responses(files)
        .with_context(|| format!("failed to grade {}", files.prefix()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", GradedReport::new(outcome.records.into_records()).to_json()?);
        }
        OutputFormat::Table => {
            println!("{}", render_table(&outcome.rows));
            println!("{}", GradeSummary::compute(outcome.records.records()).to_text());
        }
    }
    eprintln!("Results saved to: {}", outcome.results_path.display());

    Ok(())
}
