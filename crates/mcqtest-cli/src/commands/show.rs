//! `mcqtest --show`: print a results file written by an earlier check.

use anyhow::{Context, Result};

use mcqtest_core::codec;
use mcqtest_core::files::SessionFiles;
use mcqtest_report::{render_table, GradeSummary, GradedReport};

use crate::OutputFormat;

pub fn execute(files: &SessionFiles, format: OutputFormat) -> Result<()> {
    let path = files.results();
    let records = codec::load(&path).with_context(|| {
        format!(
            "no results for {} (run with --check first)",
            files.prefix()
        )
    })?;

    match format {
        OutputFormat::Json => println!("{}", GradedReport::new(records).to_json()?),
        OutputFormat::Table => {
            println!("{}", render_table(&codec::to_rows(&records)));
            println!("{}", GradeSummary::compute(&records).to_text());
        }
    }

    Ok(())
}
