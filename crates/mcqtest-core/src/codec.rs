//! CSV persistence for question records.
//!
//! Every table carries the same six-column header. The cumulative time column
//! is derived when writing and ignored when reading.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::CodecError;
use crate::model::{Correctness, QuestionRecord};

/// Header row shared by key, responses, and results files.
pub const HEADER: [&str; 6] = [
    "Question",
    "Response Time (s)",
    "Cumulative Time (s)",
    "Response",
    "Correct Answer",
    "Result",
];

/// One formatted table row, in [`HEADER`] order.
pub type TableRow = [String; 6];

/// Positional layout of a data row. Column 2 is read but discarded.
type RawRow = (u32, f64, String, String, String, String);

/// Running prefix sum of response times in storage order.
pub fn cumulative_times(records: &[QuestionRecord]) -> Vec<f64> {
    records
        .iter()
        .scan(0.0, |total, r| {
            *total += r.response_time_secs;
            Some(*total)
        })
        .collect()
}

/// Format records exactly as they are written to disk.
pub fn to_rows(records: &[QuestionRecord]) -> Vec<TableRow> {
    records
        .iter()
        .zip(cumulative_times(records))
        .map(|(r, cumulative)| {
            [
                r.question_number.to_string(),
                format!("{:.6}", r.response_time_secs),
                format!("{cumulative:.6}"),
                r.response.clone(),
                r.answer.clone(),
                r.correctness.map(|c| c.to_string()).unwrap_or_default(),
            ]
        })
        .collect()
}

/// Write `records` to `path`, replacing any existing file.
///
/// Returns the formatted rows so callers can display what was written.
pub fn save(path: &Path, records: &[QuestionRecord]) -> Result<Vec<TableRow>, CodecError> {
    let file = File::create(path).map_err(|source| CodecError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = write_to(file, records, path)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote results table");
    Ok(rows)
}

/// Write a header and one row per record to any writer.
///
/// `source` only labels errors.
pub fn write_to<W: io::Write>(
    writer: W,
    records: &[QuestionRecord],
    source: &Path,
) -> Result<Vec<TableRow>, CodecError> {
    let rows = to_rows(records);
    let mut writer = csv::Writer::from_writer(writer);

    writer
        .write_record(HEADER)
        .map_err(|e| csv_error(source, e))?;
    for row in &rows {
        writer.write_record(row).map_err(|e| csv_error(source, e))?;
    }
    writer.flush().map_err(|e| CodecError::FileAccess {
        path: source.to_path_buf(),
        source: e,
    })?;

    Ok(rows)
}

/// Read every record from `path`.
pub fn load(path: &Path) -> Result<Vec<QuestionRecord>, CodecError> {
    let file = File::open(path).map_err(|source| CodecError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(file, path)
}

/// Read the records of `path` whose question number lies in `[start, stop]`.
pub fn load_range(path: &Path, start: u32, stop: u32) -> Result<Vec<QuestionRecord>, CodecError> {
    let records = load(path)?;
    let total = records.len();
    let kept: Vec<QuestionRecord> = records
        .into_iter()
        .filter(|r| (start..=stop).contains(&r.question_number))
        .collect();
    if kept.len() < total {
        tracing::debug!(
            path = %path.display(),
            skipped = total - kept.len(),
            "ignored rows outside question range {start}..={stop}"
        );
    }
    Ok(kept)
}

/// Parse records from any reader, skipping the header row.
///
/// `source` only labels errors.
pub fn read_from<R: io::Read>(reader: R, source: &Path) -> Result<Vec<QuestionRecord>, CodecError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut raw = csv::StringRecord::new();
    while reader
        .read_record(&mut raw)
        .map_err(|e| csv_error(source, e))?
    {
        let line = raw.position().map_or(0, |p| p.line());
        let (question_number, response_time_secs, _cumulative, response, answer, result): RawRow =
            raw.deserialize(None)
                .map_err(|e| CodecError::MalformedRecord {
                    path: source.to_path_buf(),
                    line,
                    reason: e.to_string(),
                })?;

        let correctness = match result.as_str() {
            "" => None,
            other => Some(other.parse::<Correctness>().map_err(|reason| {
                CodecError::MalformedRecord {
                    path: source.to_path_buf(),
                    line,
                    reason,
                }
            })?),
        };

        records.push(QuestionRecord {
            question_number,
            answer,
            response,
            response_time_secs,
            correctness,
        });
    }

    Ok(records)
}

fn csv_error(path: &Path, err: csv::Error) -> CodecError {
    let line = err.position().map_or(0, |p| p.line());
    if !err.is_io_error() {
        return CodecError::MalformedRecord {
            path: path.to_path_buf(),
            line,
            reason: err.to_string(),
        };
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => CodecError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        other => CodecError::MalformedRecord {
            path: path.to_path_buf(),
            line,
            reason: format!("{other:?}"),
        },
    }
}
