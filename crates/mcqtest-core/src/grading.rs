//! Grading of recorded responses against an answer key.

use std::path::PathBuf;

use crate::codec::{self, TableRow};
use crate::error::CodecError;
use crate::files::SessionFiles;
use crate::model::{Correctness, RecordStore};

/// Grade `responses` against `key`, matching on question number.
///
/// The first key record with a matching number wins. A response with no key
/// entry comes back with no verdict and an empty answer; that is not an error.
pub fn grade(responses: &RecordStore, key: &RecordStore) -> RecordStore {
    let graded = responses
        .iter()
        .map(|response| {
            let mut graded = response.clone();
            match key.find(response.question_number) {
                Some(entry) => {
                    graded.correctness = Some(if response.response == entry.response {
                        Correctness::Correct
                    } else {
                        Correctness::Wrong
                    });
                    graded.answer = entry.response.clone();
                }
                None => {
                    tracing::debug!(
                        question = response.question_number,
                        "no key entry, leaving ungraded"
                    );
                    graded.correctness = None;
                    graded.answer.clear();
                }
            }
            graded
        })
        .collect();
    RecordStore::from_records(graded)
}

/// Output of a completed check run.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Graded records in response-file order.
    pub records: RecordStore,
    /// The rows written to the results file.
    pub rows: Vec<TableRow>,
    pub results_path: PathBuf,
}

/// Load the responses and key for the range, grade them, and write results.
pub fn check_responses(files: &SessionFiles) -> Result<CheckOutcome, CodecError> {
    let (start, stop) = (files.start_index(), files.stop_index());
    let responses = codec::load_range(&files.responses(), start, stop)?;
    let key = codec::load_range(&files.key(), start, stop)?;
    let (responses, key) = (
        RecordStore::from_records(responses),
        RecordStore::from_records(key),
    );
    tracing::info!(
        responses = responses.len(),
        key = key.len(),
        "grading questions {start}..={stop}"
    );

    let records = grade(&responses, &key);
    let results_path = files.results();
    let rows = codec::save(&results_path, records.records())?;

    Ok(CheckOutcome {
        records,
        rows,
        results_path,
    })
}
