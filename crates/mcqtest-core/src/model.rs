//! Core data model types for mcqtest.
//!
//! A session covers a contiguous question range and produces one
//! [`QuestionRecord`] per question, held in a [`RecordStore`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Response recorded when the test-taker submits a blank answer.
pub const NOT_ANSWERED: &str = "Not answered";

/// Grading verdict for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Correctness {
    Correct,
    Wrong,
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correctness::Correct => write!(f, "Correct"),
            Correctness::Wrong => write!(f, "Wrong"),
        }
    }
}

impl FromStr for Correctness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Correct" => Ok(Correctness::Correct),
            "Wrong" => Ok(Correctness::Wrong),
            other => Err(format!("unknown result: {other}")),
        }
    }
}

/// The outcome for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Absolute question index (not zero-based within the range).
    pub question_number: u32,
    /// Correct answer letter, filled in by grading.
    #[serde(default)]
    pub answer: String,
    /// Submitted letter, or [`NOT_ANSWERED`].
    #[serde(default)]
    pub response: String,
    /// Seconds since the previous question was advanced.
    #[serde(default)]
    pub response_time_secs: f64,
    /// Verdict, set only by grading.
    #[serde(default)]
    pub correctness: Option<Correctness>,
}

impl QuestionRecord {
    /// An unanswered record for the given question.
    pub fn blank(question_number: u32) -> Self {
        Self {
            question_number,
            answer: String::new(),
            response: String::new(),
            response_time_secs: 0.0,
            correctness: None,
        }
    }

    /// Whether the test-taker left this question blank.
    pub fn is_not_answered(&self) -> bool {
        self.response == NOT_ANSWERED
    }
}

/// Parameters of one invocation. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub start_index: u32,
    pub stop_index: u32,
    pub duration_minutes: u32,
    /// Record an answer key instead of taking a test.
    pub key_capture: bool,
    /// Grade existing files without starting the shell.
    pub check: bool,
}

impl SessionConfig {
    /// Build a config, rejecting ranges where `stop < start`.
    pub fn new(
        start_index: u32,
        stop_index: u32,
        duration_minutes: u32,
        key_capture: bool,
        check: bool,
    ) -> Result<Self, ConfigError> {
        if stop_index < start_index {
            return Err(ConfigError::InvalidRange {
                start: start_index,
                stop: stop_index,
            });
        }
        Ok(Self {
            start_index,
            stop_index,
            duration_minutes,
            key_capture,
            check,
        })
    }

    /// Number of questions in the range.
    pub fn question_count(&self) -> usize {
        (self.stop_index - self.start_index) as usize + 1
    }

    /// Total time budget.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_minutes) * 60)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_index: 1,
            stop_index: 10,
            duration_minutes: 10,
            key_capture: false,
            check: false,
        }
    }
}

/// Ordered per-question records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<QuestionRecord>,
}

impl RecordStore {
    /// One blank record per question in `[start, stop]`.
    pub fn for_range(start: u32, stop: u32) -> Self {
        Self {
            records: (start..=stop).map(QuestionRecord::blank).collect(),
        }
    }

    /// Wrap records loaded from a file, keeping their order.
    pub fn from_records(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut QuestionRecord> {
        self.records.get_mut(position)
    }

    /// First record with the given question number.
    pub fn find(&self, question_number: u32) -> Option<&QuestionRecord> {
        self.records
            .iter()
            .find(|r| r.question_number == question_number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<QuestionRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
