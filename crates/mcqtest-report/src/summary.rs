//! Score and timing statistics for a graded test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mcqtest_core::model::{Correctness, QuestionRecord};
use mcqtest_core::timer::format_min_sec;

/// Aggregate counts over graded records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    /// When the summary was computed.
    pub graded_at: DateTime<Utc>,
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    /// Questions left blank during the test.
    pub unanswered: usize,
    /// Questions with no key entry.
    pub ungraded: usize,
    /// `correct / total` as a percentage; zero for an empty test.
    pub score_pct: f64,
    pub total_time_secs: f64,
    pub avg_time_secs: f64,
}

impl GradeSummary {
    pub fn compute(records: &[QuestionRecord]) -> Self {
        let total = records.len();
        let count = |c: Correctness| records.iter().filter(|r| r.correctness == Some(c)).count();
        let correct = count(Correctness::Correct);
        let total_time_secs: f64 = records.iter().map(|r| r.response_time_secs).sum();

        Self {
            graded_at: Utc::now(),
            total,
            correct,
            wrong: count(Correctness::Wrong),
            unanswered: records.iter().filter(|r| r.is_not_answered()).count(),
            ungraded: records.iter().filter(|r| r.correctness.is_none()).count(),
            score_pct: if total == 0 {
                0.0
            } else {
                correct as f64 / total as f64 * 100.0
            },
            total_time_secs,
            avg_time_secs: if total == 0 {
                0.0
            } else {
                total_time_secs / total as f64
            },
        }
    }

    /// One-line text rendering.
    pub fn to_text(&self) -> String {
        format!(
            "Score: {}/{} correct ({:.1}%), {} wrong, {} unanswered, {} ungraded | total time {}, average {:.1}s",
            self.correct,
            self.total,
            self.score_pct,
            self.wrong,
            self.unanswered,
            self.ungraded,
            format_min_sec(self.total_time_secs.round() as i64),
            self.avg_time_secs
        )
    }
}

/// Graded records plus their summary, for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedReport {
    pub summary: GradeSummary,
    pub records: Vec<QuestionRecord>,
}

impl GradedReport {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self {
            summary: GradeSummary::compute(&records),
            records,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
