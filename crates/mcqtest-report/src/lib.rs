//! mcqtest-report: Console tables and grade summaries.

pub mod summary;
pub mod table;

pub use summary::{GradeSummary, GradedReport};
pub use table::render_table;
