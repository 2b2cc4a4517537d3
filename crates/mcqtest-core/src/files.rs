//! File names derived from the question range.

use std::path::{Path, PathBuf};

/// Locations of the key, responses, and results tables for one range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFiles {
    dir: PathBuf,
    start_index: u32,
    stop_index: u32,
}

impl SessionFiles {
    pub fn new(dir: impl Into<PathBuf>, start_index: u32, stop_index: u32) -> Self {
        Self {
            dir: dir.into(),
            start_index,
            stop_index,
        }
    }

    /// Common prefix, e.g. `Q_Start_1_End_10`.
    pub fn prefix(&self) -> String {
        format!("Q_Start_{}_End_{}", self.start_index, self.stop_index)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    pub fn stop_index(&self) -> u32 {
        self.stop_index
    }

    pub fn key(&self) -> PathBuf {
        self.file("key")
    }

    pub fn responses(&self) -> PathBuf {
        self.file("responses")
    }

    pub fn results(&self) -> PathBuf {
        self.file("results")
    }

    /// Where a finished session is written.
    pub fn session_output(&self, key_capture: bool) -> PathBuf {
        if key_capture {
            self.key()
        } else {
            self.responses()
        }
    }

    fn file(&self, kind: &str) -> PathBuf {
        self.dir.join(format!("{}_{kind}.csv", self.prefix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_names() {
        let files = SessionFiles::new("data", 1, 10);
        assert_eq!(files.prefix(), "Q_Start_1_End_10");
        assert_eq!(files.key(), Path::new("data/Q_Start_1_End_10_key.csv"));
        assert_eq!(
            files.responses(),
            Path::new("data/Q_Start_1_End_10_responses.csv")
        );
        assert_eq!(
            files.results(),
            Path::new("data/Q_Start_1_End_10_results.csv")
        );
    }

    #[test]
    fn session_output_depends_on_mode() {
        let files = SessionFiles::new(".", 4, 6);
        assert_eq!(files.session_output(true), files.key());
        assert_eq!(files.session_output(false), files.responses());
    }
}
