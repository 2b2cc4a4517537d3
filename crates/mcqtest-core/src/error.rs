//! Error types for mcqtest.
//!
//! Response errors are recoverable and never leave the session state machine.
//! Codec and config errors are fatal to the command that hit them.

use std::path::PathBuf;

use thiserror::Error;

/// A submitted answer was rejected. The session stays on the same question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Non-blank input that is not one of the valid options.
    #[error("invalid response '{0}', expected one of a, b, c, d, e")]
    Invalid(String),

    /// Blank input while recording an answer key.
    #[error("answer key entry cannot be blank")]
    EmptyKeyAnswer,
}

/// Failures reading or writing a results table.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file could not be opened, created, or flushed.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed.
    #[error("malformed record in {} at line {line}: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

impl CodecError {
    /// Returns the file this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CodecError::FileAccess { path, .. } | CodecError::MalformedRecord { path, .. } => path,
        }
    }
}

/// Invalid session parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("stop index {stop} is before start index {start}")]
    InvalidRange { start: u32, stop: u32 },
}
