//! Test session state machine.
//!
//! A session moves `NotStarted -> AwaitingResponse(start) -> ... -> Complete`.
//! The first advance only starts the clock; each later advance consumes the
//! input buffer for the current question. The finished record store is
//! written exactly once, on the advance that moves past the last question.
//!
//! Time is passed in by the caller so sessions can be driven with simulated
//! instants.

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use crate::codec;
use crate::error::{CodecError, ResponseError};
use crate::files::SessionFiles;
use crate::model::{RecordStore, SessionConfig, NOT_ANSWERED};
use crate::timer::{SessionClock, TimerReading};
use crate::validator::validate_response;

/// Where the session is in its question range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    AwaitingResponse(u32),
    Complete,
}

/// Summary of one accepted answer, shown in the response log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub question_number: u32,
    pub response: String,
    pub response_time_secs: f64,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Question {}  Answer: {}  Resp Time: {:.6}",
            self.question_number, self.response, self.response_time_secs
        )
    }
}

/// Result of one advance event.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// The clock started; the first question is now shown.
    Started { question: u32 },
    /// The input was rejected; the session stays on the same question.
    Rejected(ResponseError),
    /// An answer was stored and the next question is shown.
    Recorded { entry: LogEntry, next_question: u32 },
    /// The last answer was stored and the table was written to `path`.
    Completed { entry: LogEntry, path: PathBuf },
    /// The session is already complete.
    Ignored,
}

/// A single test or key-capture session.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    files: SessionFiles,
    store: RecordStore,
    state: SessionState,
    clock: Option<SessionClock>,
}

impl Session {
    pub fn new(config: SessionConfig, files: SessionFiles) -> Self {
        let store = RecordStore::for_range(config.start_index, config.stop_index);
        Self {
            config,
            files,
            store,
            state: SessionState::NotStarted,
            clock: None,
        }
    }

    pub fn files(&self) -> &SessionFiles {
        &self.files
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    /// Text for the question pane.
    pub fn prompt(&self) -> String {
        match self.state {
            SessionState::NotStarted => "Press Enter to start the test".to_string(),
            SessionState::AwaitingResponse(i) => format!("This is question {i}"),
            SessionState::Complete => "You have completed the test.".to_string(),
        }
    }

    /// Timer pane contents, once the session has started.
    pub fn timer_reading(&self, now: Instant) -> Option<TimerReading> {
        self.clock.as_ref().map(|clock| {
            TimerReading::compute(clock, self.config.duration(), self.config.key_capture, now)
        })
    }

    /// Handle a submit with the given input buffer.
    ///
    /// Rejected input is reported through [`Advance::Rejected`]; only a failure
    /// to write the finished table is an error.
    pub fn advance(&mut self, input: &str, now: Instant) -> Result<Advance, CodecError> {
        let question = match self.state {
            SessionState::NotStarted => {
                let first = self.config.start_index;
                self.clock = Some(SessionClock::started_at(now));
                self.state = SessionState::AwaitingResponse(first);
                tracing::info!(
                    start = first,
                    stop = self.config.stop_index,
                    questions = self.config.question_count(),
                    key_capture = self.config.key_capture,
                    "session started"
                );
                return Ok(Advance::Started { question: first });
            }
            SessionState::Complete => return Ok(Advance::Ignored),
            SessionState::AwaitingResponse(i) => i,
        };

        let response_time_secs = self
            .clock
            .map_or(0.0, |clock| clock.on_question(now).as_secs_f64());

        let response = match self.accept_input(input.trim()) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(question, "rejected input: {err}");
                return Ok(Advance::Rejected(err));
            }
        };

        let position = (question - self.config.start_index) as usize;
        if let Some(record) = self.store.get_mut(position) {
            record.question_number = question;
            record.response = response.clone();
            record.response_time_secs = response_time_secs;
        }
        if let Some(clock) = self.clock.as_mut() {
            clock.last_answer_time = now;
        }
        tracing::debug!(question, %response, response_time_secs, "answer recorded");

        let entry = LogEntry {
            question_number: question,
            response,
            response_time_secs,
        };

        if question >= self.config.stop_index {
            self.state = SessionState::Complete;
            let path = self.files.session_output(self.config.key_capture);
            codec::save(&path, self.store.records())?;
            tracing::info!(path = %path.display(), "session complete");
            return Ok(Advance::Completed { entry, path });
        }

        let next_question = question + 1;
        self.state = SessionState::AwaitingResponse(next_question);
        Ok(Advance::Recorded {
            entry,
            next_question,
        })
    }

    fn accept_input(&self, trimmed: &str) -> Result<String, ResponseError> {
        if trimmed.is_empty() {
            if self.config.key_capture {
                return Err(ResponseError::EmptyKeyAnswer);
            }
            return Ok(NOT_ANSWERED.to_string());
        }
        validate_response(trimmed)?;
        Ok(trimmed.to_string())
    }
}
