//! Display state for the four shell panes.
//!
//! Kept separate from rendering so key handling and session updates can be
//! tested without a terminal.

use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use mcqtest_core::error::ResponseError;
use mcqtest_core::session::{Advance, Session};

/// What a key press asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    None,
    Submit,
    Quit,
}

/// Contents of the question, response log, input, and timer panes.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub question_title: String,
    pub question_text: String,
    pub log: Vec<String>,
    pub input: String,
    pub timer_lines: Vec<String>,
    pub overtime: bool,
    /// Set once the finished table has been written.
    pub saved_to: Option<PathBuf>,
}

impl ShellState {
    pub fn new(session: &Session) -> Self {
        Self {
            question_title: "Questions".to_string(),
            question_text: session.prompt(),
            ..Default::default()
        }
    }

    /// Translate a key press. Editing keys update the input buffer directly.
    pub fn on_key(&mut self, key: KeyEvent) -> ShellAction {
        if key.kind != KeyEventKind::Press {
            return ShellAction::None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ShellAction::Quit
            }
            KeyCode::Char('q') => ShellAction::Quit,
            KeyCode::Enter => ShellAction::Submit,
            KeyCode::Backspace => {
                self.input.pop();
                ShellAction::None
            }
            KeyCode::Esc => {
                self.input.clear();
                ShellAction::None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                ShellAction::None
            }
            _ => ShellAction::None,
        }
    }

    /// Take the input buffer, leaving the box empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Reflect the outcome of an advance event.
    pub fn apply(&mut self, advance: &Advance, session: &Session) {
        match advance {
            Advance::Started { .. } => {
                self.question_title = "Question".to_string();
            }
            Advance::Rejected(ResponseError::Invalid(_)) => {
                self.log.push("Invalid Response".to_string());
            }
            Advance::Rejected(ResponseError::EmptyKeyAnswer) => {
                self.log.push("Answer Key answer cannot be blank".to_string());
            }
            Advance::Recorded { entry, .. } => {
                self.log.push(entry.to_string());
            }
            Advance::Completed { entry, path } => {
                self.log.push(entry.to_string());
                self.log.push("Test Complete: Press q to exit".to_string());
                self.question_title = "Test complete".to_string();
                self.saved_to = Some(path.clone());
            }
            Advance::Ignored => {}
        }
        self.question_text = session.prompt();
    }

    /// Recompute the timer pane. Does nothing before the session starts.
    pub fn refresh_timer(&mut self, session: &Session, now: Instant) {
        if let Some(reading) = session.timer_reading(now) {
            self.timer_lines = reading.lines();
            self.overtime = reading.is_overtime();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcqtest_core::files::SessionFiles;
    use mcqtest_core::model::SessionConfig;
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn submit(shell: &mut ShellState, session: &mut Session, typed: &str, now: Instant) {
        for c in typed.chars() {
            assert_eq!(shell.on_key(press(KeyCode::Char(c))), ShellAction::None);
        }
        assert_eq!(shell.on_key(press(KeyCode::Enter)), ShellAction::Submit);
        let input = shell.take_input();
        let advance = session.advance(&input, now).unwrap();
        shell.apply(&advance, session);
    }

    fn session(dir: &std::path::Path, stop: u32, key_capture: bool) -> Session {
        let config = SessionConfig::new(1, stop, 1, key_capture, false).unwrap();
        Session::new(config, SessionFiles::new(dir, 1, stop))
    }

    #[test]
    fn editing_keys() {
        let mut shell = ShellState::default();
        shell.on_key(press(KeyCode::Char('a')));
        shell.on_key(press(KeyCode::Char('b')));
        shell.on_key(press(KeyCode::Backspace));
        assert_eq!(shell.input, "a");
        shell.on_key(press(KeyCode::Esc));
        assert_eq!(shell.input, "");
    }

    #[test]
    fn quit_keys() {
        let mut shell = ShellState::default();
        assert_eq!(shell.on_key(press(KeyCode::Char('q'))), ShellAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(shell.on_key(ctrl_c), ShellAction::Quit);
        assert_eq!(shell.input, "");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut shell = ShellState::default();
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(shell.on_key(release), ShellAction::None);
    }

    #[test]
    fn full_test_updates_panes() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), 2, false);
        let mut shell = ShellState::new(&s);
        let t0 = Instant::now();
        assert_eq!(shell.question_text, "Press Enter to start the test");

        shell.refresh_timer(&s, t0);
        assert!(shell.timer_lines.is_empty());

        submit(&mut shell, &mut s, "", t0);
        assert_eq!(shell.question_text, "This is question 1");

        submit(&mut shell, &mut s, "z", t0 + Duration::from_secs(1));
        assert_eq!(shell.log.last().unwrap(), "Invalid Response");
        assert_eq!(shell.input, "");

        submit(&mut shell, &mut s, "b", t0 + Duration::from_secs(2));
        assert_eq!(shell.log.last().unwrap(), "Question 1  Answer: b  Resp Time: 2.000000");
        assert_eq!(shell.question_text, "This is question 2");

        shell.refresh_timer(&s, t0 + Duration::from_secs(5));
        assert_eq!(shell.timer_lines[0], "Time spent on this question: 0m 03s");
        assert_eq!(shell.timer_lines[1], "Total time remaining: 0m 55s");

        submit(&mut shell, &mut s, "", t0 + Duration::from_secs(6));
        assert_eq!(shell.question_title, "Test complete");
        assert_eq!(shell.log.last().unwrap(), "Test Complete: Press q to exit");
        assert_eq!(shell.saved_to.as_deref(), Some(s.files().responses().as_path()));
    }

    #[test]
    fn key_capture_shows_blank_error_and_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path(), 1, true);
        let mut shell = ShellState::new(&s);
        let t0 = Instant::now();

        submit(&mut shell, &mut s, "", t0);
        submit(&mut shell, &mut s, "", t0);
        assert_eq!(shell.log, vec!["Answer Key answer cannot be blank".to_string()]);

        shell.refresh_timer(&s, t0 + Duration::from_secs(3));
        assert_eq!(shell.timer_lines, vec!["Answer Key Mode".to_string()]);
        assert!(!shell.overtime);
    }
}
