//! Elapsed and remaining time shown by the ticker.
//!
//! The budget is advisory: a negative remaining time is displayed but never
//! ends the session.

use std::time::{Duration, Instant};

/// Period of the display refresh.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Timestamps captured when the session starts and on every accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    pub start_time: Instant,
    pub last_answer_time: Instant,
}

impl SessionClock {
    pub fn started_at(now: Instant) -> Self {
        Self {
            start_time: now,
            last_answer_time: now,
        }
    }

    /// Time spent on the current question.
    pub fn on_question(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_answer_time)
    }

    /// Time since the test started.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_time)
    }
}

/// What the timer pane shows on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerReading {
    /// Timing is not shown while recording a key.
    KeyCapture,
    Running {
        on_question_secs: u64,
        /// Seconds left in the budget; negative once it is exceeded.
        remaining_secs: i64,
    },
}

impl TimerReading {
    pub fn compute(clock: &SessionClock, budget: Duration, key_capture: bool, now: Instant) -> Self {
        if key_capture {
            return TimerReading::KeyCapture;
        }
        let budget_secs = i64::try_from(budget.as_secs()).unwrap_or(i64::MAX);
        let elapsed_secs = i64::try_from(clock.elapsed(now).as_secs()).unwrap_or(i64::MAX);
        TimerReading::Running {
            on_question_secs: clock.on_question(now).as_secs(),
            remaining_secs: budget_secs.saturating_sub(elapsed_secs),
        }
    }

    /// Display lines for the timer pane.
    pub fn lines(&self) -> Vec<String> {
        match *self {
            TimerReading::KeyCapture => vec!["Answer Key Mode".to_string()],
            TimerReading::Running {
                on_question_secs,
                remaining_secs,
            } => vec![
                format!(
                    "Time spent on this question: {}",
                    format_min_sec(i64::try_from(on_question_secs).unwrap_or(i64::MAX))
                ),
                format!("Total time remaining: {}", format_min_sec(remaining_secs)),
            ],
        }
    }

    pub fn is_overtime(&self) -> bool {
        matches!(self, TimerReading::Running { remaining_secs, .. } if *remaining_secs < 0)
    }
}

/// Format seconds as `{m}m {ss}s`, with a leading `-` for negative values.
pub fn format_min_sec(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs = secs.unsigned_abs();
    format!("{sign}{}m {:02}s", abs / 60, abs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_min_sec(0), "0m 00s");
        assert_eq!(format_min_sec(59), "0m 59s");
        assert_eq!(format_min_sec(600), "10m 00s");
        assert_eq!(format_min_sec(125), "2m 05s");
        assert_eq!(format_min_sec(-5), "-0m 05s");
        assert_eq!(format_min_sec(-61), "-1m 01s");
    }

    #[test]
    fn reading_tracks_question_and_budget() {
        let t0 = Instant::now();
        let mut clock = SessionClock::started_at(t0);
        clock.last_answer_time = t0 + Duration::from_secs(40);

        let reading = TimerReading::compute(
            &clock,
            Duration::from_secs(60),
            false,
            t0 + Duration::from_secs(45),
        );
        assert_eq!(
            reading,
            TimerReading::Running {
                on_question_secs: 5,
                remaining_secs: 15
            }
        );
        assert_eq!(
            reading.lines(),
            vec![
                "Time spent on this question: 0m 05s".to_string(),
                "Total time remaining: 0m 15s".to_string(),
            ]
        );
    }

    #[test]
    fn overtime_goes_negative() {
        let t0 = Instant::now();
        let clock = SessionClock::started_at(t0);
        let reading = TimerReading::compute(
            &clock,
            Duration::from_secs(60),
            false,
            t0 + Duration::from_secs(90),
        );
        assert!(reading.is_overtime());
        assert_eq!(reading.lines()[1], "Total time remaining: -0m 30s");
    }

    #[test]
    fn key_capture_hides_timing() {
        let t0 = Instant::now();
        let clock = SessionClock::started_at(t0);
        let reading = TimerReading::compute(&clock, Duration::ZERO, true, t0);
        assert_eq!(reading, TimerReading::KeyCapture);
        assert_eq!(reading.lines(), vec!["Answer Key Mode".to_string()]);
        assert!(!reading.is_overtime());
    }
}
