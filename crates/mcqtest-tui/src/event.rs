//! Event sources feeding the shell loop.
//!
//! Keyboard input and the one-second ticker both send into the same channel;
//! the loop that drains it is the only code that touches session or display
//! state.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Everything the shell loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    Key(KeyEvent),
    Tick,
    Resize,
}

/// Forward terminal key and resize events until the receiver goes away.
pub fn spawn_input_reader(tx: UnboundedSender<ShellEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(event) = events.next().await {
            let mapped = match event {
                Ok(Event::Key(key)) => ShellEvent::Key(key),
                Ok(Event::Resize(..)) => ShellEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("terminal input error: {e}");
                    break;
                }
            };
            if tx.send(mapped).is_err() {
                break;
            }
        }
    })
}

/// Send [`ShellEvent::Tick`] every `period` until the receiver goes away.
pub fn spawn_ticker(tx: UnboundedSender<ShellEvent>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if tx.send(ShellEvent::Tick).is_err() {
                break;
            }
        }
    })
}

/// Aborts the wrapped tasks when dropped.
pub(crate) struct TaskGuard(pub(crate) Vec<JoinHandle<()>>);

impl Drop for TaskGuard {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn ticker_sends_one_tick_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_ticker(tx, Duration::from_secs(1));

        let start = tokio::time::Instant::now();
        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(ShellEvent::Tick));
        }
        // The first tick fires immediately.
        assert_eq!(start.elapsed(), Duration::from_secs(2));
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_stops_when_receiver_drops() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = spawn_ticker(tx, Duration::from_secs(1));
        drop(rx);
        tokio::time::advance(Duration::from_secs(2)).await;
        handle.await.unwrap();
    }
}
