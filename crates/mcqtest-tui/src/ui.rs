//! Pane layout and rendering.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::ShellState;

/// Question across the top; log and input on the left; timer on the right.
pub fn draw(frame: &mut Frame, shell: &ShellState) {
    let [question_area, body] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(frame.area());
    let [left, timer_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    let [log_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(left);

    frame.render_widget(
        Paragraph::new(shell.question_text.as_str())
            .block(pane(&shell.question_title))
            .wrap(Wrap { trim: true }),
        question_area,
    );

    frame.render_widget(
        Paragraph::new(tail(&shell.log, log_area)).block(pane("Responses")),
        log_area,
    );

    frame.render_widget(
        Paragraph::new(shell.input.as_str()).block(pane("Type Here")),
        input_area,
    );
    frame.set_cursor_position(input_cursor(input_area, shell.input.chars().count()));

    let timer_style = if shell.overtime {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(
            shell
                .timer_lines
                .iter()
                .map(|l| Line::from(l.as_str()))
                .collect::<Vec<_>>(),
        )
        .style(timer_style)
        .block(pane("Timer")),
        timer_area,
    );
}

fn pane(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Cursor just after the typed text, clamped inside the input box border.
fn input_cursor(area: Rect, typed: usize) -> Position {
    let offset = u16::try_from(typed).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2));
    Position::new(x, area.y.saturating_add(1))
}

/// The most recent log lines that fit inside a bordered pane.
fn tail(log: &[String], area: Rect) -> Vec<Line<'_>> {
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = log.len().saturating_sub(visible);
    log[skip..].iter().map(|l| Line::from(l.as_str())).collect()
}
