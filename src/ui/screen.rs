use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{centered_rect, readout, Theme};
use crate::{pager::Page, store::Snapshot};

const DATE_COLUMN_WIDTH: u16 = 12;

/// A UI Screen boundary: one per page
pub trait Screen {
    fn render(&self, snapshot: &Snapshot, theme: &Theme, f: &mut Frame, area: Rect);
}

/// Hour and minute with weekday and date to the right
pub struct ClockScreen;

impl Screen for ClockScreen {
    fn render(&self, snapshot: &Snapshot, theme: &Theme, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(2)
            .constraints([Constraint::Min(0), Constraint::Length(DATE_COLUMN_WIDTH)])
            .split(area);

        let time = format!("{}:{}", snapshot.hour, snapshot.minute);
        readout(&time, theme.accent, f, chunks[0]);

        let date = Paragraph::new(vec![
            Line::from(Span::styled(
                snapshot.weekday.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                snapshot.day_month.clone(),
                Style::default().fg(Color::White),
            )),
        ])
        .alignment(Alignment::Right);
        f.render_widget(date, centered_rect(DATE_COLUMN_WIDTH, 2, chunks[1]));
    }
}

/// Title, running total and the start/stop button
pub struct FocusScreen;

impl Screen for FocusScreen {
    fn render(&self, snapshot: &Snapshot, theme: &Theme, f: &mut Frame, area: Rect) {
        let content = centered_rect(area.width, 13, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(2),
                Constraint::Length(5), // Total
                Constraint::Length(2),
                Constraint::Length(3), // Button
            ])
            .split(content);

        let title = Paragraph::new(Span::styled(
            "Focus Timer",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        readout(&snapshot.total_elapsed_formatted, theme.accent, f, chunks[2]);

        let label = snapshot.button_label();
        let button_color = if snapshot.running {
            Color::Red
        } else {
            Color::Green
        };
        let button = Paragraph::new(Span::styled(
            label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(button_color));
        f.render_widget(
            button,
            centered_rect(label.len() as u16 + 4, 3, chunks[4]),
        );
    }
}

pub fn current_screen(page: Page) -> Box<dyn Screen> {
    match page {
        Page::Clock => Box::new(ClockScreen),
        Page::FocusTimer => Box::new(FocusScreen),
    }
}
