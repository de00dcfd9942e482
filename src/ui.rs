pub mod digits;
pub mod screen;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::{pager::Page, store::Snapshot};
use digits::{big_text, big_text_width, GLYPH_HEIGHT};
use screen::current_screen;

const FOOTER_HINT: &str = "←/→ swipe · space start/stop · q quit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub accent: Color,
}

impl Theme {
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        Self {
            accent: Color::Rgb(r, g, b),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_rgb(crate::config::DEFAULT_ACCENT_RGB)
    }
}

/// Draw the current page plus the footer.
pub fn draw(snapshot: &Snapshot, theme: &Theme, f: &mut Frame) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    current_screen(snapshot.page).render(snapshot, theme, f, chunks[0]);
    render_footer(snapshot.page, theme, f, chunks[1]);
}

fn render_footer(page: Page, theme: &Theme, f: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans: Vec<Span> = [Page::Clock, Page::FocusTimer]
        .iter()
        .map(|p| {
            if *p == page {
                Span::styled("● ", Style::default().fg(theme.accent))
            } else {
                Span::styled("○ ", dim)
            }
        })
        .collect();
    spans.push(Span::styled(format!("  {FOOTER_HINT}"), dim));

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Large readout of `text`, or a single bold line when the area is too small
/// for the block font.
pub(crate) fn readout(text: &str, color: Color, f: &mut Frame, area: Rect) {
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    if big_text_width(text) > area.width || GLYPH_HEIGHT > area.height {
        let line = Paragraph::new(Span::styled(text.to_string(), style))
            .alignment(Alignment::Center);
        f.render_widget(line, centered_rect(area.width, 1, area));
        return;
    }

    let rows: Vec<Line> = big_text(text)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect();
    f.render_widget(
        Paragraph::new(rows).alignment(Alignment::Center),
        centered_rect(area.width, GLYPH_HEIGHT, area),
    );
}

/// Rect of at most `width` x `height` centered inside `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
