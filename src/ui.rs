pub mod dashboard;
pub mod mcq;
pub mod notes;
pub mod screen;
pub mod syllabus;
pub mod typing;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
    Frame,
};

use crate::app::{App, Page};

const HORIZONTAL_MARGIN: u16 = 2;

pub fn draw(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(3), // navigation
                Constraint::Min(1),    // page
                Constraint::Length(1), // status
                Constraint::Length(1), // key legend
            ])
            .split(area);

        let tabs = Tabs::new(Page::ALL.iter().map(|p| p.to_string()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Loksewa Prep Hub "),
            )
            .select(self.page.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        tabs.render(chunks[0], buf);

        let screen = screen::current_screen(self.page);
        screen.render(self, chunks[1], buf);

        if let Some(status) = &self.status {
            Paragraph::new(Span::styled(
                status.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
            .render(chunks[2], buf);
        }

        Paragraph::new(Span::styled(
            screen.help(self),
            Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
        ))
        .render(chunks[3], buf);
    }
}

/// Rendered buffer as plain text, one string per row
#[cfg(test)]
pub(crate) fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area().width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}
