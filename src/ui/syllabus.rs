use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use super::screen::Screen;
use crate::app::App;

pub struct SyllabusScreen;

impl Screen for SyllabusScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let syllabus = &app.syllabus;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Overall progress "))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(syllabus.overall_progress().min(100) as u16)
            .render(chunks[0], buf);

        let mut lines = Vec::new();
        let mut cursor_line = 0;
        let mut topic_index = 0;
        for section in syllabus.sections() {
            lines.push(Line::from(vec![
                Span::styled(
                    section.title.as_str(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", section.badge),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    format!(
                        "  {}/{} topics, {}%",
                        section.completed_topics(),
                        section.topics.len(),
                        section.progress()
                    ),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));

            for topic in &section.topics {
                let is_cursor = topic_index == syllabus.cursor();
                if is_cursor {
                    cursor_line = lines.len();
                }
                let mut style = if topic.completed {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                if is_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let check = if topic.completed { "[x]" } else { "[ ]" };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {check} {}", topic.title), style),
                    Span::styled(
                        format!(" ({} subtopics)", topic.subtopics.len()),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ]));

                if syllabus.is_expanded(&topic.id) {
                    lines.extend(
                        topic
                            .subtopics
                            .iter()
                            .map(|sub| Line::from(format!("      • {sub}"))),
                    );
                }
                topic_index += 1;
            }
            lines.push(Line::from(""));
        }

        let list_area = chunks[1];
        let visible_rows = list_area.height.saturating_sub(2) as usize;
        // keep the cursor on screen
        let offset = (cursor_line + 1).saturating_sub(visible_rows);
        Paragraph::new(lines)
            .scroll((offset.min(u16::MAX as usize) as u16, 0))
            .block(Block::default().borders(Borders::ALL).title(" Syllabus "))
            .render(list_area, buf);
    }

    fn help(&self, _app: &App) -> &'static str {
        "(↑/↓) move / (space) mark done / (enter) subtopics / (tab) next page / (esc) quit"
    }
}
