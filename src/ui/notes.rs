use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::screen::Screen;
use crate::app::{App, FormField, NoteForm};

pub struct NotesScreen;

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn render_form(form: &NoteForm, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    Paragraph::new(form.draft.title.as_str())
        .block(field_block(" Title ", form.field == FormField::Title))
        .render(chunks[0], buf);
    Paragraph::new(form.draft.content.as_str())
        .wrap(Wrap { trim: false })
        .block(field_block(" Content ", form.field == FormField::Content))
        .render(chunks[1], buf);
    Paragraph::new(format!("< {} >", form.draft.category))
        .block(field_block(" Category ", form.field == FormField::Category))
        .render(chunks[2], buf);
}

impl Screen for NotesScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        if let Some(form) = &app.note_form {
            render_form(form, area, buf);
            return;
        }

        let notes = &app.notes;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        Paragraph::new(Line::from(vec![
            Span::raw("Category: "),
            Span::styled(
                format!("< {} >", notes.filter().label()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(chunks[0], buf);

        let visible = notes.visible();
        if visible.is_empty() {
            Paragraph::new(Span::styled(
                "No notes yet. Press a to write one.",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .block(Block::default().borders(Borders::ALL))
            .render(chunks[1], buf);
            return;
        }

        let mut lines = Vec::new();
        let mut cursor_line = 0;
        for (idx, note) in visible.iter().enumerate() {
            let is_cursor = idx == notes.cursor();
            if is_cursor {
                cursor_line = lines.len();
            }
            let title_style = if is_cursor {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::styled(note.title.as_str(), title_style),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", note.category),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    format!("  {}", note.created_at.format("%Y-%m-%d %H:%M")),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
            if notes.is_expanded(note.id) {
                lines.extend(
                    note.content
                        .lines()
                        .map(|l| Line::from(format!("    {l}"))),
                );
            }
            lines.push(Line::from(""));
        }

        let visible_rows = chunks[1].height.saturating_sub(2) as usize;
        let offset = (cursor_line + 1).saturating_sub(visible_rows);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset.min(u16::MAX as usize) as u16, 0))
            .block(Block::default().borders(Borders::ALL).title(" Notes "))
            .render(chunks[1], buf);
    }

    fn help(&self, app: &App) -> &'static str {
        if app.note_form.is_some() {
            "(ctrl-s) save / (↑/↓) field / (←/→) category / (esc) cancel"
        } else {
            "(a)dd / (d)elete / (enter) open / (←/→) category / (tab) next page / (esc) quit"
        }
    }
}
