use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::screen::Screen;
use crate::app::App;
use crate::scoring::Outcome;
use crate::typing::TypingState;

pub struct TypingScreen;

impl Screen for TypingScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let session = &app.typing;
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // stats
                Constraint::Length(1), // language + target
                Constraint::Min(3),    // reference text
                Constraint::Length(5), // input
            ])
            .split(area);

        let metrics = session.metrics();
        let stats = [
            ("Time Left", format!("{}s", session.seconds_remaining())),
            ("WPM", metrics.wpm.to_string()),
            ("Accuracy", format!("{}%", metrics.accuracy)),
            (
                "Correct",
                format!("{}/{}", metrics.correct_chars, metrics.total_chars),
            ),
        ];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[0]);
        for ((label, value), cell) in stats.into_iter().zip(cells.iter()) {
            Paragraph::new(Span::styled(value, bold_style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(label))
                .render(*cell, buf);
        }

        let language = session.language();
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} Typing", language.native_name()),
                Style::default().fg(Color::Cyan).patch(bold_style),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Target: {} WPM", language.target_wpm()),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]))
        .render(chunks[1], buf);

        let input_len = session.input().chars().count();
        let spans: Vec<Span> = session
            .outcomes()
            .into_iter()
            .enumerate()
            .map(|(idx, (expected, outcome))| {
                let style = match outcome {
                    Outcome::Correct => Style::default().fg(Color::Green),
                    Outcome::Incorrect => Style::default().fg(Color::Red).bg(Color::Rgb(60, 0, 0)),
                    Outcome::Pending if idx == input_len && session.is_running() => Style::default()
                        .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                    Outcome::Pending => Style::default().add_modifier(Modifier::DIM),
                };
                Span::styled(expected.to_string(), style)
            })
            .collect();

        let inner_width = chunks[2].width.saturating_sub(2) as usize;
        let reference = Paragraph::new(Line::from(spans))
            .alignment(if session.reference().width() <= inner_width {
                // short texts sit in the middle
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Text "));
        reference.render(chunks[2], buf);

        let (content, style) = match session.state() {
            TypingState::Running if session.input().is_empty() => (
                "Start typing...".to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ),
            TypingState::Running => (session.input().to_string(), Style::default()),
            TypingState::Expired => (
                "Time is up. Press r to reset.".to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ),
            _ => (
                "Press Enter to begin".to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        };
        Paragraph::new(Span::styled(content, style))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Your input "))
            .render(chunks[3], buf);
    }

    fn help(&self, app: &App) -> &'static str {
        if app.typing.is_running() {
            "(ctrl-p) pause / (ctrl-r) reset / (tab) next page / (esc) quit"
        } else {
            "(enter) start / (r)eset / (l)anguage / (tab) next page / (esc) quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::Page;
    use crate::ui::test_support::{app_with_text, render};

    #[test]
    fn test_idle_typing_page() {
        let mut app = app_with_text("the quick brown fox");
        app.page = Page::Typing;
        let rendered = render(&app, 100, 30);
        assert!(rendered.contains("60s"));
        assert!(rendered.contains("Target: 40 WPM"));
        assert!(rendered.contains("the quick brown fox"));
        assert!(rendered.contains("Press Enter to begin"));
        assert!(rendered.contains("100%"));
        assert!(rendered.contains("(l)anguage"));
        assert!(rendered.contains("English Typing"));
    }

    #[test]
    fn test_nepali_language_label() {
        let mut app = app_with_text("नमस्ते");
        app.page = Page::Typing;
        app.typing.reset(crate::texts::Language::Nepali);
        let rendered = render(&app, 100, 30);
        assert!(rendered.contains("Target: 25 WPM"));
        assert!(rendered.contains(" Typing"));
        assert!(!rendered.contains("English Typing"));
    }

    #[test]
    fn test_running_typing_page_shows_input() {
        let mut app = app_with_text("the quick brown fox");
        app.page = Page::Typing;
        app.typing.start();
        app.typing.submit_input("the quack");
        let rendered = render(&app, 100, 30);
        assert!(rendered.contains("the quack"));
        assert!(rendered.contains("8/9"));
        assert!(rendered.contains("(ctrl-p) pause"));
    }

    #[test]
    fn test_narrow_typing_page_wraps() {
        let mut app = app_with_text(&"word ".repeat(200));
        app.page = Page::Typing;
        let rendered = render(&app, 30, 20);
        assert!(!rendered.trim().is_empty());
    }
}
