use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use super::screen::Screen;
use crate::app::App;
use crate::util::ratio;

pub struct DashboardScreen;

fn wpm_label(best: Option<u32>) -> String {
    best.map_or_else(|| "-".to_string(), |wpm| wpm.to_string())
}

impl Screen for DashboardScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let snapshot = app.snapshot();
        let goals = snapshot.goals;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // hero
                Constraint::Length(3), // mcq gauge
                Constraint::Length(3), // typing gauge
                Constraint::Length(3), // subjective gauge
                Constraint::Length(4), // figures
                Constraint::Min(0),    // shortcuts
            ])
            .split(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "Computer Operator Loksewa Prep Hub",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Snapshot • Today",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let gauges = [
            ("MCQ sets done", snapshot.mcq_sets, goals.mcq_sets, Color::Green),
            (
                "Typing minutes",
                snapshot.typing_minutes,
                goals.typing_minutes,
                Color::Blue,
            ),
            (
                "Subjective answers",
                snapshot.subjective_answers,
                goals.subjective_answers,
                Color::Magenta,
            ),
        ];
        for ((title, done, goal, color), chunk) in gauges.into_iter().zip(&chunks[1..4]) {
            Gauge::default()
                .block(Block::default().borders(Borders::ALL).title(title))
                .gauge_style(Style::default().fg(color))
                .ratio(ratio(done, goal))
                .label(format!("{done}/{goal}"))
                .render(*chunk, buf);
        }

        let figures = vec![
            Line::from(vec![
                Span::raw("Syllabus covered: "),
                Span::styled(
                    format!("{}%", snapshot.syllabus_progress),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   MCQ score: "),
                Span::styled(
                    format!("{} / {}", snapshot.mcq_score, snapshot.mcq_answered),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Best WPM: English {} / Nepali {}",
                wpm_label(snapshot.best_wpm_english),
                wpm_label(snapshot.best_wpm_nepali)
            )),
        ];
        Paragraph::new(figures)
            .block(Block::default().borders(Borders::TOP).title(" Progress "))
            .render(chunks[4], buf);

        let key = Style::default().fg(Color::Yellow);
        let shortcuts = [
            ("t", "Start a typing test"),
            ("m", "Practice MCQs"),
            ("s", "Review the syllabus"),
            ("n", "Write notes"),
        ]
        .into_iter()
        .map(|(k, label)| Line::from(vec![Span::styled(format!("({k}) "), key), Span::raw(label)]))
        .collect::<Vec<_>>();
        Paragraph::new(shortcuts)
            .block(Block::default().borders(Borders::TOP).title(" Quick actions "))
            .render(chunks[5], buf);
    }

    fn help(&self, _app: &App) -> &'static str {
        "(t)yping / (m)cq / (s)yllabus / (n)otes / (tab) next page / (esc) quit"
    }
}

#[cfg(test)]
mod tests {
    use crate::typing::{FinalMetrics, TypingSignal};
    use crate::texts::Language;
    use crate::ui::test_support::{app_with_text, render};

    #[test]
    fn test_dashboard_shows_goals() {
        let app = app_with_text("hello");
        let rendered = render(&app, 100, 40);
        assert!(rendered.contains("Computer Operator Loksewa Prep Hub"));
        assert!(rendered.contains("0/3"));
        assert!(rendered.contains("0/60"));
        assert!(rendered.contains("0/2"));
        assert!(rendered.contains("Syllabus covered: 0%"));
        assert!(rendered.contains("Best WPM: English - / Nepali -"));
    }

    #[test]
    fn test_dashboard_reflects_practice() {
        let mut app = app_with_text("hello");
        app.log.record_typing(
            Language::English,
            TypingSignal::Completed(FinalMetrics {
                wpm: 42,
                accuracy: 100,
            }),
        );
        let (section, topic) = app.syllabus.selected().unwrap();
        app.syllabus.toggle_completion(&section, &topic);
        let rendered = render(&app, 100, 40);
        assert!(rendered.contains("English 42"));
        assert!(rendered.contains("Syllabus covered: 10%"));
    }

    #[test]
    fn test_dashboard_lists_shortcuts() {
        let app = app_with_text("hello");
        let rendered = render(&app, 100, 40);
        assert!(rendered.contains("(m) Practice MCQs"));
        assert!(rendered.contains("(n) Write notes"));
    }
}
