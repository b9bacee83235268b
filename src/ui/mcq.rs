use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget, Wrap},
};

use super::screen::Screen;
use crate::app::App;
use crate::mcq::{OptionState, OPTION_COUNT};

pub struct McqScreen;

const OPTION_LETTERS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

fn option_style(state: OptionState) -> Style {
    match state {
        OptionState::Plain => Style::default(),
        OptionState::Selected => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        OptionState::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        OptionState::Incorrect => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}

impl Screen for McqScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let mcq = &app.mcq;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // filters
                Constraint::Length(1), // score
                Constraint::Min(1),    // question
            ])
            .split(area);

        let filters = mcq.bank().filters();
        let selected = filters.iter().position(|f| f == mcq.filter()).unwrap_or(0);
        Tabs::new(filters.iter().map(|f| f.label().to_string()))
            .block(Block::default().borders(Borders::ALL).title(" Topic "))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            format!("Score: {} / {}", mcq.score(), mcq.answered_count()),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(chunks[1], buf);

        let Some(question) = mcq.current() else {
            Paragraph::new(Span::styled(
                "No questions available for this topic.",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .block(Block::default().borders(Borders::ALL))
            .render(chunks[2], buf);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("Question {} of {}", mcq.position() + 1, mcq.visible_len()),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", question.topic),
                    Style::default().fg(Color::Magenta),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                question.prompt.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(question.options.iter().enumerate().map(|(idx, option)| {
            let state = mcq.option_state(idx);
            let marker = match state {
                OptionState::Correct => " ✓",
                OptionState::Incorrect => " ✗",
                _ => "",
            };
            Line::from(Span::styled(
                format!("  {}. {}{}", OPTION_LETTERS[idx], option, marker),
                option_style(state),
            ))
        }));

        if mcq.revealed() {
            lines.push(Line::from(""));
            let feedback = if mcq.selected() == Some(question.correct) {
                Span::styled("Correct!", Style::default().fg(Color::Green))
            } else {
                Span::styled(
                    format!(
                        "The answer is {}. {}",
                        OPTION_LETTERS[question.correct], question.options[question.correct]
                    ),
                    Style::default().fg(Color::Red),
                )
            };
            lines.push(Line::from(feedback));
            if mcq.is_last() {
                lines.push(Line::from(Span::styled(
                    "Set complete. Press r to start over.",
                    Style::default().add_modifier(Modifier::ITALIC),
                )));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL))
            .render(chunks[2], buf);
    }

    fn help(&self, app: &App) -> &'static str {
        if app.mcq.revealed() {
            "(enter/n) next question / (←/→) topic / (r)eset / (tab) next page / (esc) quit"
        } else {
            "(a-d) choose / (enter) submit / (←/→) topic / (r)eset / (tab) next page / (esc) quit"
        }
    }
}
