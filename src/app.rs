use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::dashboard::{DailyGoals, PracticeLog, Snapshot};
use crate::error::ContentError;
use crate::mcq::{McqSession, QuestionBank, TopicFilter};
use crate::notes::{NoteDraft, Notebook};
use crate::syllabus::Syllabus;
use crate::texts::TextPool;
use crate::typing::{TypingSession, TypingSignal};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, strum_macros::Display)]
pub enum Page {
    #[default]
    Dashboard,
    Typing,
    #[strum(to_string = "MCQ")]
    Mcq,
    Syllabus,
    Notes,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Typing,
        Page::Mcq,
        Page::Syllabus,
        Page::Notes,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Content,
    Category,
}

impl FormField {
    fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Category,
            FormField::Category => FormField::Title,
        }
    }

    fn previous(self) -> FormField {
        match self {
            FormField::Title => FormField::Category,
            FormField::Content => FormField::Title,
            FormField::Category => FormField::Content,
        }
    }
}

/// Note being written on the notes page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub draft: NoteDraft,
    pub field: FormField,
}

#[derive(Debug)]
pub struct App {
    pub page: Page,
    pub typing: TypingSession,
    pub mcq: McqSession,
    pub syllabus: Syllabus,
    pub notes: Notebook,
    pub note_form: Option<NoteForm>,
    pub goals: DailyGoals,
    pub log: PracticeLog,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// App over the content shipped with the binary
    pub fn new(config: &Config) -> Result<Self, ContentError> {
        Ok(Self::with_content(
            config,
            TextPool::embedded()?,
            QuestionBank::embedded()?,
            Syllabus::embedded()?,
            Notebook::embedded()?,
        ))
    }

    pub fn with_content(
        config: &Config,
        pool: TextPool,
        bank: QuestionBank,
        syllabus: Syllabus,
        notes: Notebook,
    ) -> Self {
        Self {
            page: Page::default(),
            typing: TypingSession::new(pool, config.language, config.duration_secs),
            mcq: McqSession::new(bank),
            syllabus,
            notes,
            note_form: None,
            goals: config.goals,
            log: PracticeLog::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::collect(
            self.goals,
            &self.log,
            &self.typing,
            &self.mcq,
            &self.syllabus,
            &self.notes,
        )
    }

    /// Select the MCQ filter by topic name; unknown names leave the filter alone
    pub fn select_topic(&mut self, topic: &str) -> bool {
        let known = self.mcq.bank().topics().iter().any(|t| t == topic);
        if known {
            self.mcq.set_filter(TopicFilter::Topic(topic.to_string()));
        }
        known
    }

    pub fn on_tick(&mut self) {
        if !self.typing.is_running() {
            return;
        }
        if let Some(signal) = self.typing.tick() {
            self.on_typing_signal(signal);
        }
    }

    fn on_typing_signal(&mut self, signal: TypingSignal) {
        self.log.record_typing(self.typing.language(), signal);
        self.status = Some(match signal {
            TypingSignal::Completed(r) => format!(
                "Perfect! You completed the text accurately. {} WPM, {}% accuracy.",
                r.wpm, r.accuracy
            ),
            TypingSignal::Expired(r) => format!(
                "Time's up! You typed at {} WPM with {}% accuracy.",
                r.wpm, r.accuracy
            ),
        });
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.note_form.is_some() {
            self.on_form_key(key);
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.page = self.page.next();
                return;
            }
            KeyCode::BackTab => {
                self.page = self.page.previous();
                return;
            }
            _ => {}
        }
        match self.page {
            Page::Dashboard => self.on_dashboard_key(key),
            Page::Typing => self.on_typing_key(key),
            Page::Mcq => self.on_mcq_key(key),
            Page::Syllabus => self.on_syllabus_key(key),
            Page::Notes => self.on_notes_key(key),
        }
    }

    fn on_dashboard_key(&mut self, key: KeyEvent) {
        self.page = match key.code {
            KeyCode::Char('t') => Page::Typing,
            KeyCode::Char('m') => Page::Mcq,
            KeyCode::Char('s') => Page::Syllabus,
            KeyCode::Char('n') => Page::Notes,
            _ => return,
        };
    }

    fn on_typing_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if self.typing.is_running() {
            let mut input = self.typing.input().to_string();
            match key.code {
                KeyCode::Char('p') if ctrl => {
                    self.typing.pause();
                    return;
                }
                KeyCode::Char('r') if ctrl => {
                    self.typing.reset(self.typing.language());
                    return;
                }
                KeyCode::Char(c) if !ctrl => input.push(c),
                KeyCode::Backspace => {
                    input.pop();
                }
                _ => return,
            }
            if let Some(signal) = self.typing.submit_input(&input) {
                self.on_typing_signal(signal);
            }
            return;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => {
                if self.typing.start() {
                    self.status = None;
                } else {
                    self.status = Some("Time is up. Press r to reset.".to_string());
                }
            }
            KeyCode::Char('r') => {
                self.typing.reset(self.typing.language());
                self.status = None;
            }
            KeyCode::Char('l') => {
                self.typing.reset(self.typing.language().other());
                self.status = None;
            }
            _ => {}
        }
    }

    fn on_mcq_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ 'a'..='d') => {
                self.mcq.select_option(c as usize - 'a' as usize);
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.mcq.select_option(c as usize - '1' as usize);
            }
            KeyCode::Enter => {
                if self.mcq.revealed() {
                    self.mcq.next();
                } else if self.mcq.submit() {
                    self.log.record_mcq_submit(&self.mcq);
                }
            }
            KeyCode::Char('n') => {
                self.mcq.next();
            }
            KeyCode::Left => self.mcq.cycle_filter(-1),
            KeyCode::Right => self.mcq.cycle_filter(1),
            KeyCode::Char('r') => self.mcq.reset(),
            _ => {}
        }
    }

    fn on_syllabus_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.syllabus.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.syllabus.select_next(),
            KeyCode::Char(' ') => {
                self.syllabus.toggle_selected();
            }
            KeyCode::Enter => self.syllabus.expand_selected(),
            _ => {}
        }
    }

    fn on_notes_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.notes.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.notes.select_next(),
            KeyCode::Enter => {
                if let Some(id) = self.notes.selected().map(|n| n.id) {
                    self.notes.toggle_expanded(id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.notes.selected().map(|n| n.id) {
                    self.notes.delete(id);
                    self.status = Some("Note deleted".to_string());
                }
            }
            KeyCode::Left => self.notes.set_filter(self.notes.filter().cycle(-1)),
            KeyCode::Right => self.notes.set_filter(self.notes.filter().cycle(1)),
            KeyCode::Char('a') => {
                self.note_form = Some(NoteForm::default());
                self.status = None;
            }
            _ => {}
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc {
            self.note_form = None;
            return;
        }
        if ctrl && key.code == KeyCode::Char('s') {
            self.save_note_form();
            return;
        }
        let Some(form) = self.note_form.as_mut() else {
            return;
        };
        match (form.field, key.code) {
            (_, KeyCode::Up) | (_, KeyCode::BackTab) => form.field = form.field.previous(),
            (_, KeyCode::Down) | (_, KeyCode::Tab) => form.field = form.field.next(),
            (FormField::Category, KeyCode::Left) => {
                form.draft.category = form.draft.category.cycle(-1)
            }
            (FormField::Category, KeyCode::Right) => {
                form.draft.category = form.draft.category.cycle(1)
            }
            (FormField::Title, KeyCode::Enter) => form.field = FormField::Content,
            (FormField::Title, KeyCode::Char(c)) if !ctrl => form.draft.title.push(c),
            (FormField::Title, KeyCode::Backspace) => {
                form.draft.title.pop();
            }
            (FormField::Content, KeyCode::Enter) => form.draft.content.push('\n'),
            (FormField::Content, KeyCode::Char(c)) if !ctrl => form.draft.content.push(c),
            (FormField::Content, KeyCode::Backspace) => {
                form.draft.content.pop();
            }
            _ => {}
        }
    }

    fn save_note_form(&mut self) {
        let Some(form) = self.note_form.as_ref() else {
            return;
        };
        match self.notes.add(form.draft.clone()) {
            Ok(_) => {
                self.note_form = None;
                self.status = Some("Note added successfully!".to_string());
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}
