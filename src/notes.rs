use chrono::{DateTime, Local};
use serde::Deserialize;

use crate::content;
use crate::error::{ContentError, NoteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, strum_macros::Display)]
pub enum Category {
    #[default]
    Definitions,
    Procedures,
    Diagrams,
    #[serde(rename = "Case Studies")]
    #[strum(to_string = "Case Studies")]
    CaseStudies,
    #[serde(rename = "General Knowledge")]
    #[strum(to_string = "General Knowledge")]
    GeneralKnowledge,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Definitions,
        Category::Procedures,
        Category::Diagrams,
        Category::CaseStudies,
        Category::GeneralKnowledge,
    ];

    pub fn cycle(self, delta: isize) -> Category {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0) as isize;
        let len = Self::ALL.len() as isize;
        Self::ALL[(idx + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, note: &Note) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => note.category == *category,
        }
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(category) => category.to_string(),
        }
    }

    /// `All` followed by every category, wrapping around
    pub fn cycle(self, delta: isize) -> CategoryFilter {
        let filters: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect();
        let idx = filters.iter().position(|f| *f == self).unwrap_or(0) as isize;
        filters[(idx + delta).rem_euclid(filters.len() as isize) as usize]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub created_at: DateTime<Local>,
}

/// Fields of a note being written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
}

#[derive(Deserialize)]
struct SeedNote {
    title: String,
    content: String,
    category: Category,
}

#[derive(Deserialize)]
struct NotesFile {
    notes: Vec<SeedNote>,
}

/// Subjective answers, newest first
#[derive(Debug, Clone, Default)]
pub struct Notebook {
    notes: Vec<Note>,
    next_id: u64,
    authored: usize,
    filter: CategoryFilter,
    expanded: Option<u64>,
    cursor: usize,
}

impl Notebook {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Notebook holding the example notes shipped with the binary
    pub fn embedded() -> Result<Self, ContentError> {
        let file: NotesFile = content::load_json(content::NOTES_FILE)?;
        let mut notebook = Self::new();
        let now = Local::now();
        for seed in file.notes {
            let id = notebook.allocate_id();
            notebook.notes.push(Note {
                id,
                title: seed.title,
                content: seed.content,
                category: seed.category,
                created_at: now,
            });
        }
        Ok(notebook)
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    pub fn add(&mut self, draft: NoteDraft) -> Result<u64, NoteError> {
        self.add_at(draft, Local::now())
    }

    pub fn add_at(&mut self, draft: NoteDraft, now: DateTime<Local>) -> Result<u64, NoteError> {
        if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
            return Err(NoteError::MissingFields);
        }
        let id = self.allocate_id();
        self.notes.insert(
            0,
            Note {
                id,
                title: draft.title,
                content: draft.content,
                category: draft.category,
                created_at: now,
            },
        );
        self.authored += 1;
        tracing::info!(note = id, category = %draft.category, "note added");
        Ok(id)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return false;
        }
        if self.expanded == Some(id) {
            self.expanded = None;
        }
        self.clamp_cursor();
        tracing::info!(note = id, "note deleted");
        true
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn visible(&self) -> Vec<&Note> {
        self.notes.iter().filter(|n| self.filter.matches(n)).collect()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.cursor = 0;
    }

    pub fn toggle_expanded(&mut self, id: u64) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded == Some(id)
    }

    /// Notes written during this run, seed notes excluded
    pub fn authored(&self) -> usize {
        self.authored
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&Note> {
        self.visible().get(self.cursor).copied()
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.visible().len() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible().len().saturating_sub(1));
    }
}
