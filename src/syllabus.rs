use std::collections::HashSet;

use serde::Deserialize;

use crate::content;
use crate::error::ContentError;
use crate::util::rounded_percent;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub subtopics: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub badge: String,
    pub topics: Vec<Topic>,
}

impl Section {
    pub fn completed_topics(&self) -> usize {
        self.topics.iter().filter(|t| t.completed).count()
    }

    /// Share of completed topics, rounded to a whole percent
    pub fn progress(&self) -> u32 {
        rounded_percent(self.completed_topics(), self.topics.len())
    }
}

#[derive(Deserialize)]
struct SyllabusFile {
    sections: Vec<Section>,
}

/// Exam syllabus as a checklist, with a cursor for keyboard navigation
#[derive(Debug, Clone)]
pub struct Syllabus {
    sections: Vec<Section>,
    expanded: HashSet<String>,
    cursor: usize,
}

impl Syllabus {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            expanded: HashSet::new(),
            cursor: 0,
        }
    }

    pub fn embedded() -> Result<Self, ContentError> {
        let file: SyllabusFile = content::load_json(content::SYLLABUS_FILE)?;
        Ok(Self::new(file.sections))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn toggle_completion(&mut self, section_id: &str, topic_id: &str) -> bool {
        let topic = self
            .sections
            .iter_mut()
            .filter(|s| s.id == section_id)
            .flat_map(|s| s.topics.iter_mut())
            .find(|t| t.id == topic_id);

        match topic {
            Some(topic) => {
                topic.completed = !topic.completed;
                tracing::debug!(section = section_id, topic = topic_id, completed = topic.completed, "syllabus topic toggled");
                true
            }
            None => false,
        }
    }

    pub fn toggle_expanded(&mut self, topic_id: &str) {
        if !self.expanded.remove(topic_id) {
            self.expanded.insert(topic_id.to_string());
        }
    }

    pub fn is_expanded(&self, topic_id: &str) -> bool {
        self.expanded.contains(topic_id)
    }

    pub fn total_topics(&self) -> usize {
        self.sections.iter().map(|s| s.topics.len()).sum()
    }

    pub fn overall_progress(&self) -> u32 {
        let completed = self.sections.iter().map(Section::completed_topics).sum();
        rounded_percent(completed, self.total_topics())
    }

    /// (section id, topic id) of every topic in display order
    fn flattened(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .flat_map(|s| s.topics.iter().map(move |t| (s.id.as_str(), t.id.as_str())))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<(String, String)> {
        self.flattened()
            .nth(self.cursor)
            .map(|(s, t)| (s.to_string(), t.to_string()))
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.total_topics() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_selected(&mut self) -> bool {
        match self.selected() {
            Some((section, topic)) => self.toggle_completion(&section, &topic),
            None => false,
        }
    }

    pub fn expand_selected(&mut self) {
        if let Some((_, topic)) = self.selected() {
            self.toggle_expanded(&topic);
        }
    }
}
