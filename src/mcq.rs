use itertools::Itertools;
use serde::Deserialize;

use crate::content;
use crate::error::ContentError;

pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct: usize,
    pub topic: String,
}

/// Which questions are visible
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TopicFilter {
    #[default]
    All,
    Topic(String),
}

impl TopicFilter {
    fn matches(&self, question: &Question) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Topic(topic) => question.topic == *topic,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TopicFilter::All => "All Topics",
            TopicFilter::Topic(topic) => topic,
        }
    }
}

#[derive(Deserialize)]
struct QuestionsFile {
    topics: Vec<String>,
    questions: Vec<Question>,
}

/// Ordered question pool plus the topics offered as filters
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    topics: Vec<String>,
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(topics: Vec<String>, questions: Vec<Question>) -> Result<Self, ContentError> {
        if let Some(q) = questions.iter().find(|q| q.correct >= OPTION_COUNT) {
            return Err(ContentError::InvalidQuestion {
                id: q.id,
                reason: format!("correct option {} is out of range", q.correct),
            });
        }
        Ok(Self { topics, questions })
    }

    /// Topics are taken from the questions, in first-seen order
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, ContentError> {
        let topics = questions.iter().map(|q| q.topic.clone()).unique().collect();
        Self::new(topics, questions)
    }

    pub fn embedded() -> Result<Self, ContentError> {
        let file: QuestionsFile = content::load_json(content::QUESTIONS_FILE)?;
        Self::new(file.topics, file.questions)
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// `All` followed by every topic
    pub fn filters(&self) -> Vec<TopicFilter> {
        std::iter::once(TopicFilter::All)
            .chain(self.topics.iter().cloned().map(TopicFilter::Topic))
            .collect()
    }
}

/// How an option should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Plain,
    Selected,
    Correct,
    Incorrect,
}

/// One question at a time from a filtered pool, with a running score
#[derive(Debug)]
pub struct McqSession {
    bank: QuestionBank,
    filter: TopicFilter,
    visible: Vec<usize>,
    position: usize,
    selected: Option<usize>,
    revealed: bool,
    score: usize,
    history: Vec<u32>,
}

impl McqSession {
    pub fn new(bank: QuestionBank) -> Self {
        let mut session = Self {
            bank,
            filter: TopicFilter::All,
            visible: vec![],
            position: 0,
            selected: None,
            revealed: false,
            score: 0,
            history: vec![],
        };
        session.refilter();
        session
    }

    fn refilter(&mut self) {
        self.visible = self
            .bank
            .questions
            .iter()
            .positions(|q| self.filter.matches(q))
            .collect();
    }

    fn clear_question_state(&mut self) {
        self.selected = None;
        self.revealed = false;
    }

    /// Switch the visible subsequence. Score and answered count are kept.
    pub fn set_filter(&mut self, filter: TopicFilter) {
        tracing::debug!(filter = filter.label(), "mcq filter changed");
        self.filter = filter;
        self.refilter();
        self.position = 0;
        self.clear_question_state();
    }

    /// Step through `filters()` by `delta`, wrapping around
    pub fn cycle_filter(&mut self, delta: isize) {
        let filters = self.bank.filters();
        let current = filters.iter().position(|f| *f == self.filter).unwrap_or(0);
        let len = filters.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.set_filter(filters[next].clone());
    }

    pub fn select_option(&mut self, index: usize) -> bool {
        if self.revealed || index >= OPTION_COUNT || self.current().is_none() {
            tracing::debug!(index, revealed = self.revealed, "option selection rejected");
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn submit(&mut self) -> bool {
        let (Some(selected), false) = (self.selected, self.revealed) else {
            tracing::debug!("submit rejected");
            return false;
        };
        let Some(question) = self.current() else {
            return false;
        };
        let (id, correct) = (question.id, question.correct == selected);

        self.revealed = true;
        if correct {
            self.score += 1;
        }
        self.history.push(id);
        tracing::debug!(question = id, correct, score = self.score, "mcq answer submitted");
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.revealed || self.is_last() {
            tracing::debug!(position = self.position, revealed = self.revealed, "next rejected");
            return false;
        }
        self.position += 1;
        self.clear_question_state();
        true
    }

    /// Back to the first question with a clean score. The filter stays.
    pub fn reset(&mut self) {
        self.position = 0;
        self.clear_question_state();
        self.score = 0;
        self.history.clear();
        tracing::debug!("mcq session reset");
    }

    pub fn current(&self) -> Option<&Question> {
        self.visible
            .get(self.position)
            .map(|&idx| &self.bank.questions[idx])
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.visible.len()
    }

    pub fn option_state(&self, index: usize) -> OptionState {
        let Some(question) = self.current() else {
            return OptionState::Plain;
        };
        if !self.revealed {
            return if self.selected == Some(index) {
                OptionState::Selected
            } else {
                OptionState::Plain
            };
        }
        if index == question.correct {
            OptionState::Correct
        } else if self.selected == Some(index) {
            OptionState::Incorrect
        } else {
            OptionState::Plain
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn filter(&self) -> &TopicFilter {
        &self.filter
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.history.len()
    }

    /// Ids of answered questions in answer order, repeats included
    pub fn history(&self) -> &[u32] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn question(id: u32, correct: usize, topic: &str) -> Question {
        Question {
            id,
            prompt: format!("question {id}"),
            options: ["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
            topic: topic.into(),
        }
    }

    fn session(questions: Vec<Question>) -> McqSession {
        McqSession::new(QuestionBank::from_questions(questions).unwrap())
    }

    fn mixed() -> McqSession {
        session(vec![
            question(1, 0, "Networking"),
            question(2, 1, "DBMS"),
            question(3, 2, "Networking"),
            question(4, 3, "MS Office"),
        ])
    }

    #[test]
    fn test_single_question_scenario() {
        let mut s = session(vec![question(1, 2, "DBMS")]);
        assert!(s.select_option(2));
        assert!(s.submit());
        assert_eq!(s.score(), 1);
        assert_eq!(s.answered_count(), 1);
        assert!(s.revealed());

        assert!(!s.next(), "last question cannot advance");
        assert_eq!(s.position(), 0);
        assert!(s.revealed());
    }

    #[test]
    fn test_submit_requires_selection() {
        let mut s = mixed();
        assert!(!s.submit());
        assert!(!s.revealed());
        assert_eq!(s.answered_count(), 0);
    }

    #[test]
    fn test_wrong_answer_counts_as_answered() {
        let mut s = mixed();
        s.select_option(3);
        s.submit();
        assert_eq!(s.score(), 0);
        assert_eq!(s.answered_count(), 1);
        assert_eq!(s.option_state(0), OptionState::Correct);
        assert_eq!(s.option_state(3), OptionState::Incorrect);
        assert_eq!(s.option_state(1), OptionState::Plain);
    }

    #[test]
    fn test_reselect_overwrites_before_submit() {
        let mut s = mixed();
        s.select_option(1);
        s.select_option(0);
        assert_eq!(s.selected(), Some(0));
        assert_eq!(s.option_state(0), OptionState::Selected);
        assert_eq!(s.option_state(1), OptionState::Plain);
        s.submit();
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_selection_locked_after_reveal() {
        let mut s = mixed();
        s.select_option(1);
        s.submit();
        assert!(!s.select_option(0));
        assert_eq!(s.selected(), Some(1));
        assert!(!s.submit(), "cannot submit twice");
        assert_eq!(s.answered_count(), 1);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut s = mixed();
        assert!(!s.select_option(OPTION_COUNT));
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_next_requires_reveal() {
        let mut s = mixed();
        assert!(!s.next());
        s.select_option(0);
        assert!(!s.next());
        s.submit();
        assert!(s.next());
        assert_eq!(s.position(), 1);
        assert_eq!(s.selected(), None);
        assert!(!s.revealed());
        assert_eq!(s.current().map(|q| q.id), Some(2));
    }

    #[test]
    fn test_filter_preserves_order_and_score() {
        let mut s = mixed();
        s.select_option(0);
        s.submit();
        s.next();
        s.select_option(1);
        s.submit();
        assert_eq!((s.score(), s.answered_count()), (2, 2));

        s.set_filter(TopicFilter::Topic("Networking".into()));
        assert_eq!(s.visible_len(), 2);
        assert_eq!(s.position(), 0);
        assert!(!s.revealed());
        assert_eq!(s.selected(), None);
        assert_eq!(s.current().map(|q| q.id), Some(1));
        assert_eq!((s.score(), s.answered_count()), (2, 2));

        // revisiting an answered question records it again
        s.select_option(0);
        s.submit();
        assert_eq!(s.history(), &[1, 2, 1]);
        s.next();
        assert_eq!(s.current().map(|q| q.id), Some(3));
    }

    #[test]
    fn test_empty_filter_is_inert() {
        let mut s = session(vec![question(1, 0, "Networking")]);
        s.set_filter(TopicFilter::Topic("DBMS".into()));
        assert_eq!(s.visible_len(), 0);
        assert!(s.current().is_none());
        assert!(!s.select_option(0));
        assert!(!s.submit());
        assert!(!s.next());
        assert_eq!(s.option_state(0), OptionState::Plain);
        assert_eq!((s.score(), s.answered_count()), (0, 0));
    }

    #[test]
    fn test_reset_keeps_filter() {
        let mut s = mixed();
        s.set_filter(TopicFilter::Topic("Networking".into()));
        s.select_option(0);
        s.submit();
        s.next();
        s.reset();
        assert_eq!(s.position(), 0);
        assert_eq!((s.score(), s.answered_count()), (0, 0));
        assert!(s.history().is_empty());
        assert_eq!(s.filter(), &TopicFilter::Topic("Networking".into()));
        assert_eq!(s.visible_len(), 2);
    }

    #[test]
    fn test_cycle_filter_wraps() {
        let mut s = mixed();
        assert_eq!(s.filter(), &TopicFilter::All);
        s.cycle_filter(1);
        assert_eq!(s.filter(), &TopicFilter::Topic("Networking".into()));
        s.cycle_filter(-1);
        assert_eq!(s.filter(), &TopicFilter::All);
        s.cycle_filter(-1);
        assert_eq!(s.filter(), &TopicFilter::Topic("MS Office".into()));
    }

    #[test]
    fn test_score_never_exceeds_answered() {
        let mut s = mixed();
        for choice in [0, 0, 2, 3] {
            s.select_option(choice);
            s.submit();
            assert!(s.score() <= s.answered_count());
            s.next();
        }
        assert_eq!(s.answered_count(), 4);
        assert_eq!(s.score(), 3);
    }

    #[test]
    fn test_invalid_correct_index_rejected() {
        let result = QuestionBank::from_questions(vec![question(9, 4, "DBMS")]);
        assert_matches!(result, Err(ContentError::InvalidQuestion { id: 9, .. }));
    }

    #[test]
    fn test_embedded_bank() {
        let bank = QuestionBank::embedded().unwrap();
        assert_eq!(bank.questions().len(), 8);
        assert_eq!(bank.topics().len(), 6);
        assert_eq!(bank.filters().len(), 7);
        assert_eq!(bank.filters()[0].label(), "All Topics");
    }
}
