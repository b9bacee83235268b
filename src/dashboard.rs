use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::mcq::McqSession;
use crate::notes::Notebook;
use crate::syllabus::Syllabus;
use crate::texts::Language;
use crate::typing::{TypingSession, TypingSignal};

/// Daily targets shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DailyGoals {
    pub mcq_sets: u32,
    pub typing_minutes: u32,
    pub subjective_answers: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            mcq_sets: 3,
            typing_minutes: 60,
            subjective_answers: 2,
        }
    }
}

/// What happened during this run that the engines themselves do not keep
#[derive(Debug, Clone, Default)]
pub struct PracticeLog {
    mcq_sets: u32,
    best_wpm: HashMap<Language, u32>,
}

impl PracticeLog {
    /// Call after a successful submit; counts a set when the last question was answered
    pub fn record_mcq_submit(&mut self, mcq: &McqSession) {
        if mcq.revealed() && mcq.is_last() {
            self.mcq_sets += 1;
            tracing::info!(sets = self.mcq_sets, filter = mcq.filter().label(), "mcq set finished");
        }
    }

    pub fn record_typing(&mut self, language: Language, signal: TypingSignal) {
        let (TypingSignal::Completed(result) | TypingSignal::Expired(result)) = signal;
        let best = self.best_wpm.entry(language).or_insert(0);
        *best = (*best).max(result.wpm);
    }

    pub fn mcq_sets(&self) -> u32 {
        self.mcq_sets
    }

    pub fn best_wpm(&self, language: Language) -> Option<u32> {
        self.best_wpm.get(&language).copied()
    }
}

/// "Snapshot • Today" figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub goals: DailyGoals,
    pub mcq_sets: u32,
    pub mcq_score: usize,
    pub mcq_answered: usize,
    pub typing_minutes: u32,
    pub best_wpm_english: Option<u32>,
    pub best_wpm_nepali: Option<u32>,
    pub subjective_answers: u32,
    pub syllabus_progress: u32,
}

impl Snapshot {
    pub fn collect(
        goals: DailyGoals,
        log: &PracticeLog,
        typing: &TypingSession,
        mcq: &McqSession,
        syllabus: &Syllabus,
        notes: &Notebook,
    ) -> Self {
        Self {
            goals,
            mcq_sets: log.mcq_sets(),
            mcq_score: mcq.score(),
            mcq_answered: mcq.answered_count(),
            // includes a drill still running
            typing_minutes: (typing.practiced().as_secs() / 60) as u32,
            best_wpm_english: log.best_wpm(Language::English),
            best_wpm_nepali: log.best_wpm(Language::Nepali),
            subjective_answers: notes.authored() as u32,
            syllabus_progress: syllabus.overall_progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcq::{Question, QuestionBank};
    use crate::notes::{Category, NoteDraft};
    use crate::texts::TextPool;
    use crate::typing::FinalMetrics;
    use std::time::{Duration, SystemTime};

    fn mcq() -> McqSession {
        let q = |id| Question {
            id,
            prompt: "?".into(),
            options: ["a".into(), "b".into(), "c".into(), "d".into()],
            correct: 0,
            topic: "DBMS".into(),
        };
        McqSession::new(QuestionBank::from_questions(vec![q(1), q(2)]).unwrap())
    }

    #[test]
    fn test_default_goals() {
        let goals = DailyGoals::default();
        assert_eq!((goals.mcq_sets, goals.typing_minutes, goals.subjective_answers), (3, 60, 2));
    }

    #[test]
    fn test_mcq_set_counted_on_last_question() {
        let mut log = PracticeLog::default();
        let mut session = mcq();

        session.select_option(0);
        session.submit();
        log.record_mcq_submit(&session);
        assert_eq!(log.mcq_sets(), 0);

        session.next();
        session.select_option(1);
        session.submit();
        log.record_mcq_submit(&session);
        assert_eq!(log.mcq_sets(), 1);
    }

    #[test]
    fn test_best_wpm_per_language() {
        let mut log = PracticeLog::default();
        let m = |wpm| FinalMetrics { wpm, accuracy: 90 };
        log.record_typing(Language::English, TypingSignal::Completed(m(35)));
        log.record_typing(Language::English, TypingSignal::Expired(m(28)));
        log.record_typing(Language::Nepali, TypingSignal::Expired(m(12)));
        assert_eq!(log.best_wpm(Language::English), Some(35));
        assert_eq!(log.best_wpm(Language::Nepali), Some(12));
    }

    #[test]
    fn test_snapshot_collect() {
        let t0 = SystemTime::now();
        let mut typing = TypingSession::new(TextPool::single("cat"), Language::English, 600);
        typing.start_at(t0);
        typing.pause_at(t0 + Duration::from_secs(150));

        let mut syllabus = Syllabus::embedded().unwrap();
        syllabus.toggle_completion("written", "os");

        let mut notes = Notebook::embedded().unwrap();
        notes
            .add(NoteDraft {
                title: "t".into(),
                content: "c".into(),
                category: Category::Diagrams,
            })
            .unwrap();

        let snapshot = Snapshot::collect(
            DailyGoals::default(),
            &PracticeLog::default(),
            &typing,
            &mcq(),
            &syllabus,
            &notes,
        );
        assert_eq!(snapshot.typing_minutes, 2);
        assert_eq!(snapshot.subjective_answers, 1);
        assert_eq!(snapshot.syllabus_progress, 10);
        assert_eq!(snapshot.mcq_sets, 0);
        assert_eq!(snapshot.best_wpm_english, None);
    }
}
