use std::time::{Duration, SystemTime};

use crate::scoring::{self, Outcome};
use crate::texts::{Language, TextPool};

/// Countdown a drill starts from
pub const DEFAULT_DURATION_SECS: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    Running,
    Paused,
    Expired,
    Completed,
}

/// Metrics derived from the current input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingMetrics {
    pub correct_chars: usize,
    pub total_chars: usize,
    pub wpm: u32,
    pub accuracy: u32,
}

impl Default for TypingMetrics {
    fn default() -> Self {
        Self {
            correct_chars: 0,
            total_chars: 0,
            wpm: 0,
            accuracy: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalMetrics {
    pub wpm: u32,
    pub accuracy: u32,
}

/// Emitted when a run ends on its own
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingSignal {
    /// input matched the reference text exactly
    Completed(FinalMetrics),
    /// countdown reached zero
    Expired(FinalMetrics),
}

/// A timed typing drill against one reference text
#[derive(Debug)]
pub struct TypingSession {
    pool: TextPool,
    language: Language,
    reference: String,
    input: String,
    state: TypingState,
    duration_secs: u32,
    seconds_remaining: u32,
    started_at: Option<SystemTime>,
    metrics: TypingMetrics,
    practiced: Duration,
}

impl TypingSession {
    pub fn new(pool: TextPool, language: Language, duration_secs: u32) -> Self {
        let reference = pool.draw(language).to_string();
        Self {
            pool,
            language,
            reference,
            input: String::new(),
            state: TypingState::Idle,
            duration_secs,
            seconds_remaining: duration_secs,
            started_at: None,
            metrics: TypingMetrics::default(),
            practiced: Duration::ZERO,
        }
    }

    pub fn start(&mut self) -> bool {
        self.start_at(SystemTime::now())
    }

    /// Begin a run. Input and metrics are cleared but the countdown keeps the
    /// time it had, so starting after a pause does not resume the previous run.
    pub fn start_at(&mut self, now: SystemTime) -> bool {
        if self.state == TypingState::Running || self.seconds_remaining == 0 {
            tracing::debug!(state = ?self.state, remaining = self.seconds_remaining, "start rejected");
            return false;
        }
        self.started_at = Some(now);
        self.input.clear();
        self.metrics = TypingMetrics::default();
        self.state = TypingState::Running;
        tracing::debug!(language = %self.language, remaining = self.seconds_remaining, "typing run started");
        true
    }

    pub fn pause(&mut self) -> bool {
        self.pause_at(SystemTime::now())
    }

    pub fn pause_at(&mut self, now: SystemTime) -> bool {
        if self.state != TypingState::Running {
            tracing::debug!(state = ?self.state, "pause rejected");
            return false;
        }
        self.leave_running(TypingState::Paused, now);
        true
    }

    pub fn submit_input(&mut self, text: &str) -> Option<TypingSignal> {
        self.submit_input_at(text, SystemTime::now())
    }

    /// Replace the input with the full text typed so far and rescore it
    pub fn submit_input_at(&mut self, text: &str, now: SystemTime) -> Option<TypingSignal> {
        if self.state != TypingState::Running {
            tracing::debug!(state = ?self.state, "input ignored");
            return None;
        }
        self.input.clear();
        self.input.push_str(text);

        let total_chars = self.input.chars().count();
        let correct_chars = scoring::correct_chars(&self.input, &self.reference);
        self.metrics.total_chars = total_chars;
        self.metrics.correct_chars = correct_chars;
        self.metrics.accuracy = scoring::accuracy_percent(correct_chars, total_chars);
        self.metrics.wpm = self.wpm_at(now);

        if self.input == self.reference {
            self.leave_running(TypingState::Completed, now);
            let result = self.final_metrics();
            tracing::info!(wpm = result.wpm, accuracy = result.accuracy, "typing run completed");
            return Some(TypingSignal::Completed(result));
        }
        None
    }

    pub fn tick(&mut self) -> Option<TypingSignal> {
        self.tick_at(SystemTime::now())
    }

    /// One second of countdown. Ignored unless running.
    pub fn tick_at(&mut self, now: SystemTime) -> Option<TypingSignal> {
        if self.state != TypingState::Running {
            return None;
        }
        self.metrics.wpm = self.wpm_at(now);
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);

        if self.seconds_remaining == 0 {
            self.leave_running(TypingState::Expired, now);
            let result = self.final_metrics();
            tracing::info!(wpm = result.wpm, accuracy = result.accuracy, "typing run expired");
            return Some(TypingSignal::Expired(result));
        }
        None
    }

    pub fn reset(&mut self, language: Language) {
        self.reset_at(language, SystemTime::now())
    }

    /// Back to idle with a freshly drawn text and a full countdown
    pub fn reset_at(&mut self, language: Language, now: SystemTime) {
        if self.state == TypingState::Running {
            self.leave_running(TypingState::Idle, now);
        }
        self.language = language;
        self.reference = self.pool.draw(language).to_string();
        self.input.clear();
        self.state = TypingState::Idle;
        self.seconds_remaining = self.duration_secs;
        self.started_at = None;
        self.metrics = TypingMetrics::default();
        tracing::debug!(language = %language, "typing session reset");
    }

    fn wpm_at(&self, now: SystemTime) -> u32 {
        let elapsed = self
            .started_at
            .and_then(|start| now.duration_since(start).ok())
            .unwrap_or_default();
        scoring::words_per_minute(scoring::word_count(&self.input), elapsed)
    }

    fn leave_running(&mut self, next: TypingState, now: SystemTime) {
        if let Some(start) = self.started_at {
            self.practiced += now.duration_since(start).unwrap_or_default();
        }
        self.state = next;
    }

    fn final_metrics(&self) -> FinalMetrics {
        FinalMetrics {
            wpm: self.metrics.wpm,
            accuracy: self.metrics.accuracy,
        }
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TypingState::Running
    }

    pub fn can_start(&self) -> bool {
        self.state != TypingState::Running && self.seconds_remaining > 0
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn metrics(&self) -> TypingMetrics {
        self.metrics
    }

    pub fn practiced(&self) -> Duration {
        self.practiced_at(SystemTime::now())
    }

    /// Wall-clock time spent running, across every run of this session,
    /// including the run in progress
    pub fn practiced_at(&self, now: SystemTime) -> Duration {
        let live = match (self.state, self.started_at) {
            (TypingState::Running, Some(start)) => now.duration_since(start).unwrap_or_default(),
            _ => Duration::ZERO,
        };
        self.practiced + live
    }

    /// Per-character outcome of the reference text, for highlighting
    pub fn outcomes(&self) -> Vec<(char, Outcome)> {
        scoring::diff(&self.input, &self.reference)
    }
}
