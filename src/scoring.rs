use std::time::Duration;

/// Positions where `input` agrees with `reference`, over the overlapping prefix only
pub fn correct_chars(input: &str, reference: &str) -> usize {
    input
        .chars()
        .zip(reference.chars())
        .filter(|(typed, expected)| typed == expected)
        .count()
}

/// Percentage of correct characters, rounded. Nothing typed counts as 100.
pub fn accuracy_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let correct = correct.min(total);
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

/// Whitespace-delimited tokens, empty tokens discarded
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Words typed per elapsed minute, rounded. Reports 0 when the rate is not finite.
pub fn words_per_minute(words: usize, elapsed: Duration) -> u32 {
    let elapsed_minutes = elapsed.as_millis() as f64 / 60_000.0;
    let wpm = words as f64 / elapsed_minutes;
    if wpm.is_finite() {
        wpm.round() as u32
    } else {
        0
    }
}

/// Outcome of one character of the reference text, for highlighting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    Pending,
}

/// Per-character outcome of the reference text against the input typed so far
pub fn diff(input: &str, reference: &str) -> Vec<(char, Outcome)> {
    let mut typed = input.chars();
    reference
        .chars()
        .map(|expected| match typed.next() {
            Some(c) if c == expected => (expected, Outcome::Correct),
            Some(_) => (expected, Outcome::Incorrect),
            None => (expected, Outcome::Pending),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_chars_positional() {
        assert_eq!(correct_chars("cbt", "cat"), 2);
        assert_eq!(correct_chars("", "cat"), 0);
        assert_eq!(correct_chars("cat", "cat"), 3);
    }

    #[test]
    fn test_correct_chars_ignores_overflow() {
        // only the overlapping prefix is scored
        assert_eq!(correct_chars("cats and dogs", "cat"), 3);
        assert_eq!(correct_chars("ca", "cat"), 2);
    }

    #[test]
    fn test_correct_chars_no_realignment() {
        // a dropped character shifts everything after it
        assert_eq!(correct_chars("ct", "cat"), 1);
    }

    #[test]
    fn test_correct_chars_devanagari() {
        let reference = "नेपाल";
        assert_eq!(correct_chars(reference, reference), reference.chars().count());
        assert_eq!(correct_chars("नेपाx", reference), reference.chars().count() - 1);
    }

    #[test]
    fn test_accuracy_percent() {
        assert_eq!(accuracy_percent(2, 3), 67);
        assert_eq!(accuracy_percent(1, 3), 33);
        assert_eq!(accuracy_percent(0, 5), 0);
        assert_eq!(accuracy_percent(5, 5), 100);
        assert_eq!(accuracy_percent(1, 2), 50);
    }

    #[test]
    fn test_accuracy_percent_empty_input() {
        assert_eq!(accuracy_percent(0, 0), 100);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  one   two\tthree\n"), 3);
    }

    #[test]
    fn test_words_per_minute() {
        assert_eq!(words_per_minute(10, Duration::from_secs(60)), 10);
        assert_eq!(words_per_minute(10, Duration::from_secs(30)), 20);
        assert_eq!(words_per_minute(7, Duration::from_secs(20)), 21);
        assert_eq!(words_per_minute(0, Duration::from_secs(20)), 0);
    }

    #[test]
    fn test_words_per_minute_zero_elapsed() {
        assert_eq!(words_per_minute(3, Duration::ZERO), 0);
        assert_eq!(words_per_minute(0, Duration::ZERO), 0);
    }

    #[test]
    fn test_diff() {
        assert_eq!(
            diff("cb", "cat"),
            vec![
                ('c', Outcome::Correct),
                ('a', Outcome::Incorrect),
                ('t', Outcome::Pending)
            ]
        );
        assert_eq!(diff("catalog", "cat").len(), 3);
    }
}
