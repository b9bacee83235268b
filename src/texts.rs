use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content;
use crate::error::ContentError;

/// Language of a typing drill
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Nepali,
}

impl Language {
    /// Speed the practical exam expects. Shown next to the drill, never used for gating.
    pub fn target_wpm(&self) -> u32 {
        match self {
            Language::English => 40,
            Language::Nepali => 25,
        }
    }

    /// Name of the language in its own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Nepali => "नेपाली",
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::English => Language::Nepali,
            Language::Nepali => Language::English,
        }
    }
}

#[derive(Deserialize)]
struct TextsFile {
    english: Vec<String>,
    nepali: Vec<String>,
}

/// Reference texts to type, keyed by language. Both pools are non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPool {
    english: Vec<String>,
    nepali: Vec<String>,
}

impl TextPool {
    pub fn new(english: Vec<String>, nepali: Vec<String>) -> Result<Self, ContentError> {
        if english.is_empty() {
            return Err(ContentError::EmptyPool(Language::English));
        }
        if nepali.is_empty() {
            return Err(ContentError::EmptyPool(Language::Nepali));
        }
        Ok(Self { english, nepali })
    }

    /// Pool with a single text used for both languages
    pub fn single(text: &str) -> Self {
        Self {
            english: vec![text.to_string()],
            nepali: vec![text.to_string()],
        }
    }

    /// Pool shipped with the binary
    pub fn embedded() -> Result<Self, ContentError> {
        let file: TextsFile = content::load_json(content::TEXTS_FILE)?;
        Self::new(file.english, file.nepali)
    }

    pub fn texts(&self, language: Language) -> &[String] {
        match language {
            Language::English => &self.english,
            Language::Nepali => &self.nepali,
        }
    }

    pub fn draw(&self, language: Language) -> &str {
        self.draw_with(language, &mut rand::thread_rng())
    }

    pub fn draw_with<R: Rng + ?Sized>(&self, language: Language, rng: &mut R) -> &str {
        // pools are validated non-empty on construction
        self.texts(language)
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_target_wpm() {
        assert_eq!(Language::English.target_wpm(), 40);
        assert_eq!(Language::Nepali.target_wpm(), 25);
    }

    #[test]
    fn test_language_display_and_other() {
        assert_eq!(Language::English.to_string(), "English");
        assert_eq!(Language::Nepali.to_string(), "Nepali");
        assert_eq!(Language::English.other(), Language::Nepali);
        assert_eq!(Language::Nepali.other(), Language::English);
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::English.native_name(), "English");
        assert_eq!(Language::Nepali.native_name(), "नेपाली");
    }

    #[test]
    fn test_language_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Language::Nepali).unwrap(),
            "\"nepali\""
        );
        let lang: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        assert_matches!(
            TextPool::new(vec![], vec!["a".into()]),
            Err(ContentError::EmptyPool(Language::English))
        );
        assert_matches!(
            TextPool::new(vec!["a".into()], vec![]),
            Err(ContentError::EmptyPool(Language::Nepali))
        );
    }

    #[test]
    fn test_embedded_pool_loads() {
        let pool = TextPool::embedded().unwrap();
        assert_eq!(pool.texts(Language::English).len(), 5);
        assert_eq!(pool.texts(Language::Nepali).len(), 3);
    }

    #[test]
    fn test_draw_comes_from_language_pool() {
        let pool = TextPool::new(
            vec!["one".into(), "two".into()],
            vec!["एक".into()],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let text = pool.draw_with(Language::English, &mut rng);
            assert!(text == "one" || text == "two");
        }
        assert_eq!(pool.draw(Language::Nepali), "एक");
    }

    #[test]
    fn test_single_pool() {
        let pool = TextPool::single("cat");
        assert_eq!(pool.draw(Language::English), "cat");
        assert_eq!(pool.draw(Language::Nepali), "cat");
    }
}
