use include_dir::{include_dir, Dir};
use serde::de::DeserializeOwned;

use crate::error::ContentError;

static CONTENT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/content");

pub const TEXTS_FILE: &str = "texts.json";
pub const QUESTIONS_FILE: &str = "questions.json";
pub const SYLLABUS_FILE: &str = "syllabus.json";
pub const NOTES_FILE: &str = "notes.json";

/// Deserialize one of the JSON files compiled into the binary
pub fn load_json<T: DeserializeOwned>(file_name: &str) -> Result<T, ContentError> {
    let file = CONTENT_DIR
        .get_file(file_name)
        .ok_or_else(|| ContentError::MissingFile(file_name.to_string()))?;

    let contents = file.contents_utf8().ok_or_else(|| ContentError::NotUtf8 {
        file: file_name.to_string(),
    })?;

    serde_json::from_str(contents).map_err(|source| ContentError::Parse {
        file: file_name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_all_content_files_are_embedded() {
        for name in [TEXTS_FILE, QUESTIONS_FILE, SYLLABUS_FILE, NOTES_FILE] {
            let value: serde_json::Value = load_json(name).unwrap();
            assert!(value.is_object(), "{name} should hold a JSON object");
        }
    }

    #[test]
    fn test_missing_file() {
        let result: Result<serde_json::Value, _> = load_json("nonexistent.json");
        assert_matches!(result, Err(ContentError::MissingFile(name)) if name == "nonexistent.json");
    }

    #[test]
    fn test_parse_error_names_file() {
        let result: Result<Vec<u32>, _> = load_json(TEXTS_FILE);
        assert_matches!(result, Err(ContentError::Parse { file, .. }) if file == TEXTS_FILE);
    }
}
