use thiserror::Error;

use crate::texts::Language;

/// Errors raised while loading the embedded study content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content file '{0}' not found")]
    MissingFile(String),

    #[error("Content file '{file}' is not valid UTF-8")]
    NotUtf8 { file: String },

    #[error("Failed to parse content file '{file}': {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Reference text pool for {0} is empty")]
    EmptyPool(Language),

    #[error("Question {id} is invalid: {reason}")]
    InvalidQuestion { id: u32, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("Please fill in both title and content")]
    MissingFields,
}
