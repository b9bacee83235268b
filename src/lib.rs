// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod mcq;
pub mod notes;
pub mod runtime;
pub mod scoring;
pub mod syllabus;
pub mod texts;
pub mod typing;
pub mod ui;
pub mod util;
