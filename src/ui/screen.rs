use ratatui::{buffer::Buffer, layout::Rect};

use crate::app::{App, Page};

/// A UI Screen boundary: renders one page of the app into its area
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
    /// Key legend shown under the page
    fn help(&self, app: &App) -> &'static str;
}

/// Helper to construct the appropriate screen for the current page
pub fn current_screen(page: Page) -> Box<dyn Screen> {
    match page {
        Page::Dashboard => Box::new(super::dashboard::DashboardScreen),
        Page::Typing => Box::new(super::typing::TypingScreen),
        Page::Mcq => Box::new(super::mcq::McqScreen),
        Page::Syllabus => Box::new(super::syllabus::SyllabusScreen),
        Page::Notes => Box::new(super::notes::NotesScreen),
    }
}
