//! Output formatters for Markdown and JSON.

mod json;
mod markdown;

pub use self::json::*;
pub use markdown::*;

use crate::models::{ResearchPaper, ResponseFormat, ViewMode};

/// Render papers in the requested format and layout.
///
/// JSON output ignores the layout.
#[must_use]
pub fn render(papers: &[&ResearchPaper], format: ResponseFormat, view: ViewMode) -> String {
    match format {
        ResponseFormat::Json => papers_json(papers).to_string(),
        ResponseFormat::Markdown => match view {
            ViewMode::Grid => format_papers_grid(papers),
            ViewMode::List => format_papers_markdown(papers),
        },
    }
}
