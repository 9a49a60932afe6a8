//! UI-facing result list state: sort, pagination and layout.

use std::cmp::Ordering;

use crate::facets;
use crate::models::{ResearchPaper, SortDirection, SortMode, ViewMode};

/// Papers shown before the first "load more".
pub const INITIAL_DISPLAY_COUNT: usize = 12;

/// Papers added by each "load more".
pub const LOAD_MORE_STEP: usize = 12;

/// Holds one result set and the user's view of it.
#[derive(Debug, Clone)]
pub struct ResultStore {
    results: Vec<ResearchPaper>,
    sort_mode: SortMode,
    sort_direction: SortDirection,
    display_count: usize,
    view_mode: ViewMode,
}

impl ResultStore {
    /// Store over `results` with default view state.
    #[must_use]
    pub fn new(results: Vec<ResearchPaper>) -> Self {
        Self {
            display_count: INITIAL_DISPLAY_COUNT.min(results.len()),
            results,
            sort_mode: SortMode::default(),
            sort_direction: SortDirection::default(),
            view_mode: ViewMode::default(),
        }
    }

    /// Swap in a new result set (a new search). Pagination restarts; sort
    /// and view preferences are kept.
    pub fn replace_results(&mut self, results: Vec<ResearchPaper>) {
        self.display_count = INITIAL_DISPLAY_COUNT.min(results.len());
        self.results = results;
    }

    /// Pick a sort mode. A new mode starts descending; picking the current
    /// mode again flips the direction.
    pub fn select_sort(&mut self, mode: SortMode) {
        if mode == self.sort_mode {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_mode = mode;
            self.sort_direction = SortDirection::Desc;
        }
    }

    /// Show the next page, never past the end of the list.
    pub fn load_more(&mut self) {
        if self.has_more() {
            self.display_count = (self.display_count + LOAD_MORE_STEP).min(self.results.len());
        }
    }

    /// Whether hidden results remain.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.display_count < self.results.len()
    }

    /// Switch layout.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Current sort mode.
    #[must_use]
    pub const fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Current sort direction.
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Current display count.
    #[must_use]
    pub const fn display_count(&self) -> usize {
        self.display_count
    }

    /// Current layout.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Total results held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the result set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// All results in the current sort order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&ResearchPaper> {
        let mut papers: Vec<&ResearchPaper> = self.results.iter().collect();
        let mode = self.sort_mode;
        match self.sort_direction {
            SortDirection::Desc => papers.sort_by(|a, b| compare(mode, b, a)),
            SortDirection::Asc => papers.sort_by(|a, b| compare(mode, a, b)),
        }
        papers
    }

    /// The page currently on screen.
    #[must_use]
    pub fn visible(&self) -> Vec<&ResearchPaper> {
        let mut papers = self.sorted();
        papers.truncate(self.display_count);
        papers
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Ascending comparison for a sort mode. Relevance ties break on citations.
fn compare(mode: SortMode, a: &ResearchPaper, b: &ResearchPaper) -> Ordering {
    match mode {
        SortMode::Relevance => facets::by_relevance(b, a),
        SortMode::Citations => a.citation_count.cmp(&b.citation_count),
        SortMode::Date => a.publication_date.cmp(&b.publication_date),
        SortMode::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}
