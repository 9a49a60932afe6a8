//! Provider query parameters.

use crate::models::YearRange;

/// Sort directive asking the provider for most-cited works first.
pub const SORT_BY_CITATIONS: &str = "cited_by_count:desc";

/// One provider search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksQuery {
    /// Free-text search.
    pub search: String,

    /// Records per page.
    pub per_page: u32,

    /// Sort directive.
    pub sort: Option<String>,

    /// Only open access works.
    pub open_access: bool,

    /// Publication year window.
    pub years: Option<YearRange>,
}

impl WorksQuery {
    /// Query with the given text and page size, no filters.
    #[must_use]
    pub fn new(search: impl Into<String>, per_page: u32) -> Self {
        Self { search: search.into(), per_page, sort: None, open_access: false, years: None }
    }

    /// Ask for the most cited works first.
    #[must_use]
    pub fn sorted_by_citations(mut self) -> Self {
        self.sort = Some(SORT_BY_CITATIONS.to_string());
        self
    }

    /// Restrict to open access works.
    #[must_use]
    pub const fn open_access_only(mut self, open_access: bool) -> Self {
        self.open_access = open_access;
        self
    }

    /// Restrict to a publication year window.
    #[must_use]
    pub const fn published_within(mut self, years: Option<YearRange>) -> Self {
        self.years = years;
        self
    }

    /// Comma-joined OpenAlex `filter` clauses, if any.
    #[must_use]
    pub fn filter_clause(&self) -> Option<String> {
        let mut clauses = Vec::new();

        if self.open_access {
            clauses.push("is_oa:true".to_string());
        }
        if let Some(years) = self.years {
            clauses.push(format!("from_publication_date:{}-01-01", years.start));
            clauses.push(format!("to_publication_date:{}-12-31", years.end));
        }

        (!clauses.is_empty()).then(|| clauses.join(","))
    }

    /// Query-string pairs for the `/works` endpoint.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("search".to_string(), self.search.clone()),
            ("per-page".to_string(), self.per_page.to_string()),
        ];

        if let Some(sort) = &self.sort {
            params.push(("sort".to_string(), sort.clone()));
        }
        if let Some(filter) = self.filter_clause() {
            params.push(("filter".to_string(), filter));
        }

        params
    }
}
