//! User-editable search facets.

use serde::{Deserialize, Serialize};

use super::{AcademicLevel, MethodologyCategory};

/// Facet selection applied around a search.
///
/// `open_access` and `year_range` are sent to the provider as query hints;
/// the remaining facets are applied after retrieval by `facets::filter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchFilters {
    /// Extra topic terms appended to the query text.
    #[serde(default)]
    pub topics: Vec<String>,

    /// Publication year range (inclusive).
    #[serde(default)]
    pub year_range: Option<YearRange>,

    /// Accepted academic levels (empty = any).
    #[serde(default)]
    pub academic_level: Vec<AcademicLevel>,

    /// Ask the provider for open access works only.
    #[serde(default)]
    pub open_access: bool,

    /// Citation count range (inclusive).
    #[serde(default)]
    pub citation_range: CitationRange,

    /// Accepted methodology categories (empty = any).
    #[serde(default)]
    pub methodology: Vec<MethodologyCategory>,

    /// Subfield substrings to match (empty = any).
    #[serde(default)]
    pub geography_subfields: Vec<String>,
}

impl ResearchFilters {
    /// Whether any post-retrieval facet is active.
    #[must_use]
    pub fn has_facets(&self) -> bool {
        !self.academic_level.is_empty()
            || !self.methodology.is_empty()
            || !self.geography_subfields.is_empty()
            || self.citation_range != CitationRange::default()
    }
}

/// Inclusive publication-year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First year included.
    pub start: i32,
    /// Last year included.
    pub end: i32,
}

impl YearRange {
    /// Build a range, swapping bounds given in the wrong order.
    #[must_use]
    pub fn new(start: i32, end: i32) -> Self {
        Self { start: start.min(end), end: start.max(end) }
    }
}

/// Inclusive citation-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRange {
    /// Minimum citations.
    pub min: u32,
    /// Maximum citations.
    pub max: u32,
}

impl CitationRange {
    /// Build a range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `count` lies within the range.
    #[must_use]
    pub const fn contains(&self, count: u32) -> bool {
        self.min <= count && count <= self.max
    }
}

impl Default for CitationRange {
    fn default() -> Self {
        Self { min: 0, max: u32::MAX }
    }
}
