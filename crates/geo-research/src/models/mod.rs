//! Data models: raw provider records, the canonical paper, and search facets.
//!
//! Raw records use `#[serde(default)]` on every field so partial provider
//! payloads still deserialize; the domain model serializes camelCase.

mod enums;
mod filters;
mod paper;
mod work;

pub use enums::{
    AcademicLevel, MethodologyCategory, OpenAccessStatus, ResponseFormat, SortDirection, SortMode,
    ViewMode,
};
pub use filters::{CitationRange, ResearchFilters, YearRange};
pub use paper::{NO_ABSTRACT, PaperAuthor, ResearchPaper};
pub use work::{
    AuthorInfo, Authorship, Institution, InvertedIndex, Location, OpenAccess, PageMeta, Source,
    Tag, Work, WorksPage,
};
