//! Canonical research paper served to the UI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AcademicLevel, OpenAccessStatus};

/// Placeholder stored when the provider gave no extractable abstract.
pub const NO_ABSTRACT: &str = "No abstract available";

/// A normalized, classified and scored research paper.
///
/// Built once per query execution by `enrichment::Normalizer`; never
/// patched afterwards. A re-fetch produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchPaper {
    /// Provider record id, unique per record.
    pub id: String,

    /// Paper title (never empty).
    pub title: String,

    /// Authors in provider order.
    pub authors: Vec<PaperAuthor>,

    /// Abstract text or [`NO_ABSTRACT`].
    pub r#abstract: String,

    /// Simplified restatement of the opening of the abstract.
    pub summary: String,

    /// Publication date.
    pub publication_date: NaiveDate,

    /// Journal or venue.
    #[serde(default)]
    pub journal: Option<String>,

    /// Digital Object Identifier (bare, without resolver prefix).
    #[serde(default)]
    pub doi: Option<String>,

    /// Best outbound link.
    #[serde(default)]
    pub url: Option<String>,

    /// Number of citing works.
    pub citation_count: u32,

    /// Open access colour.
    pub open_access_status: OpenAccessStatus,

    /// One to three geography subfield labels.
    pub geography_subfields: Vec<String>,

    /// Reading level.
    pub academic_level: AcademicLevel,

    /// Methodology label.
    pub methodology: String,

    /// Up to three finding sentences.
    pub key_findings: Vec<String>,

    /// Heuristic score in `0..=10`.
    pub relevance_score: u8,
}

impl ResearchPaper {
    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
    }

    /// First author's name, if any.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(|a| a.name.as_str())
    }

    /// Whether the abstract is the placeholder.
    #[must_use]
    pub fn has_abstract(&self) -> bool {
        self.r#abstract != NO_ABSTRACT
    }
}

/// Author entry on a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperAuthor {
    /// Display name.
    pub name: String,

    /// First listed affiliation.
    #[serde(default)]
    pub affiliation: Option<String>,

    /// Provider author id or ORCID.
    #[serde(default)]
    pub external_id: Option<String>,
}
