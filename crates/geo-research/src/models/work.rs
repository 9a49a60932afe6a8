//! Raw work records matching the OpenAlex `/works` schema.
//!
//! Every field is optional on the wire; missing data degrades to defaults
//! during normalization instead of failing the page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::api::RECORD_ID_PREFIX;

/// Abstract representation: word to the positions it occupies.
pub type InvertedIndex = BTreeMap<String, Vec<usize>>;

/// A single bibliographic record as returned by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// Provider record id (usually `https://openalex.org/W…`).
    #[serde(default)]
    pub id: String,

    /// DOI, often as a `https://doi.org/…` URL.
    #[serde(default)]
    pub doi: Option<String>,

    /// Work title.
    #[serde(default)]
    pub title: Option<String>,

    /// Display name (same as title for most works).
    #[serde(default)]
    pub display_name: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Publication date (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Authorships in byline order.
    #[serde(default)]
    pub authorships: Vec<Authorship>,

    /// Where the version of record lives.
    #[serde(default)]
    pub primary_location: Option<Location>,

    /// Best open access copy.
    #[serde(default)]
    pub best_oa_location: Option<Location>,

    /// Every known location.
    #[serde(default)]
    pub locations: Vec<Location>,

    /// Open access metadata.
    #[serde(default)]
    pub open_access: Option<OpenAccess>,

    /// Number of citing works.
    #[serde(default)]
    pub cited_by_count: Option<i64>,

    /// Concept tags.
    #[serde(default)]
    pub concepts: Vec<Tag>,

    /// Topic tags.
    #[serde(default)]
    pub topics: Vec<Tag>,

    /// Abstract as an inverted index.
    #[serde(default)]
    pub abstract_inverted_index: Option<InvertedIndex>,

    /// Plain-text abstract, for sources that ship one.
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
}

impl Work {
    /// Record id without the provider URL prefix.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.strip_prefix(RECORD_ID_PREFIX).unwrap_or(&self.id)
    }

    /// Title, falling back to the display name. Blank values count as missing.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        [self.title.as_deref(), self.display_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|t| !t.is_empty())
    }

    /// Whether the record carries any abstract text at all.
    #[must_use]
    pub fn has_abstract(&self) -> bool {
        self.abstract_text.as_deref().is_some_and(|a| !a.trim().is_empty())
            || self
                .abstract_inverted_index
                .as_ref()
                .is_some_and(|index| index.values().any(|positions| !positions.is_empty()))
    }

    /// A record is usable unless it lacks both a title and abstract text.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.title_text().is_some() || self.has_abstract()
    }

    /// Journal or venue name from the primary location.
    #[must_use]
    pub fn venue(&self) -> Option<&str> {
        self.primary_location.as_ref()?.source.as_ref()?.display_name.as_deref()
    }

    /// Citation count, clamped at zero.
    #[must_use]
    pub fn citations(&self) -> u32 {
        self.cited_by_count.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Concept tags followed by topic tags, in provider order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.concepts
            .iter()
            .chain(&self.topics)
            .filter_map(|tag| tag.display_name.as_deref())
    }
}

/// One author position on a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    /// The author.
    #[serde(default)]
    pub author: AuthorInfo,

    /// Institutions listed for this authorship.
    #[serde(default)]
    pub institutions: Vec<Institution>,

    /// Affiliation strings exactly as printed.
    #[serde(default)]
    pub raw_affiliation_strings: Vec<String>,
}

/// Author identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorInfo {
    /// Provider author id.
    #[serde(default)]
    pub id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// ORCID URL.
    #[serde(default)]
    pub orcid: Option<String>,
}

/// Institution attached to an authorship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Institution {
    /// Institution name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A place where a copy of the work is hosted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    /// Landing page URL.
    #[serde(default)]
    pub landing_page_url: Option<String>,

    /// Direct PDF URL.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// Hosting source (journal, repository).
    #[serde(default)]
    pub source: Option<Source>,
}

/// Journal or repository hosting a location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    /// Source name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Open access metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAccess {
    /// Whether any free copy exists.
    #[serde(default)]
    pub is_oa: bool,

    /// OA colour: gold, green, hybrid, bronze, diamond, closed.
    #[serde(default)]
    pub oa_status: Option<String>,

    /// Best free URL.
    #[serde(default)]
    pub oa_url: Option<String>,
}

/// Concept or topic tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Provider confidence.
    #[serde(default)]
    pub score: Option<f64>,
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorksPage {
    /// Paging metadata.
    #[serde(default)]
    pub meta: PageMeta,

    /// Records on this page.
    #[serde(default)]
    pub results: Vec<Work>,
}

/// Paging metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total matching records.
    #[serde(default)]
    pub count: i64,

    /// Current page number.
    #[serde(default)]
    pub page: Option<i32>,

    /// Records per page.
    #[serde(default)]
    pub per_page: Option<i32>,
}
