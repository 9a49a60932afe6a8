//! Enumeration types for the domain model, filters and result views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

impl ResponseFormat {
    /// Check if this is markdown format.
    #[must_use]
    pub const fn is_markdown(self) -> bool {
        matches!(self, Self::Markdown)
    }

    /// Check if this is JSON format.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Open access colour of a paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenAccessStatus {
    /// Free on the publisher site.
    Gold,
    /// Free in a repository.
    Green,
    /// Free to read on the publisher site without a licence.
    Bronze,
    /// Paywalled.
    #[default]
    Closed,
}

impl OpenAccessStatus {
    /// Map a provider status string.
    ///
    /// `diamond` and `hybrid` are publisher-hosted and count as gold. Unknown
    /// or missing statuses fall back to green when the record is flagged open,
    /// closed otherwise.
    #[must_use]
    pub fn from_provider(status: Option<&str>, is_oa: bool) -> Self {
        match status.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("gold" | "diamond" | "hybrid") => Self::Gold,
            Some("green") => Self::Green,
            Some("bronze") => Self::Bronze,
            Some("closed") => Self::Closed,
            _ if is_oa => Self::Green,
            _ => Self::Closed,
        }
    }

    /// Whether any free copy exists.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Green => "green",
            Self::Bronze => "bronze",
            Self::Closed => "closed",
        }
    }
}

/// Reading level a paper is pitched at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicLevel {
    /// Accessible introductory material.
    #[default]
    Undergraduate,
    /// Assumes research-methods background.
    Graduate,
    /// Specialist or theory-heavy.
    Advanced,
}

impl AcademicLevel {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcademicLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "undergraduate" => Ok(Self::Undergraduate),
            "graduate" => Ok(Self::Graduate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown academic level '{other}'")),
        }
    }
}

/// Methodology facet offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodologyCategory {
    /// Statistical, survey and GIS work.
    Quantitative,
    /// Interviews, ethnography, case studies.
    Qualitative,
    /// Mixed methods designs.
    Mixed,
    /// Theory, reviews and meta-analyses.
    Theoretical,
}

impl MethodologyCategory {
    /// Keywords a methodology label must contain to fall in this category.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Quantitative => &["statistical", "regression", "survey", "gis"],
            Self::Qualitative => &["interview", "ethnograph", "case study"],
            Self::Mixed => &["mixed methods"],
            Self::Theoretical => &["theoretical", "review", "meta-analysis"],
        }
    }
}

impl FromStr for MethodologyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantitative" => Ok(Self::Quantitative),
            "qualitative" => Ok(Self::Qualitative),
            "mixed" => Ok(Self::Mixed),
            "theoretical" => Ok(Self::Theoretical),
            other => Err(format!("unknown methodology category '{other}'")),
        }
    }
}

/// Sort key for the result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Relevance score, ties by citations.
    #[default]
    Relevance,
    /// Citation count.
    Citations,
    /// Publication date.
    Date,
    /// Title, case-insensitive.
    Title,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "citations" => Ok(Self::Citations),
            "date" => Ok(Self::Date),
            "title" => Ok(Self::Title),
            other => Err(format!("unknown sort mode '{other}'")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Result list layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Detailed list.
    List,
}
