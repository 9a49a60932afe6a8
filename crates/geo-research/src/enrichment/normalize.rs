//! Raw record → `ResearchPaper`.

use chrono::{NaiveDate, Utc};

use super::{classify, links, text};
use crate::models::{NO_ABSTRACT, OpenAccessStatus, PaperAuthor, ResearchPaper, Work};

/// Title used when a record has abstract text but no title.
pub const UNTITLED: &str = "Untitled";

/// Turns provider records into classified, scored papers.
///
/// Pure and total: malformed fields degrade to defaults, never to errors.
/// The reference date drives recency scoring and the fallback publication
/// date, so tests can pin it.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    today: NaiveDate,
}

impl Normalizer {
    /// Normalizer anchored at the current UTC date.
    #[must_use]
    pub fn new() -> Self {
        Self { today: Utc::now().date_naive() }
    }

    /// Normalizer anchored at a fixed date.
    #[must_use]
    pub const fn at(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The reference date.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Build a `ResearchPaper` from one record.
    #[must_use]
    pub fn normalize(&self, work: &Work) -> ResearchPaper {
        let title = work.title_text().unwrap_or(UNTITLED).to_string();
        let abstract_text = abstract_text(work);
        let publication_date = self.publication_date(work);
        let open_access_status = open_access_status(work);
        let citation_count = work.citations();

        let relevance_score = classify::relevance_score(
            &classify::ScoreInputs {
                open_access: open_access_status,
                published: publication_date,
                citations: citation_count,
                abstract_text: &abstract_text,
            },
            self.today,
        );

        ResearchPaper {
            id: work.short_id().to_string(),
            academic_level: classify::academic_level(&title, &abstract_text),
            geography_subfields: classify::geography_subfields(work.tag_names()),
            methodology: classify::methodology(&abstract_text).to_string(),
            key_findings: classify::key_findings(&abstract_text),
            summary: classify::summary(&abstract_text),
            authors: authors(work),
            journal: work.venue().map(str::to_string),
            doi: work
                .doi
                .as_deref()
                .map(links::bare_doi)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            url: links::resolve(work),
            title,
            r#abstract: abstract_text,
            publication_date,
            citation_count,
            open_access_status,
            relevance_score,
        }
    }

    /// Provider date, else January 1 of the provider year, else today.
    fn publication_date(&self, work: &Work) -> NaiveDate {
        work.publication_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
            .or_else(|| work.publication_year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)))
            .unwrap_or(self.today)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text abstract if present, else the reconstructed index, else the placeholder.
fn abstract_text(work: &Work) -> String {
    if let Some(plain) = work.abstract_text.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        return plain.to_string();
    }

    let rebuilt = text::reconstruct(work.abstract_inverted_index.as_ref());
    if rebuilt.trim().is_empty() {
        NO_ABSTRACT.to_string()
    } else {
        rebuilt
    }
}

fn open_access_status(work: &Work) -> OpenAccessStatus {
    work.open_access
        .as_ref()
        .map(|oa| OpenAccessStatus::from_provider(oa.oa_status.as_deref(), oa.is_oa))
        .unwrap_or_default()
}

fn authors(work: &Work) -> Vec<PaperAuthor> {
    work.authorships
        .iter()
        .filter_map(|authorship| {
            let name = authorship.author.display_name.as_deref()?.trim();
            if name.is_empty() {
                return None;
            }

            let affiliation = authorship
                .institutions
                .iter()
                .filter_map(|i| i.display_name.as_deref())
                .chain(authorship.raw_affiliation_strings.iter().map(String::as_str))
                .map(str::trim)
                .find(|a| !a.is_empty())
                .map(str::to_string);

            let external_id = authorship
                .author
                .orcid
                .as_deref()
                .or(authorship.author.id.as_deref())
                .map(str::to_string);

            Some(PaperAuthor { name: name.to_string(), affiliation, external_id })
        })
        .collect()
}
