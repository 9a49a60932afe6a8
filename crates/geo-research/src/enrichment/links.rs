//! Outbound link selection.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::models::Work;

static DOI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^10\.\d{4,}/\S+$").expect("valid DOI regex"));

const DOI_PREFIXES: &[&str] =
    &["https://doi.org/", "http://doi.org/", "https://dx.doi.org/", "http://dx.doi.org/", "doi:"];

/// Fragments that mark a search-results page rather than a record page.
const SEARCH_MARKERS: &[&str] =
    &["scholar.google.", "google.com/search", "bing.com/search", "/search?", "?q=", "&q=", "query="];

/// Strip resolver prefixes from a DOI.
#[must_use]
pub fn bare_doi(doi: &str) -> &str {
    let doi = doi.trim();
    DOI_PREFIXES
        .iter()
        .find_map(|prefix| {
            doi.get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| &doi[prefix.len()..])
        })
        .unwrap_or(doi)
}

/// Whether `doi` (bare or prefixed) looks like a real DOI.
#[must_use]
pub fn is_valid_doi(doi: &str) -> bool {
    DOI.is_match(bare_doi(doi))
}

/// Resolver URL for a valid DOI.
#[must_use]
pub fn doi_url(doi: &str) -> Option<String> {
    is_valid_doi(doi).then(|| format!("https://doi.org/{}", bare_doi(doi)))
}

/// Pick the single best outbound URL for a record.
///
/// Priority: open access copy, publisher landing page, DOI, any other
/// landing page, then the provider's own record URL. Candidates that are not
/// absolute http(s) URLs or that point at a search page are skipped. Returns
/// `None` rather than inventing a search link.
#[must_use]
pub fn resolve(work: &Work) -> Option<String> {
    let open_access = work
        .open_access
        .as_ref()
        .and_then(|oa| oa.oa_url.as_deref())
        .into_iter()
        .chain(work.best_oa_location.as_ref().and_then(|l| l.pdf_url.as_deref()));

    if let Some(url) = first_link(open_access) {
        return Some(url);
    }

    if let Some(url) =
        first_link(work.primary_location.as_ref().and_then(|l| l.landing_page_url.as_deref()))
    {
        return Some(url);
    }

    if let Some(url) = work.doi.as_deref().and_then(doi_url) {
        return Some(url);
    }

    let other_pages = work
        .best_oa_location
        .iter()
        .chain(&work.locations)
        .filter_map(|l| l.landing_page_url.as_deref());

    if let Some(url) = first_link(other_pages) {
        return Some(url);
    }

    first_link(Some(work.id.as_str()))
}

fn first_link<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Option<String> {
    candidates.into_iter().map(str::trim).find(|c| is_record_link(c)).map(str::to_string)
}

fn is_record_link(candidate: &str) -> bool {
    let Ok(url) = Url::parse(candidate) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return false;
    }
    let lower = candidate.to_lowercase();
    !SEARCH_MARKERS.iter().any(|marker| lower.contains(marker))
}
