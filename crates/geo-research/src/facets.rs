//! Post-retrieval facet filtering and ranking.
//!
//! Open access is not checked here. `ResearchFilters::open_access` only
//! shapes the provider query, so a bronze or closed paper the provider still
//! returned passes through.

use std::cmp::Ordering;

use crate::models::{ResearchFilters, ResearchPaper};

/// Apply every active facet, then rank the survivors.
///
/// Input order is preserved among papers that tie on relevance and citations.
/// Applying the same filters twice gives the same result as applying them once.
#[must_use]
pub fn filter(papers: &[ResearchPaper], filters: &ResearchFilters) -> Vec<ResearchPaper> {
    let mut kept: Vec<ResearchPaper> =
        papers.iter().filter(|p| matches(p, filters)).cloned().collect();
    rank(&mut kept);
    kept
}

/// Whether one paper passes every active facet.
#[must_use]
pub fn matches(paper: &ResearchPaper, filters: &ResearchFilters) -> bool {
    level_matches(paper, filters)
        && filters.citation_range.contains(paper.citation_count)
        && subfield_matches(paper, filters)
        && methodology_matches(paper, filters)
}

/// Stable sort: relevance descending, then citations descending.
pub fn rank(papers: &mut [ResearchPaper]) {
    papers.sort_by(by_relevance);
}

/// Ordering used by [`rank`].
#[must_use]
pub fn by_relevance(a: &ResearchPaper, b: &ResearchPaper) -> Ordering {
    b.relevance_score
        .cmp(&a.relevance_score)
        .then_with(|| b.citation_count.cmp(&a.citation_count))
}

fn level_matches(paper: &ResearchPaper, filters: &ResearchFilters) -> bool {
    filters.academic_level.is_empty() || filters.academic_level.contains(&paper.academic_level)
}

fn subfield_matches(paper: &ResearchPaper, filters: &ResearchFilters) -> bool {
    if filters.geography_subfields.is_empty() {
        return true;
    }

    let wanted: Vec<String> =
        filters.geography_subfields.iter().map(|s| s.trim().to_lowercase()).collect();

    paper.geography_subfields.iter().any(|field| {
        let field = field.to_lowercase();
        wanted.iter().any(|w| field.contains(w.as_str()))
    })
}

fn methodology_matches(paper: &ResearchPaper, filters: &ResearchFilters) -> bool {
    if filters.methodology.is_empty() {
        return true;
    }

    let label = paper.methodology.to_lowercase();
    filters
        .methodology
        .iter()
        .flat_map(|category| category.keywords())
        .any(|keyword| label.contains(keyword))
}
