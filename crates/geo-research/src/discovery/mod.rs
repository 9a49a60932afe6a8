//! Query service: provider search → normalization → facets.
//!
//! Every public operation returns a plain `Vec`. Provider failures and empty
//! responses look the same to callers; failures are logged and collapsed to
//! an empty list one call at a time.

mod catalog;

pub use catalog::{CATEGORY_QUERIES, TRENDING_TOPICS, category_query};

use std::sync::Arc;

use futures::future::join_all;

use crate::client::{Provider, WorksQuery};
use crate::config::Config;
use crate::enrichment::Normalizer;
use crate::error::ClientResult;
use crate::facets;
use crate::models::{ResearchFilters, ResearchPaper};

/// Papers kept from each trending topic.
pub const TRENDING_PER_TOPIC: usize = 2;

/// Papers returned by `trending`.
pub const TRENDING_LIMIT: usize = 10;

/// Papers returned by `recommendations_for`.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Research discovery entry point used by the UI layer.
#[derive(Clone)]
pub struct DiscoveryService {
    provider: Arc<dyn Provider>,
    normalizer: Normalizer,
    page_size: u32,
    max_results: usize,
}

impl DiscoveryService {
    /// Create a service over a provider, sized by `config`.
    #[must_use]
    pub fn new(provider: Arc<dyn Provider>, config: &Config) -> Self {
        Self {
            provider,
            normalizer: Normalizer::new(),
            page_size: config.page_size,
            max_results: config.max_results,
        }
    }

    /// Replace the normalizer (e.g. to pin the scoring date).
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Search the provider and return filtered, ranked papers (at most
    /// `max_results`). Returns an empty list if the provider fails.
    pub async fn search(&self, query: &str, filters: &ResearchFilters) -> Vec<ResearchPaper> {
        or_empty(query, self.try_search(query, filters).await)
    }

    /// Like [`search`](Self::search) but surfaces the provider error.
    pub async fn try_search(
        &self,
        query: &str,
        filters: &ResearchFilters,
    ) -> ClientResult<Vec<ResearchPaper>> {
        let request = WorksQuery::new(query_text(query, filters), self.page_size)
            .sorted_by_citations()
            .open_access_only(filters.open_access)
            .published_within(filters.year_range);

        let page = self.provider.search_works(&request).await?;
        let received = page.results.len();

        let papers: Vec<ResearchPaper> = page
            .results
            .iter()
            .filter(|work| {
                let usable = work.is_usable();
                if !usable {
                    tracing::debug!(id = %work.id, "Dropping record without title or abstract");
                }
                usable
            })
            .map(|work| self.normalizer.normalize(work))
            .collect();

        let mut results = facets::filter(&papers, filters);
        results.truncate(self.max_results);

        tracing::info!(
            query = %request.search,
            received,
            normalized = papers.len(),
            returned = results.len(),
            "Search complete"
        );
        Ok(results)
    }

    /// Search a preset category. Unknown labels are searched as typed.
    pub async fn by_category(&self, label: &str) -> Vec<ResearchPaper> {
        self.search(category_query(label), &ResearchFilters::default()).await
    }

    /// Top papers across the fixed trending topics.
    ///
    /// Topic searches run concurrently but are merged in topic order, two
    /// papers per topic, then ranked by relevance and citations. A failing
    /// topic contributes nothing and does not affect the others.
    pub async fn trending(&self) -> Vec<ResearchPaper> {
        let filters = ResearchFilters::default();
        let outcomes =
            join_all(TRENDING_TOPICS.iter().map(|topic| self.try_search(topic, &filters))).await;

        let mut merged: Vec<ResearchPaper> = TRENDING_TOPICS
            .iter()
            .zip(outcomes)
            .flat_map(|(topic, outcome)| or_empty(topic, outcome).into_iter().take(TRENDING_PER_TOPIC))
            .collect();

        facets::rank(&mut merged);
        merged.truncate(TRENDING_LIMIT);
        merged
    }

    /// Papers similar to `paper`, found by its subfields and methodology.
    pub async fn recommendations_for(&self, paper: &ResearchPaper) -> Vec<ResearchPaper> {
        let mut terms = paper.geography_subfields.clone();
        terms.push(paper.methodology.clone());

        self.search(&terms.join(" "), &ResearchFilters::default())
            .await
            .into_iter()
            .filter(|candidate| candidate.id != paper.id)
            .take(RECOMMENDATION_LIMIT)
            .collect()
    }
}

impl std::fmt::Debug for DiscoveryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryService")
            .field("page_size", &self.page_size)
            .field("max_results", &self.max_results)
            .field("today", &self.normalizer.today())
            .finish()
    }
}

/// User query with facet topics appended.
fn query_text(query: &str, filters: &ResearchFilters) -> String {
    std::iter::once(query)
        .chain(filters.topics.iter().map(String::as_str))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_empty(query: &str, outcome: ClientResult<Vec<ResearchPaper>>) -> Vec<ResearchPaper> {
    outcome.unwrap_or_else(|err| {
        tracing::warn!(
            query,
            error = %err,
            retryable = err.is_retryable(),
            retry_after = ?err.retry_after(),
            "Provider search failed, returning no results"
        );
        Vec::new()
    })
}
