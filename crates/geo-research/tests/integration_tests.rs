//! Integration tests against the live OpenAlex API.
//!
//! Run with: `cargo test --features integration -- --nocapture`
//! Set `OPENALEX_MAILTO` to use the polite pool.

#![cfg(feature = "integration")]

use std::sync::Arc;

use geo_research::client::{OpenAlexClient, WorksQuery};
use geo_research::config::Config;
use geo_research::models::{ResearchFilters, YearRange};
use geo_research::DiscoveryService;

fn create_config() -> Config {
    Config::new(std::env::var("OPENALEX_MAILTO").ok())
}

fn create_service() -> DiscoveryService {
    let config = create_config();
    let client = OpenAlexClient::new(config.clone()).expect("Failed to create client");
    DiscoveryService::new(Arc::new(client), &config)
}

#[tokio::test]
async fn test_live_works_search() {
    let client = OpenAlexClient::new(create_config()).expect("Failed to create client");
    let page = client
        .search(&WorksQuery::new("urban heat island", 5).sorted_by_citations())
        .await
        .expect("search failed");

    assert!(!page.results.is_empty());
    assert!(page.meta.count > 0);
    println!("Top result: {:?}", page.results[0].title_text());
}

#[tokio::test]
async fn test_live_search_with_filters() {
    let filters = ResearchFilters {
        open_access: true,
        year_range: Some(YearRange::new(2015, 2023)),
        ..Default::default()
    };
    let papers = create_service().search("climate migration", &filters).await;

    assert!(!papers.is_empty());
    assert!(papers.len() <= 50);
    for paper in &papers {
        assert!(paper.relevance_score <= 10);
        assert!(!paper.geography_subfields.is_empty());
    }
}

#[tokio::test]
async fn test_live_trending() {
    let papers = create_service().trending().await;
    assert!(papers.len() <= 10);
    for paper in &papers {
        println!("{} [{}] {}", paper.relevance_score, paper.citation_count, paper.title);
    }
}
