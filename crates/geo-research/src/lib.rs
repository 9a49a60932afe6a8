//! Geography research discovery and enrichment.
//!
//! Takes a free-text query plus facet filters, pulls raw bibliographic
//! records from OpenAlex, reconstructs and classifies each record into a
//! [`ResearchPaper`], scores it for relevance, and serves the result list to
//! client-side filtering, sorting and pagination.
//!
//! # Features
//!
//! - **Provider seam**: the core depends on [`client::Provider`]; the HTTP
//!   implementation is [`OpenAlexClient`]
//! - **Heuristic enrichment**: academic level, subfields, methodology, key
//!   findings and a plain-language summary (keyword substitution, not real
//!   summarization)
//! - **Failure isolation**: provider errors become empty result lists
//! - **Cached**: 5-minute TTL response cache inside the HTTP client
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use geo_research::{Config, DiscoveryService, OpenAlexClient, ResearchFilters};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = OpenAlexClient::new(config.clone())?;
//!     let service = DiscoveryService::new(Arc::new(client), &config);
//!
//!     let papers = service.search("urban heat island", &ResearchFilters::default()).await;
//!     println!("{} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod discovery;
pub mod enrichment;
pub mod error;
pub mod facets;
pub mod formatters;
pub mod models;
pub mod store;

pub use client::{OpenAlexClient, Provider};
pub use config::Config;
pub use discovery::DiscoveryService;
pub use error::{ClientError, ClientResult};
pub use models::{ResearchFilters, ResearchPaper};
pub use store::ResultStore;
