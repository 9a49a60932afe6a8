//! Configuration for the research discovery pipeline.

use std::time::Duration;

/// Provider configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAlex API.
    pub const BASE_URL: &str = "https://api.openalex.org";

    /// Prefix OpenAlex puts on every record id.
    pub const RECORD_ID_PREFIX: &str = "https://openalex.org/";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Retries for transient failures (timeouts, 5xx, connection resets).
    pub const MAX_RETRIES: u32 = 3;

    /// Delay between requests outside the polite pool (~10 req/s).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(100);

    /// Delay between requests when a contact email is supplied.
    pub const RATE_LIMIT_DELAY_POLITE: Duration = Duration::from_millis(10);

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 500;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Records requested per provider page.
    pub const PAGE_SIZE: u32 = 100;

    /// Results kept after facet filtering.
    pub const MAX_RESULTS: usize = 50;
}

/// Work fields requested from the provider.
pub mod fields {
    /// Fields needed to build a `ResearchPaper`.
    pub const WORK: &[&str] = &[
        "id",
        "doi",
        "title",
        "display_name",
        "publication_year",
        "publication_date",
        "authorships",
        "primary_location",
        "best_oa_location",
        "locations",
        "open_access",
        "cited_by_count",
        "concepts",
        "topics",
        "abstract_inverted_index",
    ];
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact email for the OpenAlex polite pool (optional).
    pub mailto: Option<String>,

    /// Base URL for the provider (overridable for mock servers).
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retries for transient failures before giving up.
    pub max_retries: u32,

    /// Delay before each provider request.
    pub rate_limit_delay: Duration,

    /// Response cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cached responses.
    pub cache_max_size: u64,

    /// Records requested per search.
    pub page_size: u32,

    /// Results returned by a search after filtering.
    pub max_results: usize,
}

impl Config {
    /// Create a new configuration with an optional polite-pool email.
    ///
    /// Requests carrying a `mailto` are routed to the faster polite pool,
    /// so the rate-limit delay drops accordingly.
    #[must_use]
    pub fn new(mailto: Option<String>) -> Self {
        let polite = mailto.is_some();
        Self {
            mailto,
            base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            rate_limit_delay: if polite {
                api::RATE_LIMIT_DELAY_POLITE
            } else {
                api::RATE_LIMIT_DELAY
            },
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            page_size: api::PAGE_SIZE,
            max_results: api::MAX_RESULTS,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            mailto: None,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: api::MAX_RETRIES,
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            cache_ttl: Duration::from_secs(0),          // No caching in tests
            cache_max_size: 0,
            page_size: api::PAGE_SIZE,
            max_results: api::MAX_RESULTS,
        }
    }

    /// Create configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mailto = std::env::var("OPENALEX_MAILTO").ok().filter(|m| !m.trim().is_empty());
        let mut config = Self::new(mailto);

        if let Ok(url) = std::env::var("OPENALEX_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(size) = std::env::var("GEO_RESEARCH_PAGE_SIZE") {
            config.page_size = size.parse()?;
        }
        if let Ok(max) = std::env::var("GEO_RESEARCH_MAX_RESULTS") {
            config.max_results = max.parse()?;
        }

        Ok(config)
    }

    /// Check if a polite-pool email is configured.
    #[must_use]
    pub const fn is_polite(&self) -> bool {
        self.mailto.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
