//! Academic-metadata provider.
//!
//! [`Provider`] is the seam the discovery service depends on.
//! [`OpenAlexClient`] implements it over HTTP with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - A fixed delay before each request
//! - Response caching with a configurable TTL

mod query;

pub use query::{SORT_BY_CITATIONS, WorksQuery};

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryError, RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult};
use crate::models::WorksPage;

/// Source of raw bibliographic records.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Run one search and return a single page of records.
    async fn search_works(&self, query: &WorksQuery) -> ClientResult<WorksPage>;
}

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Response cache.
    cache: Cache<String, serde_json::Value>,

    /// Polite-pool contact email (optional).
    mailto: Option<String>,

    /// API base URL.
    base_url: String,

    /// Delay before each request.
    rate_limit_delay: Duration,

    /// Per-attempt timeout, reported by [`ClientError::Timeout`].
    request_timeout: Duration,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("geo-research/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client,
            cache,
            mailto: config.mailto,
            base_url: config.base_url,
            rate_limit_delay: config.rate_limit_delay,
            request_timeout: config.request_timeout,
        })
    }

    /// Check if requests go to the polite pool.
    #[must_use]
    pub fn is_polite(&self) -> bool {
        self.mailto.is_some()
    }

    /// Search works.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search(&self, query: &WorksQuery) -> ClientResult<WorksPage> {
        let url = format!("{}/works", self.base_url);

        let mut params = query.to_params();
        params.push(("select".to_string(), fields::WORK.join(",")));
        if let Some(mailto) = &self.mailto {
            params.push(("mailto".to_string(), mailto.clone()));
        }

        tracing::debug!(search = %query.search, filter = ?query.filter_clause(), "Searching works");
        self.get(&url, &params).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let cache_key = self.cache_key("GET", url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            return serde_json::from_value(cached).map_err(ClientError::from);
        }

        tokio::time::sleep(self.rate_limit_delay).await;

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await.map_err(|err| {
            if err.is_timeout() {
                ClientError::Timeout(self.request_timeout)
            } else {
                ClientError::from(err)
            }
        })?;

        self.cache.insert(cache_key, value.clone()).await;

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Map a send failure, surfacing timeouts hidden behind the retry layer.
    fn transport_error(&self, err: reqwest_middleware::Error) -> ClientError {
        if is_timeout(&err) {
            tracing::warn!(timeout = ?self.request_timeout, "Provider request timed out");
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::from(err)
        }
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(&self, method: &str, url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(method.as_bytes());
        hasher.update(b"|");
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl Provider for OpenAlexClient {
    async fn search_works(&self, query: &WorksQuery) -> ClientResult<WorksPage> {
        self.search(query).await
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("base_url", &self.base_url)
            .field("polite", &self.is_polite())
            .finish()
    }
}

fn is_timeout(err: &reqwest_middleware::Error) -> bool {
    match err {
        reqwest_middleware::Error::Reqwest(inner) => inner.is_timeout(),
        reqwest_middleware::Error::Middleware(inner) => match inner.downcast_ref::<RetryError>() {
            Some(RetryError::WithRetries { err, .. } | RetryError::Error(err)) => is_timeout(err),
            None => false,
        },
    }
}
