use std::sync::Arc;

use moka::future::Cache;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Proxy};
use url::Url;

use super::models::{Article, FeedResponse};
use super::normalize::normalize_item;
use crate::config::{AppConfig, FeedConfig};
use crate::{Error, Result};

const MAX_PAYLOAD_BYTES: usize = 5 * 1024 * 1024;
const CLIENT_USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Client for an author's syndication feed, read through a feed-to-JSON converter
///
/// Successful results are cached per handle for the configured TTL. Each
/// fetch is a single attempt; failures are never cached.
pub struct FeedClient {
    client: Client,
    converter_url: String,
    feed_url_template: String,
    placeholder_thumbnail: String,
    cache: Option<Cache<String, Arc<Vec<Article>>>>,
}

impl FeedClient {
    /// Create a new feed client with configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let feed = &config.feed;
        let client = Self::build_client(feed)?;

        // A zero TTL turns the cache off
        let cache = (feed.cache_ttl_secs > 0).then(|| {
            Cache::builder()
                .max_capacity(feed.cache_capacity)
                .time_to_live(feed.cache_ttl())
                .build()
        });

        Ok(Self {
            client,
            converter_url: feed.converter_url.clone(),
            feed_url_template: feed.feed_url_template.clone(),
            placeholder_thumbnail: feed.placeholder_thumbnail.clone(),
            cache,
        })
    }

    /// Build HTTP client with optional proxy
    fn build_client(feed: &FeedConfig) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(feed.request_timeout())
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(ref proxy) = feed.proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for feed fetching");
        }

        builder.build().map_err(Error::Http)
    }

    /// Converter request URL for an author handle
    ///
    /// The syndication URL is built from the template and passed URL-encoded
    /// as the converter's `rss_url` parameter.
    pub fn request_url(&self, handle: &str) -> Result<Url> {
        let handle = normalize_handle(handle)?;
        let feed_url = self.feed_url_template.replace("{handle}", handle);
        Url::parse(&feed_url)?;

        Ok(Url::parse_with_params(
            &self.converter_url,
            &[("rss_url", feed_url.as_str())],
        )?)
    }

    /// Fetch articles for a handle, or an empty list if anything goes wrong.
    ///
    /// Callers render "no articles" for an empty result; the failure cause is
    /// only logged.
    pub async fn fetch_articles(&self, handle: &str) -> Vec<Article> {
        let key = match normalize_handle(handle) {
            Ok(key) => key.to_string(),
            Err(e) => {
                tracing::error!("Error fetching articles: {}", e);
                return Vec::new();
            }
        };

        let result = match &self.cache {
            // Concurrent misses for one handle share a single upstream request
            Some(cache) => cache
                .try_get_with(key.clone(), async {
                    self.try_fetch_articles(&key).await.map(Arc::new)
                })
                .await
                .map(|articles| articles.as_ref().clone())
                .map_err(|e| e.to_string()),
            None => self.try_fetch_articles(&key).await.map_err(|e| e.to_string()),
        };

        match result {
            Ok(articles) => articles,
            Err(e) => {
                tracing::error!("Error fetching articles for '{}': {}", key, e);
                Vec::new()
            }
        }
    }

    /// Single uncached fetch that reports why it failed
    pub async fn try_fetch_articles(&self, handle: &str) -> Result<Vec<Article>> {
        let url = self.request_url(handle)?;

        tracing::info!("Fetching articles from: {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        ensure_payload_size(body.len())?;

        let payload: FeedResponse = serde_json::from_slice(&body)?;
        if !payload.is_ok() {
            return Err(Error::FeedConversion(
                payload
                    .message
                    .unwrap_or_else(|| format!("status {:?}", payload.status)),
            ));
        }

        let articles: Vec<Article> = payload
            .items
            .into_iter()
            .map(|item| normalize_item(item, &self.placeholder_thumbnail))
            .collect();

        tracing::debug!("Fetched {} articles", articles.len());

        Ok(articles)
    }

    /// Drop the cached result for one handle
    pub async fn invalidate(&self, handle: &str) {
        if let (Some(cache), Ok(key)) = (&self.cache, normalize_handle(handle)) {
            cache.invalidate(key).await;
        }
    }

    /// Drop every cached result
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }
}

/// Trim the handle and drop a leading `@`
fn normalize_handle(handle: &str) -> Result<&str> {
    let trimmed = handle.trim();
    let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);

    if bare.is_empty() || bare.contains(|c: char| c.is_whitespace() || c == '/') {
        return Err(Error::InvalidHandle(handle.to_string()));
    }

    Ok(bare)
}

fn ensure_payload_size(size: usize) -> Result<()> {
    if size > MAX_PAYLOAD_BYTES {
        return Err(Error::PayloadTooLarge(size));
    }
    Ok(())
}
