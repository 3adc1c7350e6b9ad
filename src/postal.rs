//! Posten.no delivery-date client
//!
//! Fetches the upcoming delivery days for a postal code from Posten's
//! region-lookup endpoint. Every fetch goes through [`load_or_refresh`],
//! which consults the cache first: a snapshot younger than the TTL is served
//! without network access, a stale or missing one triggers a single GET with
//! a 5-second timeout.
//!
//! A non-2xx response is persisted as an empty snapshot, so the "no data"
//! outcome is itself cached for the full TTL. Timeouts and connection errors
//! leave the cache untouched.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use crate::cache::CacheStore;

/// Posten region-lookup endpoint; the postal code is appended as `postCode`
const POSTEN_BASE_URL: &str =
    "https://www.posten.no/en/delivery-mail/_/component/main/1/leftRegion/1";

/// Network timeout for the delivery-date request
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// The cached payload: upcoming delivery-date entries, soonest first.
///
/// An empty entry list is the explicit "failed fetch" marker; `{}` on disk
/// deserializes to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostalSnapshot {
    #[serde(rename = "nextDeliveryDays", default)]
    pub next_delivery_days: Vec<String>,
}

/// Errors that can occur when obtaining postal data
#[derive(Debug, Error)]
pub enum PostalError {
    /// The request did not complete within the timeout
    #[error("Request timed out")]
    Timeout,

    /// The connection could not be established
    #[error("Connection failed: {0}")]
    Connection(reqwest::Error),

    /// Any other transport failure
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The provider answered without usable delivery data (non-2xx, or a
    /// cached empty snapshot)
    #[error("No delivery data available")]
    NoData,

    /// The response body was not the expected JSON document
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The snapshot could not be persisted to the cache
    #[error("Cache write failed: {0}")]
    Cache(#[from] std::io::Error),
}

/// Client for Posten's region-lookup endpoint
#[derive(Debug, Clone)]
pub struct PostalClient {
    client: Client,
    base_url: String,
}

impl PostalClient {
    /// Creates a client with the production endpoint and a 5-second timeout.
    pub fn new() -> Result<Self, PostalError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(PostalError::Request)?;
        Ok(Self {
            client,
            base_url: POSTEN_BASE_URL.to_string(),
        })
    }

    /// Overrides the endpoint base URL. Useful for testing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Performs the GET request for the given postal code.
    ///
    /// The request carries `x-requested-with: XMLHttpRequest`, marking it as
    /// an in-page call the way the provider's own frontend issues it.
    pub async fn fetch(&self, postal_code: &str) -> Result<PostalSnapshot, PostalError> {
        let url = format!("{}?postCode={}", self.base_url, postal_code);

        let response = self
            .client
            .get(&url)
            .header("x-requested-with", "XMLHttpRequest")
            .send()
            .await
            .map_err(classify_transport_error)?;

        if !response.status().is_success() {
            return Err(PostalError::NoData);
        }

        let text = response.text().await.map_err(classify_transport_error)?;
        let snapshot: PostalSnapshot = serde_json::from_str(&text)?;
        Ok(snapshot)
    }
}

/// Splits reqwest failures into the reportable kinds: timeouts and
/// connection errors stay distinct from other transport problems.
fn classify_transport_error(e: reqwest::Error) -> PostalError {
    if e.is_timeout() {
        PostalError::Timeout
    } else if e.is_connect() {
        PostalError::Connection(e)
    } else {
        PostalError::Request(e)
    }
}

/// Returns the cached snapshot if fresh, otherwise runs `fetch` and persists
/// its outcome.
///
/// - Fresh cache: returned unchanged, no network access. An empty fresh
///   snapshot (a previously failed fetch) yields `NoData` without a retry.
/// - Successful fetch: persisted verbatim, then returned; an empty result
///   is persisted but still yields `NoData`.
/// - `NoData` fetch: an empty snapshot is persisted, poisoning the cache
///   until the TTL expires, then the error is returned.
/// - Timeout/connection/parse failures: returned without touching the cache,
///   so the next invocation retries immediately.
pub async fn load_or_refresh<F, Fut>(
    cache: &CacheStore,
    fetch: F,
) -> Result<PostalSnapshot, PostalError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<PostalSnapshot, PostalError>>,
{
    let snapshot = match cache.read_fresh() {
        Some(snapshot) => snapshot,
        None => match fetch().await {
            Ok(snapshot) => {
                cache.write(&snapshot)?;
                snapshot
            }
            Err(PostalError::NoData) => {
                cache.write(&PostalSnapshot {
                    next_delivery_days: Vec::new(),
                })?;
                return Err(PostalError::NoData);
            }
            Err(e) => return Err(e),
        },
    };

    if snapshot.next_delivery_days.is_empty() {
        return Err(PostalError::NoData);
    }
    Ok(snapshot)
}
