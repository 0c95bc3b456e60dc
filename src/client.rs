use std::fmt;
use std::sync::Arc;

use reqwest::{header, StatusCode};
use tokio::time::sleep;

use crate::{
    backoff::BackoffPolicy, throttle::Throttle, wire::PageBody, ClientOptions, FetchStatus,
    HealthDataError, Page, RecordSet, Result,
};

/// Header carrying the API credential on every request.
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
/// HTTP client for a paginated patient-records endpoint.
///
/// One instance drives one request at a time: pages are fetched strictly
/// sequentially because page N's continuation decision depends on page N's
/// content. Clones share the throttle, so a cloned client still honors the
/// configured request budget.
pub struct HealthDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    options: ClientOptions,
    throttle: Arc<Throttle>,
    backoff: BackoffPolicy,
}

impl fmt::Debug for HealthDataClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthDataClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl HealthDataClient {
    /// Creates a client with default [`ClientOptions`].
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let options = ClientOptions::default();
        let throttle = Arc::new(Throttle::new(options.requests_per_second));
        let backoff = BackoffPolicy::new(options.initial_delay_ms);
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            options,
            throttle,
            backoff,
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `HEALTHDATA_BASE_URL` — records endpoint URL
    /// - `HEALTHDATA_API_KEY` — credential sent as the `x-api-key` header
    ///
    /// Returns an error if either variable is missing or empty.
    pub fn from_env() -> std::result::Result<Self, String> {
        let url = std::env::var("HEALTHDATA_BASE_URL")
            .map_err(|_| "missing HEALTHDATA_BASE_URL environment variable".to_owned())?;
        let api_key = std::env::var("HEALTHDATA_API_KEY")
            .map_err(|_| "missing HEALTHDATA_API_KEY environment variable".to_owned())?;
        if url.trim().is_empty() {
            return Err("HEALTHDATA_BASE_URL is set but empty".to_owned());
        }
        if api_key.trim().is_empty() {
            return Err("HEALTHDATA_API_KEY is set but empty".to_owned());
        }
        Ok(Self::new(url, api_key))
    }

    /// Applies client options such as retry and throttle behavior.
    ///
    /// Rebuilds the throttle, so the new request budget takes effect from the
    /// next request.
    ///
    /// # Panics
    ///
    /// Panics if `initial_delay_ms`, `requests_per_second`, or `page_size` is
    /// not greater than zero. A zero request budget has no meaningful throttle
    /// interval, and a zero page size can never observe a short final page.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        assert!(
            opts.initial_delay_ms > 0,
            "initial_delay_ms must be greater than zero"
        );
        assert!(
            opts.requests_per_second > 0.0,
            "requests_per_second must be greater than zero"
        );
        assert!(opts.page_size > 0, "page_size must be greater than zero");
        self.throttle = Arc::new(Throttle::new(opts.requests_per_second));
        self.backoff = BackoffPolicy::new(opts.initial_delay_ms);
        self.options = opts;
        self
    }

    /// Fetches every page of the collection and returns the accumulated
    /// records together with a completion status.
    ///
    /// The loop stops when a page comes back short, empty, or flagged
    /// `hasNext: false`. A terminal fetch error does not propagate: the run
    /// aborts and everything fetched so far is returned with
    /// [`FetchStatus::Aborted`] carrying the error.
    pub async fn fetch_all(&self) -> RecordSet {
        let mut records = Vec::new();
        let mut page_number = 1u32;

        loop {
            let page = match self.fetch_page(page_number).await {
                Ok(page) => page,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("aborting pagination at page {}: {}", page_number, err);
                    return RecordSet {
                        records,
                        status: FetchStatus::Aborted(err),
                    };
                }
            };

            if page.records.is_empty() {
                break;
            }

            let short_page = page.records.len() < self.options.page_size;
            let last_page = page.has_next == Some(false);
            records.extend(page.records);

            if short_page || last_page {
                break;
            }
            page_number += 1;
        }

        RecordSet {
            records,
            status: FetchStatus::Complete,
        }
    }

    /// Fetches a single page, retrying transient failures.
    ///
    /// Each physical attempt first waits on the throttle. Server errors and
    /// transport failures are retried up to `max_retries` times with
    /// exponential backoff; HTTP 429 is always retried without consuming the
    /// retry budget (the backoff attempt counter still advances, so waits keep
    /// growing under sustained rate limiting). HTTP 401/403 fails immediately.
    pub async fn fetch_page(&self, page: u32) -> Result<Page> {
        let url = format!(
            "{}?page={page}&limit={}",
            self.base_url, self.options.page_size
        );
        let mut attempt = 0usize;

        loop {
            self.throttle.acquire().await;

            let response = self
                .http
                .get(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .header(header::CONTENT_TYPE, "application/json")
                .send()
                .await;

            match response {
                Ok(response) => {
                    let status = response.status();
                    // A failure while streaming the body is a transport error
                    // like any other: retryable within the budget.
                    let body = match response.text().await {
                        Ok(body) => body,
                        Err(err) => {
                            if attempt < self.options.max_retries {
                                #[cfg(feature = "tracing")]
                                tracing::debug!(
                                    "transport error reading page {} body, attempt {}: {}",
                                    page,
                                    attempt,
                                    err
                                );
                                self.wait_before_retry(attempt).await;
                                attempt += 1;
                                continue;
                            }
                            return Err(HealthDataError::Transport(err));
                        }
                    };

                    if status.is_success() {
                        let parsed: PageBody = serde_json::from_str(&body).map_err(|err| {
                            HealthDataError::Decode(format!(
                                "invalid page response JSON: {err}; body: {body}"
                            ))
                        })?;
                        return Ok(parsed.into_page());
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        // Rate limiting never exhausts the retry budget; the
                        // server is asking us to slow down, not failing.
                        #[cfg(feature = "tracing")]
                        tracing::debug!("rate limited on page {}, attempt {}", page, attempt);
                        self.wait_before_retry(attempt).await;
                        attempt += 1;
                        continue;
                    }

                    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                        return Err(HealthDataError::Authentication {
                            status: status.as_u16(),
                        });
                    }

                    if status.is_server_error() {
                        if attempt < self.options.max_retries {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(
                                "server error {} on page {}, attempt {}",
                                status,
                                page,
                                attempt
                            );
                            self.wait_before_retry(attempt).await;
                            attempt += 1;
                            continue;
                        }
                        return Err(HealthDataError::RetriesExhausted {
                            attempts: attempt + 1,
                            status: status.as_u16(),
                            body,
                        });
                    }

                    return Err(HealthDataError::Http {
                        status: status.as_u16(),
                        body,
                    });
                }
                Err(err) => {
                    if attempt < self.options.max_retries {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            "transport error on page {}, attempt {}: {}",
                            page,
                            attempt,
                            err
                        );
                        self.wait_before_retry(attempt).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(HealthDataError::Transport(err));
                }
            }
        }
    }

    async fn wait_before_retry(&self, attempt: usize) {
        let delay = self.backoff.delay(attempt);

        #[cfg(feature = "tracing")]
        tracing::debug!("retrying page request after {} ms", delay.as_millis());

        sleep(delay).await;
    }
}
