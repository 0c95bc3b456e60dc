/// Configures retry, throttle, and pagination behavior.
///
/// All numeric fields must be greater than zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientOptions {
    /// Maximum number of retries after the initial attempt. Rate-limit
    /// responses (HTTP 429) are retried without counting against this budget.
    pub max_retries: usize,
    /// Base retry backoff in milliseconds (exponential strategy with jitter).
    pub initial_delay_ms: u64,
    /// Request budget enforced by the throttle.
    pub requests_per_second: f64,
    /// Records requested per page; a shorter page signals end of collection.
    pub page_size: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay_ms: 1_000,
            requests_per_second: 2.0,
            page_size: 10,
        }
    }
}
