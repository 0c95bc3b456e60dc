/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum HealthDataError {
    /// Network or request execution error from `reqwest`, surfaced once
    /// retries are exhausted.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// HTTP 401 or 403. Never retried.
    #[error("authentication rejected with http {status}")]
    Authentication { status: u16 },
    /// Server errors persisted through every allowed retry.
    #[error("retries exhausted after {attempts} attempts, last http {status}: {body}")]
    RetriesExhausted {
        /// Total attempts issued, including the initial one.
        attempts: usize,
        /// Status of the last failed attempt.
        status: u16,
        /// Raw body of the last failed attempt.
        body: String,
    },
    /// Non-success HTTP status outside the retryable and auth classes.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response body did not match either accepted page shape.
    #[error("decode error: {0}")]
    Decode(String),
}
