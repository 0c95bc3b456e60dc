//! `healthdata-http` is an async HTTP client for paginated patient-record APIs.
//!
//! The crate wraps a rate-limited, occasionally-flaky records endpoint with:
//! - [`HealthDataClient::fetch_page`] — one logical page fetch with throttling
//!   and retry/backoff
//! - [`HealthDataClient::fetch_all`] — the pagination loop, accumulating every
//!   record until the collection is exhausted
//! - [`validate`] and [`risk`] — pure helpers for downstream consumers of the
//!   fetched records

mod backoff;
mod client;
mod error;
mod options;
mod throttle;
mod types;
mod wire;

pub mod risk;
pub mod validate;

pub use client::HealthDataClient;
pub use error::HealthDataError;
pub use options::ClientOptions;
pub use types::{FetchStatus, Page, Record, RecordSet};

pub type Result<T> = std::result::Result<T, HealthDataError>;
