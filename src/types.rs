use crate::HealthDataError;

/// A single fetched record. Records are opaque to the fetching core; only
/// their count per page matters to the pagination loop.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// One page of the remote collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// Records in arrival order.
    pub records: Vec<Record>,
    /// Explicit continuation flag, when the API sends one.
    pub has_next: Option<bool>,
}

/// Outcome of a full pagination run.
///
/// `fetch_all` never fails outright: an error mid-collection aborts the loop
/// and the pages fetched so far are still returned. `status` is how callers
/// tell a complete collection from a truncated one.
#[derive(Debug)]
pub struct RecordSet {
    /// Accumulated records, page order preserved.
    pub records: Vec<Record>,
    /// Whether the collection was exhausted or the run aborted early.
    pub status: FetchStatus,
}

impl RecordSet {
    /// True when every page was fetched.
    pub fn is_complete(&self) -> bool {
        matches!(self.status, FetchStatus::Complete)
    }
}

/// Terminal state of a pagination run.
#[derive(Debug)]
pub enum FetchStatus {
    /// End of collection reached.
    Complete,
    /// A page fetch failed terminally; the set holds everything before it.
    Aborted(HealthDataError),
}
