use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Enforces a minimum interval between outbound requests.
///
/// The last-request timestamp lives behind an async mutex so a shared client
/// still honors the interval; waits suspend only the calling task. Uses
/// `tokio::time::Instant` so tests can drive it under a paused clock.
#[derive(Debug)]
pub(crate) struct Throttle {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl Throttle {
    pub(crate) fn new(requests_per_second: f64) -> Self {
        Self {
            min_interval: Duration::from_secs_f64(1.0 / requests_per_second),
            last_request: Mutex::new(None),
        }
    }

    /// Returns once at least `1/requests_per_second` seconds have passed since
    /// the previous `acquire` returned, sleeping out the remainder if needed.
    pub(crate) async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
