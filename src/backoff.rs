use std::time::Duration;

use rand::Rng;

/// Ceiling on any single backoff wait.
const MAX_DELAY_MS: u64 = 30_000;
/// Upper bound (exclusive) of the uniform jitter added to each delay.
const JITTER_MS: u64 = 1_000;

/// Randomized exponential backoff: `initial * 2^attempt` plus up to a second
/// of jitter, capped at thirty seconds.
///
/// Jitter keeps independent clients from retrying in lockstep after a shared
/// outage. Stateless aside from the random source.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BackoffPolicy {
    initial_delay_ms: u64,
}

impl BackoffPolicy {
    pub(crate) fn new(initial_delay_ms: u64) -> Self {
        Self { initial_delay_ms }
    }

    /// Delay before retry number `attempt` (0-based), using the thread RNG.
    pub(crate) fn delay(&self, attempt: usize) -> Duration {
        self.delay_with(attempt, &mut rand::rng())
    }

    /// Same as [`BackoffPolicy::delay`] with an injected random source.
    pub(crate) fn delay_with<R: Rng + ?Sized>(&self, attempt: usize, rng: &mut R) -> Duration {
        // Clamp the exponent so large attempt counts saturate instead of
        // overflowing the shift.
        let exp = attempt.min(16) as u32;
        let base = self.initial_delay_ms.saturating_mul(1u64 << exp);
        let jitter = rng.random_range(0..JITTER_MS);
        Duration::from_millis(base.saturating_add(jitter).min(MAX_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{BackoffPolicy, JITTER_MS, MAX_DELAY_MS};

    #[test]
    fn delay_stays_within_jitter_band() {
        let policy = BackoffPolicy::new(1_000);
        let mut rng = StdRng::seed_from_u64(42);

        for attempt in 0..4 {
            let base = 1_000u64 << attempt;
            let delay = policy.delay_with(attempt, &mut rng).as_millis() as u64;
            assert!(delay >= base, "attempt {attempt}: {delay} < {base}");
            assert!(
                delay < base + JITTER_MS,
                "attempt {attempt}: {delay} >= {}",
                base + JITTER_MS
            );
        }
    }

    #[test]
    fn delay_is_capped() {
        let policy = BackoffPolicy::new(1_000);
        let mut rng = StdRng::seed_from_u64(7);

        for attempt in [5, 6, 20, usize::MAX] {
            let delay = policy.delay_with(attempt, &mut rng).as_millis() as u64;
            assert_eq!(delay, MAX_DELAY_MS);
        }
    }

    #[test]
    fn delay_doubles_per_attempt() {
        let policy = BackoffPolicy::new(250);
        let mut rng = StdRng::seed_from_u64(1);

        let mut previous_base = 0u64;
        for attempt in 0..5 {
            let base = 250u64 << attempt;
            let delay = policy.delay_with(attempt, &mut rng).as_millis() as u64;
            assert!(delay >= base && base > previous_base);
            previous_base = base;
        }
    }
}
