//! Politeness pacing for outbound requests.
//!
//! A single resolution never has more than one request in flight, but a caller
//! that fans out many queries can easily hammer the same site. [`RequestPacer`]
//! enforces a minimum spacing between successive requests to one origin. It is
//! owned by the caller and handed to the client at construction; resolution
//! logic itself never depends on it.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Spaces outbound requests to the same origin at least `min_interval` apart.
///
/// Slots are reserved under the lock and waited for outside it, so concurrent
/// callers queue up in arrival order and requests to other origins are never
/// held back.
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    next_slot: Mutex<HashMap<String, Instant>>,
}

impl RequestPacer {
    /// A zero `min_interval` turns pacing into a no-op.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits until a request to `origin` is allowed, then claims that slot.
    pub async fn wait_turn(&self, origin: &str) {
        if self.min_interval.is_zero() {
            return;
        }

        let slot = {
            let mut next_slot = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = next_slot
                .get(origin)
                .copied()
                .map_or(now, |reserved| reserved.max(now));
            next_slot.insert(origin.to_owned(), slot + self.min_interval);
            slot
        };

        let now = Instant::now();
        if slot > now {
            tracing::debug!(
                origin,
                wait_ms = u64::try_from((slot - now).as_millis()).unwrap_or(u64::MAX),
                "pacing outbound request"
            );
            tokio::time::sleep_until(slot).await;
        }
    }
}
