//! Record identity generation

use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out ids derived from the millisecond clock.
///
/// Ids are strictly increasing within one generator, so two records created in
/// the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Starts a generator with no ids handed out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `max(now_ms, previous + 1)` as a decimal string.
    pub fn next_id(&self, now_ms: i64) -> String {
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now_ms.max(prev + 1))
            })
            .unwrap_or_else(|prev| prev);
        now_ms.max(previous + 1).to_string()
    }
}
