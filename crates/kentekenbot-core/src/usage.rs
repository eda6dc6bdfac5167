//! Process-wide token accounting.
//!
//! Every successful model invocation adds its usage delta to one shared
//! counter. The update and the snapshot it returns happen under a single lock
//! so concurrent requests never lose an update or observe a torn total.

use std::sync::{Mutex, MutexGuard, PoisonError};

use kentekenbot_types::usage::{TokenUsage, UsageDelta};

/// Cumulative token usage shared by all requests.
#[derive(Debug, Default)]
pub struct TokenAccountant {
    total: Mutex<TokenUsage>,
}

impl TokenAccountant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` and return the new cumulative snapshot.
    pub fn record(&self, delta: UsageDelta) -> TokenUsage {
        let mut total = self.lock();
        total.apply(delta);
        *total
    }

    pub fn snapshot(&self) -> TokenUsage {
        *self.lock()
    }

    /// Zero the counter. Returns the fresh (empty) snapshot.
    pub fn reset(&self) -> TokenUsage {
        let mut total = self.lock();
        *total = TokenUsage::default();
        *total
    }

    // The counter is plain data; a panic elsewhere cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, TokenUsage> {
        self.total.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn delta(prompt_tokens: u64, completion_tokens: u64) -> UsageDelta {
        UsageDelta {
            prompt_tokens,
            completion_tokens,
        }
    }

    #[test]
    fn test_starts_at_zero() {
        let accountant = TokenAccountant::new();
        assert_eq!(accountant.snapshot(), TokenUsage::default());
    }

    #[test]
    fn test_record_is_additive() {
        let accountant = TokenAccountant::new();
        let first = accountant.record(delta(100, 20));
        assert_eq!(first.total_tokens(), 120);

        let second = accountant.record(delta(50, 5));
        assert_eq!(second.prompt_tokens(), 150);
        assert_eq!(second.completion_tokens(), 25);
        assert_eq!(second.total_tokens(), 175);
    }

    #[test]
    fn test_order_independent() {
        let a = TokenAccountant::new();
        a.record(delta(7, 3));
        a.record(delta(11, 13));

        let b = TokenAccountant::new();
        b.record(delta(11, 13));
        b.record(delta(7, 3));

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.snapshot().total_tokens(), 7 + 3 + 11 + 13);
    }

    #[test]
    fn test_reset_zeroes_counter() {
        let accountant = TokenAccountant::new();
        accountant.record(delta(10, 10));
        assert_eq!(accountant.reset(), TokenUsage::default());
        assert_eq!(accountant.snapshot().total_tokens(), 0);
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let accountant = Arc::new(TokenAccountant::new());
        let threads = 16;
        let per_thread = 500;

        std::thread::scope(|scope| {
            for i in 0..threads {
                let accountant = Arc::clone(&accountant);
                scope.spawn(move || {
                    for _ in 0..per_thread {
                        accountant.record(delta(i + 1, 2));
                    }
                });
            }
        });

        let expected_prompt: u64 = (1..=threads).sum::<u64>() * per_thread;
        let expected_completion = 2 * threads * per_thread;
        let usage = accountant.snapshot();
        assert_eq!(usage.prompt_tokens(), expected_prompt);
        assert_eq!(usage.completion_tokens(), expected_completion);
        assert_eq!(usage.total_tokens(), expected_prompt + expected_completion);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_tasks_see_monotonic_totals() {
        let accountant = Arc::new(TokenAccountant::new());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let accountant = Arc::clone(&accountant);
            handles.push(tokio::spawn(async move { accountant.record(delta(3, 1)) }));
        }

        let mut totals = Vec::new();
        for handle in handles {
            totals.push(handle.await.unwrap().total_tokens());
        }
        totals.sort_unstable();
        totals.dedup();
        // Every snapshot is distinct: each update was applied exactly once.
        assert_eq!(totals.len(), 32);
        assert_eq!(accountant.snapshot().total_tokens(), 32 * 4);
    }
}
