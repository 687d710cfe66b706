//! Debounce scheduler
//!
//! Coalesces bursts of calls under the same key into a single delayed task.
//! Each key has at most one pending task at any instant, and a scheduled task
//! never runs synchronously inside [`Debouncer::schedule`].

use std::{
    collections::HashMap,
    fmt,
    future::Future,
    hash::Hash,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::trace;

/// Recommended delay for text-driven suggestion queries
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(220);

struct PendingTask {
    generation: u64,
    handle: AbortHandle,
}

/// Keyed debounce scheduler backed by tokio timers
///
/// Must be used from within a tokio runtime.
pub struct Debouncer<K> {
    pending: Arc<Mutex<HashMap<K, PendingTask>>>,
    generation: Arc<AtomicU64>,
}

impl<K> Clone for Debouncer<K> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<K> fmt::Debug for Debouncer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("pending", &self.pending.lock().len())
            .finish()
    }
}

impl<K> Default for Debouncer<K>
where
    K: Eq + Hash + Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Debouncer<K>
where
    K: Eq + Hash + Clone + Send + 'static,
{
    /// Create an empty scheduler
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Arm `task` to run once `delay` has passed without another call for `key`
    ///
    /// Any task still pending under `key` is cancelled first.
    pub fn schedule<F, Fut>(&self, key: K, delay: Duration, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let pending = Arc::clone(&self.pending);
        let task_key = key.clone();

        let mut guard = self.pending.lock();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut map = pending.lock();
                let current = map
                    .get(&task_key)
                    .is_some_and(|entry| entry.generation == generation);
                if !current {
                    return;
                }
                map.remove(&task_key);
            }
            task().await;
        })
        .abort_handle();

        if let Some(previous) = guard.insert(key, PendingTask { generation, handle }) {
            trace!(generation = previous.generation, "Superseding pending task");
            previous.handle.abort();
        }
    }

    /// Cancel the pending task for `key`, returning whether one existed
    pub fn cancel(&self, key: &K) -> bool {
        self.pending.lock().remove(key).is_some_and(|task| {
            task.handle.abort();
            true
        })
    }

    /// Cancel every pending task
    pub fn cancel_all(&self) {
        for (_, task) in self.pending.lock().drain() {
            task.handle.abort();
        }
    }

    /// Whether a task is armed for `key`
    pub fn pending(&self, key: &K) -> bool {
        self.pending.lock().contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn burst_runs_once_with_latest_value() {
        let debouncer = Debouncer::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for text in ["P", "Pa", "Pau", "Paulista"] {
            let seen = Arc::clone(&seen);
            debouncer.schedule("origin", DEFAULT_DEBOUNCE, move || async move {
                seen.lock().push(text);
            });
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(*seen.lock(), vec!["Paulista"]);
        assert!(!debouncer.pending(&"origin"));
    }

    #[tokio::test(start_paused = true)]
    async fn never_runs_synchronously() {
        let debouncer = Debouncer::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        debouncer.schedule(1u8, Duration::ZERO, move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(debouncer.pending(&1));

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn keys_are_independent() {
        let debouncer = Debouncer::new();
        let count = Arc::new(AtomicUsize::new(0));

        for key in ["origin", "destination"] {
            let counter = Arc::clone(&count);
            debouncer.schedule(key, DEFAULT_DEBOUNCE, move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_run() {
        let debouncer = Debouncer::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        debouncer.schedule("k", DEFAULT_DEBOUNCE, move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(debouncer.cancel(&"k"));
        assert!(!debouncer.cancel(&"k"));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_clears_every_key() {
        let debouncer = Debouncer::new();
        debouncer.schedule(1u8, DEFAULT_DEBOUNCE, || async {});
        debouncer.schedule(2u8, DEFAULT_DEBOUNCE, || async {});
        debouncer.cancel_all();
        assert!(!debouncer.pending(&1));
        assert!(!debouncer.pending(&2));
    }
}
