//! Trailing-edge debouncer for bursty inputs.
//!
//! Each call schedules the action after a quiet period and aborts the
//! previously scheduled one, so only the last value in a burst fires.
//! Used for search keystrokes so the filter recomputes once per pause
//! rather than once per key.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Default quiet period before a burst's final value fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

/// A cancelling, trailing-edge debouncer. Requires a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    action: Action<T>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer").field("delay", &self.delay).finish()
    }
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            action: Arc::new(action),
            handle: Mutex::new(None),
        }
    }

    /// Schedule `value` to fire after the quiet period, cancelling any
    /// earlier pending value.
    pub fn call(&self, value: T) {
        let mut guard = self.handle.lock();
        if let Some(prior) = guard.take() {
            prior.abort();
        }
        let action = Arc::clone(&self.action);
        let delay = self.delay;
        *guard = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(value);
        }));
    }

    /// Drop any pending value without firing it.
    pub fn cancel(&self) {
        if let Some(prior) = self.handle.lock().take() {
            prior.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(prior) = self.handle.lock().take() {
            prior.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_fires_after_quiet_period() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let debouncer = Debouncer::new(Duration::from_millis(10), move |v: String| {
            sink.lock().push(v);
        });

        debouncer.call("pika".to_string());
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(*fired.lock(), vec!["pika".to_string()]);
    }

    #[tokio::test]
    async fn test_burst_fires_only_last_value() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let debouncer = Debouncer::new(Duration::from_millis(20), move |v: String| {
            sink.lock().push(v);
        });

        for q in ["p", "pi", "pik", "pika"] {
            debouncer.call(q.to_string());
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(*fired.lock(), vec!["pika".to_string()]);
    }

    #[tokio::test]
    async fn test_cancel_drops_pending_value() {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let debouncer = Debouncer::new(Duration::from_millis(10), move |_: u32| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        debouncer.call(1);
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_separate_bursts_both_fire() {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&count);
        let debouncer = Debouncer::new(Duration::from_millis(5), move |_: u32| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(40)).await;
        debouncer.call(2);
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
