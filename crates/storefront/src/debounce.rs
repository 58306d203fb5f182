//! Debounced scheduling for rapid input events.
//!
//! Filter controls fire on every raw input event (a price slider drag can
//! produce dozens per second), but the visible-set recompute should run at
//! most once per quiescence window. Each new call cancels any pending
//! scheduled run and schedules a fresh one - a newer call supersedes an
//! older pending one; there is no other cancellation concept.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Schedules work to run after a quiescence window, superseding any
/// previously scheduled work.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `f` to run after the window, cancelling any pending run.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let window = self.window;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            f();
        }));
    }

    /// Abort any pending scheduled run without scheduling a new one.
    pub fn cancel(&self) {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    const WINDOW: Duration = Duration::from_millis(150);

    #[tokio::test(start_paused = true)]
    async fn test_newer_call_supersedes_pending() {
        let debouncer = Debouncer::new(WINDOW);
        let first = Arc::new(AtomicU32::new(0));
        let second = Arc::new(AtomicU32::new(0));

        {
            let first = Arc::clone(&first);
            debouncer.call(move || {
                first.fetch_add(1, Ordering::SeqCst);
            });
        }
        {
            let second = Arc::clone(&second);
            debouncer.call(move || {
                second.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(WINDOW * 2).await;
        tokio::task::yield_now().await;

        assert_eq!(first.load(Ordering::SeqCst), 0, "superseded call must not run");
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_once_per_quiescence_window() {
        let debouncer = Debouncer::new(WINDOW);
        let runs = Arc::new(AtomicU32::new(0));

        // A burst of raw input events, well inside one window.
        for _ in 0..25 {
            let runs = Arc::clone(&runs);
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        tokio::time::sleep(WINDOW * 2).await;
        tokio::task::yield_now().await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_each_fire() {
        let debouncer = Debouncer::new(WINDOW);
        let runs = Arc::new(AtomicU32::new(0));

        for _ in 0..2 {
            let runs = Arc::clone(&runs);
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(WINDOW * 2).await;
            tokio::task::yield_now().await;
        }

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_run() {
        let debouncer = Debouncer::new(WINDOW);
        let runs = Arc::new(AtomicU32::new(0));

        {
            let runs = Arc::clone(&runs);
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        tokio::time::sleep(WINDOW * 2).await;
        tokio::task::yield_now().await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
