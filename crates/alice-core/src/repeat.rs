//! Timed-repeat task with a hard stop guarantee.
//!
//! Both animators are intervals that mutate the shared log, and both
//! must be certain that after `stop()` returns no further tick can land.
//! The tick and `stop()` contend on the same gate mutex, so a tick that
//! lost the race observes the stopped flag before it runs the callback.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Stop token for a running repeat task.
///
/// `stop()` is idempotent, and dropping the handle stops the task as
/// well, so a ticker can never outlive the turn that spawned it.
#[derive(Debug)]
pub struct RepeatHandle {
    gate: Arc<Mutex<bool>>,
    task: JoinHandle<()>,
}

impl RepeatHandle {
    /// Cancel future ticks. Once this returns, the callback is
    /// guaranteed not to fire again.
    pub fn stop(&self) {
        let mut stopped = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        *stopped = true;
        self.task.abort();
    }
}

impl Drop for RepeatHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run `tick` every `period` until the returned handle is stopped. The
/// first tick fires one full period after the spawn.
pub fn spawn(period: Duration, mut tick: impl FnMut() + Send + 'static) -> RepeatHandle {
    let gate = Arc::new(Mutex::new(false));
    let tick_gate = Arc::clone(&gate);
    let task = tokio::spawn(async move {
        loop {
            tokio::time::sleep(period).await;
            let stopped = tick_gate.lock().unwrap_or_else(PoisonError::into_inner);
            if *stopped {
                break;
            }
            // Gate held through the callback: a concurrent stop()
            // blocks until this tick has finished mutating.
            tick();
            drop(stopped);
        }
    });
    RepeatHandle { gate, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn ticks_at_the_requested_period() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handle = spawn(Duration::from_millis(80), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(250)).await;
        handle.stop();
        // Ticks at 80, 160 and 240 ms.
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_before_first_tick_means_zero_callbacks() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handle = spawn(Duration::from_millis(80), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        handle.stop();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_idempotent() {
        let handle = spawn(Duration::from_millis(80), || {});
        handle.stop();
        handle.stop();
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_stop_returns() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let handle = spawn(Duration::from_millis(80), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.stop();
        let at_stop = count.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), at_stop);
    }
}
