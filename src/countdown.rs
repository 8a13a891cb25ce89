//! Payment countdown: remaining time until the payment window closes, with a
//! one-shot expiry signal. The pure state machine is testable with synthetic
//! clocks; `spawn_countdown` wraps it in a once-per-second tokio task.

use chrono::{DateTime, Duration, Utc};
use tokio::task::JoinHandle;

/// Payment window: one hour from order creation.
pub const PAYMENT_WINDOW_SECS: i64 = 3600;

/// Tracks one order's payment deadline. Remaining time is always recomputed
/// from the absolute expiry instant, never from a decrementing counter, so a
/// paused or delayed tick cannot drift the deadline.
#[derive(Debug, Clone)]
pub struct PaymentCountdown {
    expires_at: DateTime<Utc>,
    fired: bool,
}

impl PaymentCountdown {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            expires_at: created_at + Duration::seconds(PAYMENT_WINDOW_SECS),
            fired: false,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whole seconds left, floor-truncated, clamped at 0.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }

    /// Advance the state machine. Returns `true` exactly once: on the first
    /// tick at which the window has closed. Every later tick returns `false`,
    /// so a caller may fire its expiry handler whenever this returns `true`
    /// without double-firing.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.fired {
            return false;
        }
        if self.remaining_secs(now) == 0 {
            self.fired = true;
            return true;
        }
        false
    }

    /// `MM:SS`, zero-padded. Minutes exceed 59 at the start of the window
    /// ("60:00"); the value never goes negative.
    pub fn display(&self, now: DateTime<Utc>) -> String {
        let secs = self.remaining_secs(now);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

/// Handle to a running countdown task. Dropping it (or calling `cancel`)
/// aborts the task, which is how a view tears the timer down on unmount;
/// leaving the task running would leak a repeating tick against a stale
/// callback.
pub struct CountdownHandle {
    task: JoinHandle<()>,
}

impl CountdownHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start a once-per-second countdown for an order created at `created_at`.
/// `on_expired` runs exactly once, on the first tick after the window
/// closes (immediately, if it is already past). The task exits after firing.
pub fn spawn_countdown<F>(created_at: DateTime<Utc>, on_expired: F) -> CountdownHandle
where
    F: FnOnce() + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut countdown = PaymentCountdown::new(created_at);
        let mut timer = tokio::time::interval(std::time::Duration::from_secs(1));
        loop {
            timer.tick().await;
            if countdown.tick(Utc::now()) {
                on_expired();
                return;
            }
        }
    });
    CountdownHandle { task }
}
