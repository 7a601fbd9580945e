//! Success banner contract and its auto-dismiss timer.
//!
//! The banner itself is an external [`NotificationSink`]. [`Notifier`]
//! owns the timing: show immediately, hide after [`DISMISS_DELAY`] of
//! continuous display. Each show starts a new generation; a timer only
//! hides the banner if its generation is still current, so a stale timer
//! can never hide a newer notification.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::lock;

/// How long a success banner stays visible.
pub const DISMISS_DELAY: Duration = Duration::from_millis(4000);

/// Display target for the transient success banner.
pub trait NotificationSink: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

#[derive(Default)]
struct PendingDismiss {
    generation: u64,
    timer: Option<CancellationToken>,
}

/// Drives a [`NotificationSink`] with a cancellable dismiss timer.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    delay: Duration,
    pending: Arc<Mutex<PendingDismiss>>,
    /// Owner's token -- cancelled on teardown, parent of every timer.
    cancel: CancellationToken,
}

impl Notifier {
    /// Create a notifier whose timers die with `cancel`.
    pub fn new(sink: Arc<dyn NotificationSink>, cancel: CancellationToken) -> Self {
        Self {
            sink,
            delay: DISMISS_DELAY,
            pending: Arc::new(Mutex::new(PendingDismiss::default())),
            cancel,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Show the banner and (re)start the dismiss timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show_success(&self) {
        if self.cancel.is_cancelled() {
            return;
        }

        let timer = self.cancel.child_token();
        let generation = {
            let mut pending = lock(&self.pending);
            if let Some(previous) = pending.timer.replace(timer.clone()) {
                previous.cancel();
            }
            pending.generation += 1;
            pending.generation
        };

        self.sink.show();

        let deadline = Instant::now() + self.delay;
        let sink = Arc::clone(&self.sink);
        let pending = Arc::clone(&self.pending);

        tokio::spawn(async move {
            tokio::select! {
                _ = timer.cancelled() => {}
                _ = tokio::time::sleep_until(deadline) => {
                    let mut pending = lock(&pending);
                    if pending.generation != generation || timer.is_cancelled() {
                        return;
                    }
                    pending.timer = None;
                    drop(pending);
                    tracing::debug!(generation, "Auto-dismissing notification");
                    sink.hide();
                }
            }
        });
    }

    /// Hide the banner now and cancel any pending timer.
    pub fn dismiss(&self) {
        let mut pending = lock(&self.pending);
        pending.generation += 1;
        if let Some(timer) = pending.timer.take() {
            timer.cancel();
        }
        drop(pending);

        if !self.cancel.is_cancelled() {
            self.sink.hide();
        }
    }

    /// Cancel every pending timer without touching the sink.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}
