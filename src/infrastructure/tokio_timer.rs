// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed dismiss timer.
//!
//! Each schedule spawns a task that sleeps for the requested duration and
//! then sends its [`TimerToken`] on an unbounded channel. The host drains
//! the channel on its UI thread and hands every token to
//! [`BannerController::handle_timer_fired`].
//!
//! [`BannerController::handle_timer_fired`]: crate::ui::banner::BannerController::handle_timer_fired

use crate::application::port::{TimerScheduler, TimerToken};
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// [`TimerScheduler`] running one sleep task per pending fire.
#[derive(Debug)]
pub struct TokioTimer {
    runtime: Handle,
    /// Sender cloned into every sleep task.
    fired_tx: mpsc::UnboundedSender<TimerToken>,
    pending: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioTimer {
    /// Creates a timer spawning onto `runtime`.
    ///
    /// Returns the timer and the receiving end of its fire channel.
    #[must_use]
    pub fn new(runtime: Handle) -> (Self, mpsc::UnboundedReceiver<TimerToken>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let timer = Self {
            runtime,
            fired_tx,
            pending: HashMap::new(),
        };
        (timer, fired_rx)
    }

    /// Number of fires not yet delivered or canceled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
            .values()
            .filter(|task| !task.is_finished())
            .count()
    }
}

impl TimerScheduler for TokioTimer {
    fn schedule(&mut self, token: TimerToken, after: Duration) {
        self.pending.retain(|_, task| !task.is_finished());

        let fired_tx = self.fired_tx.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            if fired_tx.send(token).is_err() {
                tracing::debug!(token = token.value(), "timer receiver dropped");
            }
        });
        if let Some(previous) = self.pending.insert(token, task) {
            previous.abort();
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(task) = self.pending.remove(&token) {
            task.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}
