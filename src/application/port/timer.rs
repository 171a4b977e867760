// SPDX-License-Identifier: MPL-2.0
//! One-shot timer port definition.
//!
//! This module defines the [`TimerScheduler`] trait a host implements to
//! deliver dismiss-timer fires back to the banner controller.
//!
//! # Design Notes
//!
//! - Fires are identified by a [`TimerToken`]; the host hands the token back
//!   through `BannerController::handle_timer_fired`
//! - A token that was canceled or superseded is stale, and the controller
//!   ignores it, so hosts may deliver fires racing with a cancel
//! - No callbacks cross the port, which keeps the controller free of
//!   re-entrancy

use std::time::Duration;

/// Identifies one scheduled fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    /// Returns the raw generation number.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Port for scheduling single-shot timers.
pub trait TimerScheduler {
    /// Arranges for `token` to be delivered once `after` has elapsed.
    fn schedule(&mut self, token: TimerToken, after: Duration);

    /// Stops a pending delivery. Unknown or delivered tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

impl<T: TimerScheduler + ?Sized> TimerScheduler for Box<T> {
    fn schedule(&mut self, token: TimerToken, after: Duration) {
        (**self).schedule(token, after);
    }

    fn cancel(&mut self, token: TimerToken) {
        (**self).cancel(token);
    }
}
