// SPDX-License-Identifier: MPL-2.0
//! Cancelable single-shot dismiss timer.
//!
//! Wraps a host [`TimerScheduler`] with generation tokens. Scheduling while
//! armed cancels the previous fire first, and a fire is only accepted for
//! the token that is currently armed, so every schedule is delivered at
//! most once.

use crate::application::port::{TimerScheduler, TimerToken};
use std::time::Duration;

#[derive(Debug)]
pub struct DismissTimer<T: TimerScheduler> {
    scheduler: T,
    generation: u64,
    armed: Option<TimerToken>,
}

impl<T: TimerScheduler> DismissTimer<T> {
    pub fn new(scheduler: T) -> Self {
        Self {
            scheduler,
            generation: 0,
            armed: None,
        }
    }

    /// Arms the timer, replacing any pending fire.
    pub fn schedule(&mut self, after: Duration) -> TimerToken {
        self.cancel();
        self.generation += 1;
        let token = TimerToken::new(self.generation);
        self.scheduler.schedule(token, after);
        self.armed = Some(token);
        token
    }

    /// Disarms the timer. No-op when nothing is armed.
    pub fn cancel(&mut self) {
        if let Some(token) = self.armed.take() {
            self.scheduler.cancel(token);
        }
    }

    /// Accepts a delivered fire.
    ///
    /// Returns `true` exactly once for the armed token; stale or repeated
    /// deliveries return `false`.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    #[must_use]
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::recording::RecordingTimer;

    #[test]
    fn schedule_arms_and_forwards_duration() {
        let scheduler = RecordingTimer::default();
        let log = scheduler.log.clone();
        let mut timer = DismissTimer::new(scheduler);

        let token = timer.schedule(Duration::from_secs(2));
        assert!(timer.is_armed());
        assert_eq!(log.borrow().scheduled, vec![(token, Duration::from_secs(2))]);
    }

    #[test]
    fn rescheduling_cancels_previous_fire() {
        let scheduler = RecordingTimer::default();
        let log = scheduler.log.clone();
        let mut timer = DismissTimer::new(scheduler);

        let first = timer.schedule(Duration::from_secs(1));
        let second = timer.schedule(Duration::from_secs(1));

        assert_ne!(first, second);
        assert_eq!(log.borrow().canceled, vec![first]);
        assert!(!timer.fire(first));
        assert!(timer.fire(second));
    }

    #[test]
    fn fire_is_accepted_once() {
        let mut timer = DismissTimer::new(RecordingTimer::default());
        let token = timer.schedule(Duration::ZERO);

        assert!(timer.fire(token));
        assert!(!timer.fire(token));
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancel_without_schedule_is_noop() {
        let scheduler = RecordingTimer::default();
        let log = scheduler.log.clone();
        let mut timer = DismissTimer::new(scheduler);

        timer.cancel();
        assert!(log.borrow().canceled.is_empty());
    }

    #[test]
    fn canceled_token_is_rejected() {
        let mut timer = DismissTimer::new(RecordingTimer::default());
        let token = timer.schedule(Duration::from_millis(10));
        timer.cancel();
        assert!(!timer.fire(token));
    }
}
