// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and recording test doubles.
//!
//! Float assertions come from the `approx` crate, which handles
//! floating-point precision issues that `assert_eq!` cannot. The recording
//! host in [`recording`] stands in for a real surface and timer.

pub use approx::assert_abs_diff_eq;

/// Epsilon for banner heights and frame origins.
pub const LAYOUT_EPSILON: f32 = 1e-4;

pub mod recording {
    //! In-memory [`BannerSurface`] and [`TimerScheduler`] that log every call.

    use crate::application::port::{
        BannerSurface, OrientationSubscription, TextRole, TimerScheduler, TimerToken, Viewport,
    };
    use crate::ui::banner::{AnimationId, AnimationRequest, Announcement, Geometry};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Shared log so tests can inspect the surface after handing it over.
    #[derive(Debug, Default)]
    pub struct SurfaceLog {
        pub viewport: Viewport,
        pub attached: bool,
        pub attach_count: usize,
        pub detach_count: usize,
        pub geometries: Vec<Geometry>,
        pub animations: Vec<AnimationRequest>,
        pub line_limits: Vec<Option<usize>>,
        pub subscriptions: usize,
        pub unsubscriptions: usize,
        /// Extra height reported while the subtitle line limit is lifted.
        pub expanded_extra: f32,
    }

    impl SurfaceLog {
        /// Id of the most recent animation request.
        pub fn last_animation_id(&self) -> AnimationId {
            self.animations.last().expect("no animation requested").id
        }

        /// Target of the banner height in the most recent request.
        pub fn last_height_target(&self) -> f32 {
            self.animations
                .last()
                .and_then(AnimationRequest::height_target)
                .expect("no height transition requested")
        }
    }

    #[derive(Debug, Clone)]
    pub struct RecordingSurface {
        pub log: Rc<RefCell<SurfaceLog>>,
        next_subscription: u64,
    }

    impl RecordingSurface {
        pub fn new(width: f32) -> Self {
            let log = SurfaceLog {
                viewport: Viewport {
                    width,
                    status_bar_hidden: false,
                },
                expanded_extra: 40.0,
                ..SurfaceLog::default()
            };
            Self {
                log: Rc::new(RefCell::new(log)),
                next_subscription: 0,
            }
        }
    }

    impl BannerSurface for RecordingSurface {
        fn viewport(&self) -> Viewport {
            self.log.borrow().viewport
        }

        /// 17pt per line, two lines max unless unlimited.
        fn measure_text(
            &self,
            text: &str,
            role: TextRole,
            _max_width: f32,
            max_lines: Option<usize>,
        ) -> f32 {
            if text.is_empty() {
                return 0.0;
            }
            let line_height = match role {
                TextRole::Title => 20.0,
                TextRole::Subtitle => 17.0,
            };
            let lines = text.lines().count().max(1);
            match max_lines {
                Some(limit) => lines.min(limit) as f32 * line_height,
                None => lines as f32 * line_height + self.log.borrow().expanded_extra,
            }
        }

        fn attach(&mut self, _announcement: &Announcement) {
            let mut log = self.log.borrow_mut();
            log.attached = true;
            log.attach_count += 1;
        }

        fn detach(&mut self) {
            let mut log = self.log.borrow_mut();
            log.attached = false;
            log.detach_count += 1;
        }

        fn apply_geometry(&mut self, geometry: &Geometry) {
            self.log.borrow_mut().geometries.push(*geometry);
        }

        fn set_subtitle_line_limit(&mut self, limit: Option<usize>) {
            self.log.borrow_mut().line_limits.push(limit);
        }

        fn animate(&mut self, request: AnimationRequest) {
            self.log.borrow_mut().animations.push(request);
        }

        fn subscribe_orientation(&mut self) -> OrientationSubscription {
            self.next_subscription += 1;
            self.log.borrow_mut().subscriptions += 1;
            OrientationSubscription::new(self.next_subscription)
        }

        fn unsubscribe_orientation(&mut self, _subscription: OrientationSubscription) {
            self.log.borrow_mut().unsubscriptions += 1;
        }
    }

    #[derive(Debug, Default)]
    pub struct TimerLog {
        pub scheduled: Vec<(TimerToken, Duration)>,
        pub canceled: Vec<TimerToken>,
    }

    impl TimerLog {
        pub fn last_token(&self) -> TimerToken {
            self.scheduled.last().expect("nothing scheduled").0
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct RecordingTimer {
        pub log: Rc<RefCell<TimerLog>>,
    }

    impl TimerScheduler for RecordingTimer {
        fn schedule(&mut self, token: TimerToken, after: Duration) {
            self.log.borrow_mut().scheduled.push((token, after));
        }

        fn cancel(&mut self, token: TimerToken) {
            self.log.borrow_mut().canceled.push(token);
        }
    }
}
