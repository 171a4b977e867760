// SPDX-License-Identifier: MPL-2.0
//! Banner presentation state machine.
//!
//! [`BannerController`] owns one banner's lifecycle: it lays the banner
//! out, slides it in, arms the dismiss timer and arbitrates between the
//! timer, drag gestures, taps and explicit dismissal. Every path out ends
//! in a single teardown that runs the completion callback once.
//!
//! # Event Ordering
//!
//! - A drag in progress wins over an expiring timer: the fire is recorded
//!   (`should_silent`) and applied when the drag ends
//! - A tap wins over everything still interactive, including a drag
//! - Stale timer tokens and animation ids are ignored
//! - Teardown is terminal; later events are no-ops until the next `present`
//!
//! The host must report every animation it was asked to run through
//! [`BannerController::handle_animation_finished`], otherwise the banner
//! stays in `Presenting` or `Dismissing`.

use super::announcement::Announcement;
use super::drag::{DragController, DragOutcome};
use super::layout::{Geometry, LayoutEngine, LayoutInput};
use super::timer::DismissTimer;
use super::transition::{AnimationId, AnimationRequest};
use crate::application::port::{
    BannerSurface, OrientationSubscription, TextRole, TimerScheduler, TimerToken,
};
use crate::config::{Config, Tuning, RESTING_LINE_LIMIT};
use crate::domain::banner::{DismissReason, DragEvent, PresentationState};
use crate::domain::ui::AnimationDuration;
use crate::error::{ConstructionError, Result};

/// Called once when a presented banner is torn down.
pub type Completion = Box<dyn FnOnce()>;

/// What the in-flight animation resolves when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Purpose {
    Present,
    Settle,
    Dismiss(DismissReason),
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: AnimationId,
    purpose: Purpose,
}

/// Drives one banner through present → display → dismiss.
pub struct BannerController<S: BannerSurface, T: TimerScheduler> {
    surface: S,
    timer: DismissTimer<T>,
    drag: DragController,
    tuning: Tuning,
    state: PresentationState,
    announcement: Option<Announcement>,
    completion: Option<Completion>,
    geometry: Option<Geometry>,
    current_height: f32,
    should_silent: bool,
    in_flight: Option<InFlight>,
    next_animation: u64,
    orientation: Option<OrientationSubscription>,
    attached: bool,
}

impl<S: BannerSurface, T: TimerScheduler> BannerController<S, T> {
    /// Creates a controller with the default tuning.
    pub fn new(surface: S, scheduler: T) -> Self {
        Self::with_tuning(surface, scheduler, Tuning::default())
    }

    /// Creates a controller using the tuning resolved from `config`.
    pub fn with_config(surface: S, scheduler: T, config: &Config) -> Self {
        Self::with_tuning(surface, scheduler, config.tuning())
    }

    pub fn with_tuning(surface: S, scheduler: T, tuning: Tuning) -> Self {
        Self {
            surface,
            timer: DismissTimer::new(scheduler),
            drag: DragController::new(tuning.rubber_band, tuning.fling_threshold),
            tuning,
            state: PresentationState::Idle,
            announcement: None,
            completion: None,
            geometry: None,
            current_height: 0.0,
            should_silent: false,
            in_flight: None,
            next_animation: 0,
            orientation: None,
            attached: false,
        }
    }

    /// Rebuilding a banner from persisted bytes is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`ConstructionError::PersistedStateUnsupported`].
    pub fn decode(_persisted: &[u8]) -> Result<Self> {
        Err(ConstructionError::PersistedStateUnsupported.into())
    }

    // =========================================================================
    // Outbound API
    // =========================================================================

    /// Presents `announcement`, replacing any banner currently shown.
    ///
    /// A replaced banner's completion runs before the new cycle starts.
    /// Completions must not call back into this controller.
    pub fn present(&mut self, announcement: Announcement, completion: Option<Completion>) {
        if self.state.is_active() {
            tracing::debug!(state = %self.state, "replacing active banner");
            self.timer.cancel();
            if let Some(done) = self.completion.take() {
                done();
            }
        }

        self.drag.reset();
        self.should_silent = false;
        self.in_flight = None;

        if self.orientation.is_none() {
            self.orientation = Some(self.surface.subscribe_orientation());
        }
        self.surface.set_subtitle_line_limit(Some(RESTING_LINE_LIMIT));
        self.surface.attach(&announcement);
        self.attached = true;

        let display = announcement
            .duration()
            .unwrap_or(self.tuning.display.as_duration());
        let geometry = self.measure_geometry(&announcement);
        self.announcement = Some(announcement);
        self.completion = completion;
        self.surface.apply_geometry(&geometry);
        self.geometry = Some(geometry);

        self.timer.schedule(display);
        self.transition_to(PresentationState::Presenting);
        self.current_height = geometry.height;
        self.start_animation(
            Some(Purpose::Present),
            self.tuning.present_animation,
            Some(0.0),
            geometry.height,
        );
    }

    /// Slides the banner out. No-op unless a banner is interactive.
    pub fn dismiss(&mut self) {
        if !self.state.is_interactive() {
            tracing::trace!(state = %self.state, "dismiss ignored");
            return;
        }
        self.abandon_drag();
        self.begin_dismiss(DismissReason::Requested, self.tuning.present_animation);
    }

    /// Handles a dismiss-timer fire delivered by the host.
    pub fn handle_timer_fired(&mut self, token: TimerToken) {
        if !self.timer.fire(token) {
            tracing::trace!(token = token.value(), "stale timer fire ignored");
            return;
        }
        if !self.state.is_interactive() {
            return;
        }

        self.should_silent = true;
        if self.drag.is_active() {
            tracing::debug!("timer expired mid-drag, deferring dismissal");
            self.transition_to(PresentationState::AutoDismissPending);
            return;
        }
        self.begin_dismiss(DismissReason::Timeout, self.tuning.present_animation);
    }

    /// Runs the announcement's action and dismisses the banner.
    pub fn handle_tap(&mut self) {
        if !self.state.is_interactive() {
            tracing::trace!(state = %self.state, "tap ignored");
            return;
        }
        if let Some(action) = self.announcement.as_ref().and_then(Announcement::action) {
            action();
        }
        self.abandon_drag();
        self.begin_dismiss(DismissReason::Tap, self.tuning.present_animation);
    }

    /// Routes one gesture phase.
    pub fn handle_drag_event(&mut self, event: DragEvent) {
        match event {
            DragEvent::Begin => self.drag_began(),
            DragEvent::Change(translation) => self.drag_changed(translation),
            DragEvent::End(translation) => self.drag_ended(translation),
        }
    }

    /// Re-lays the banner out for new viewport metrics, keeping the state.
    pub fn handle_orientation_change(&mut self) {
        if !self.state.is_active() {
            return;
        }
        let Some(announcement) = self.announcement.as_ref() else {
            return;
        };
        let geometry = self.measure_geometry(announcement);
        let expanded = self
            .drag
            .session()
            .map(|_| self.measure_subtitle(announcement, &geometry, None));

        self.surface.apply_geometry(&geometry);
        self.geometry = Some(geometry);
        tracing::debug!(state = %self.state, height = geometry.height, "layout recomputed");

        match self.state {
            PresentationState::Presenting => {
                self.current_height = geometry.height;
                self.start_animation(
                    Some(Purpose::Present),
                    self.tuning.present_animation,
                    None,
                    geometry.height,
                );
            }
            PresentationState::Displayed => {
                self.current_height = geometry.height;
                self.start_animation(None, AnimationDuration::INSTANT, None, geometry.height);
            }
            PresentationState::Dragging | PresentationState::AutoDismissPending => {
                if let Some(expanded) = expanded {
                    self.drag.remeasure(geometry.subtitle.height, expanded);
                }
            }
            PresentationState::Idle
            | PresentationState::Dismissing
            | PresentationState::Dismissed => {}
        }
    }

    /// Resolves a finished animation reported by the host.
    pub fn handle_animation_finished(&mut self, id: AnimationId) {
        let Some(in_flight) = self.in_flight.take_if(|in_flight| in_flight.id == id) else {
            tracing::trace!(id = id.value(), "stale animation completion ignored");
            return;
        };

        match in_flight.purpose {
            Purpose::Present => {
                if self.state == PresentationState::Presenting {
                    self.transition_to(PresentationState::Displayed);
                }
            }
            Purpose::Settle => {}
            Purpose::Dismiss(reason) => {
                if self.state == PresentationState::Dismissing {
                    self.teardown(reason);
                }
            }
        }
    }

    // =========================================================================
    // Observers
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Resting geometry of the current banner.
    #[must_use]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Height the banner is at, or heading to.
    #[must_use]
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    #[must_use]
    pub fn is_pan_active(&self) -> bool {
        self.drag.is_active()
    }

    #[must_use]
    pub fn should_silent(&self) -> bool {
        self.should_silent
    }

    #[must_use]
    pub fn announcement(&self) -> Option<&Announcement> {
        self.announcement.as_ref()
    }

    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn scheduler(&self) -> &T {
        self.timer.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        self.timer.scheduler_mut()
    }

    // =========================================================================
    // Drag phases
    // =========================================================================

    fn drag_began(&mut self) {
        if !matches!(
            self.state,
            PresentationState::Presenting | PresentationState::Displayed
        ) {
            tracing::trace!(state = %self.state, "drag begin ignored");
            return;
        }
        let (Some(announcement), Some(geometry)) = (self.announcement.as_ref(), self.geometry)
        else {
            return;
        };

        let expanded = self.measure_subtitle(announcement, &geometry, None);
        if !self.drag.begin(geometry.subtitle.height, expanded) {
            return;
        }
        self.surface.set_subtitle_line_limit(None);
        // The gesture now owns the height; a pending slide-in no longer resolves.
        self.in_flight = None;
        self.transition_to(PresentationState::Dragging);
    }

    fn drag_changed(&mut self, translation: f32) {
        if !self.state.is_dragging() {
            tracing::trace!(state = %self.state, "drag change ignored");
            return;
        }
        let Some(resting) = self.geometry.map(|geometry| geometry.height) else {
            return;
        };
        if let Some(height) = self.drag.change(translation, resting) {
            self.current_height = height;
            self.start_animation(None, AnimationDuration::INSTANT, None, height);
        }
    }

    fn drag_ended(&mut self, translation: f32) {
        if !self.state.is_dragging() {
            tracing::trace!(state = %self.state, "drag end ignored");
            return;
        }
        let Some(resting) = self.geometry.map(|geometry| geometry.height) else {
            return;
        };
        let Some(outcome) = self.drag.end(translation, self.should_silent, resting) else {
            return;
        };
        self.surface.set_subtitle_line_limit(Some(RESTING_LINE_LIMIT));

        match outcome {
            DragOutcome::SnapBack { height } => {
                self.transition_to(PresentationState::Displayed);
                self.current_height = height;
                self.start_animation(
                    Some(Purpose::Settle),
                    self.tuning.drag_settle,
                    None,
                    height,
                );
            }
            DragOutcome::Dismiss { reason } => {
                self.begin_dismiss(reason, self.tuning.drag_settle);
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn transition_to(&mut self, next: PresentationState) {
        if self.state != next {
            tracing::debug!(from = %self.state, to = %next, "banner state change");
            self.state = next;
        }
    }

    fn begin_dismiss(&mut self, reason: DismissReason, duration: AnimationDuration) {
        self.timer.cancel();
        self.transition_to(PresentationState::Dismissing);
        self.current_height = 0.0;
        self.start_animation(Some(Purpose::Dismiss(reason)), duration, None, 0.0);
    }

    /// Drops a running drag and puts the subtitle back to its resting limit.
    fn abandon_drag(&mut self) {
        if self.drag.session().is_some() {
            self.drag.reset();
            self.surface.set_subtitle_line_limit(Some(RESTING_LINE_LIMIT));
        }
    }

    fn start_animation(
        &mut self,
        purpose: Option<Purpose>,
        duration: AnimationDuration,
        from: Option<f32>,
        height: f32,
    ) {
        self.next_animation += 1;
        let id = AnimationId::new(self.next_animation);
        self.in_flight = purpose.map(|purpose| InFlight { id, purpose });
        self.surface
            .animate(AnimationRequest::resize(id, duration, from, height));
    }

    fn teardown(&mut self, reason: DismissReason) {
        if self.state == PresentationState::Dismissed {
            return;
        }
        self.timer.cancel();
        self.drag.reset();
        self.in_flight = None;
        self.transition_to(PresentationState::Dismissed);

        if self.attached {
            self.surface.detach();
            self.attached = false;
        }
        if let Some(subscription) = self.orientation.take() {
            self.surface.unsubscribe_orientation(subscription);
        }
        self.announcement = None;
        tracing::info!(?reason, "banner dismissed");

        if let Some(done) = self.completion.take() {
            done();
        }
    }

    fn measure_geometry(&self, announcement: &Announcement) -> Geometry {
        let viewport = self.surface.viewport();
        let has_image = announcement.has_image();
        let column = LayoutEngine::text_column_width(viewport.width, has_image);
        let title_height = self.surface.measure_text(
            announcement.title(),
            TextRole::Title,
            column,
            Some(RESTING_LINE_LIMIT),
        );
        let subtitle_height = self.surface.measure_text(
            announcement.subtitle(),
            TextRole::Subtitle,
            column,
            Some(RESTING_LINE_LIMIT),
        );

        LayoutEngine::compute_geometry(&LayoutInput {
            has_image,
            subtitle_empty: announcement.subtitle().is_empty(),
            title_height,
            subtitle_height,
            viewport_width: viewport.width,
            status_bar_hidden: viewport.status_bar_hidden,
        })
    }

    fn measure_subtitle(
        &self,
        announcement: &Announcement,
        geometry: &Geometry,
        max_lines: Option<usize>,
    ) -> f32 {
        self.surface.measure_text(
            announcement.subtitle(),
            TextRole::Subtitle,
            geometry.subtitle.width,
            max_lines,
        )
    }
}

impl<S: BannerSurface, T: TimerScheduler> Drop for BannerController<S, T> {
    fn drop(&mut self) {
        self.timer.cancel();
        if let Some(subscription) = self.orientation.take() {
            self.surface.unsubscribe_orientation(subscription);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::recording::{RecordingSurface, RecordingTimer};

    type Controller = BannerController<RecordingSurface, RecordingTimer>;

    fn controller() -> Controller {
        BannerController::new(RecordingSurface::new(375.0), RecordingTimer::default())
    }

    #[test]
    fn new_controller_is_idle() {
        let banner = controller();
        assert_eq!(banner.state(), PresentationState::Idle);
        assert!(banner.geometry().is_none());
        assert!(!banner.is_pan_active());
    }

    #[test]
    fn decode_reports_construction_error() {
        let result = Controller::decode(b"title=hello");
        assert!(matches!(
            result,
            Err(crate::error::Error::Construction(
                ConstructionError::PersistedStateUnsupported
            ))
        ));
    }

    #[test]
    fn present_slides_in_from_zero() {
        let mut banner = controller();
        banner.present(Announcement::new("Hi").with_subtitle("there"), None);

        let log = banner.surface().log.borrow();
        let request = log.animations.last().unwrap();
        assert_eq!(request.transitions[0].from, Some(0.0));
        assert_eq!(request.height_target(), Some(65.0 + 17.0));
        assert_eq!(request.duration.secs(), 0.35);
        assert!(log.attached);
        assert_eq!(log.subscriptions, 1);
    }

    #[test]
    fn present_animation_completion_displays() {
        let mut banner = controller();
        banner.present(Announcement::new("Hi"), None);
        let id = banner.surface().log.borrow().last_animation_id();

        banner.handle_animation_finished(id);
        assert_eq!(banner.state(), PresentationState::Displayed);
    }

    #[test]
    fn with_config_uses_configured_durations() {
        let mut config = Config::default();
        config.timing.present_animation_secs = Some(0.5);
        let mut banner = BannerController::with_config(
            RecordingSurface::new(320.0),
            RecordingTimer::default(),
            &config,
        );

        banner.present(Announcement::new("Hi"), None);
        let log = banner.surface().log.borrow();
        assert_eq!(log.animations.last().unwrap().duration.secs(), 0.5);
    }

    #[test]
    fn dismiss_when_idle_is_noop() {
        let mut banner = controller();
        banner.dismiss();
        assert_eq!(banner.state(), PresentationState::Idle);
        assert!(banner.surface().log.borrow().animations.is_empty());
    }

    #[test]
    fn drop_releases_orientation_subscription() {
        let banner = {
            let mut banner = controller();
            banner.present(Announcement::new("Hi"), None);
            banner
        };
        let log = banner.surface().log.clone();
        drop(banner);
        assert_eq!(log.borrow().unsubscriptions, 1);
    }
}
