// SPDX-License-Identifier: MPL-2.0
//! Iced-side implementation of the banner surface.
//!
//! [`IcedSurface`] keeps what the banner looks like right now: the attached
//! content, its geometry and the animated heights. Animations advance on
//! the application tick; finished ones are handed back to the controller
//! by id.

use crate::application::port::{BannerSurface, OrientationSubscription, TextRole, Viewport};
use crate::ui::banner::{AnimatedProperty, AnimationId, AnimationRequest, Announcement, Geometry};
use iced::widget::image::Handle;
use std::time::Instant;

pub const TITLE_FONT_SIZE: f32 = 15.0;
pub const SUBTITLE_FONT_SIZE: f32 = 13.0;
const TITLE_LINE_HEIGHT: f32 = 20.0;
const SUBTITLE_LINE_HEIGHT: f32 = 17.0;
/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f32 = 0.55;

/// What the view draws for an attached banner.
#[derive(Debug, Clone)]
pub struct BannerContent {
    pub title: String,
    pub subtitle: String,
    pub image: Option<Handle>,
}

/// Current values of the animated properties.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatedFrame {
    pub banner_height: f32,
    pub background_height: f32,
    pub indicator_y: f32,
}

impl AnimatedFrame {
    fn get(&self, property: AnimatedProperty) -> f32 {
        match property {
            AnimatedProperty::BannerHeight => self.banner_height,
            AnimatedProperty::BackgroundHeight => self.background_height,
            AnimatedProperty::IndicatorY => self.indicator_y,
        }
    }

    fn set(&mut self, property: AnimatedProperty, value: f32) {
        match property {
            AnimatedProperty::BannerHeight => self.banner_height = value,
            AnimatedProperty::BackgroundHeight => self.background_height = value,
            AnimatedProperty::IndicatorY => self.indicator_y = value,
        }
    }
}

#[derive(Debug, Clone)]
struct RunningAnimation {
    request: AnimationRequest,
    started: Instant,
    start: AnimatedFrame,
}

/// Banner surface rendered by the demo's `view`.
#[derive(Debug, Default)]
pub struct IcedSurface {
    viewport: Viewport,
    content: Option<BannerContent>,
    geometry: Option<Geometry>,
    subtitle_line_limit: Option<usize>,
    frame: AnimatedFrame,
    running: Option<RunningAnimation>,
    finished: Vec<AnimationId>,
    next_subscription: u64,
    orientation: Option<u64>,
}

impl IcedSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Updates the viewport. Returns `true` if it changed and an orientation
    /// observer is registered.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        let changed = self.viewport != viewport;
        self.viewport = viewport;
        changed && self.orientation.is_some()
    }

    #[must_use]
    pub fn content(&self) -> Option<&BannerContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub fn frame(&self) -> AnimatedFrame {
        self.frame
    }

    #[must_use]
    pub fn subtitle_line_limit(&self) -> Option<usize> {
        self.subtitle_line_limit
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Steps the running animation to `now` and returns the ids that
    /// finished since the last call.
    pub fn advance(&mut self, now: Instant) -> Vec<AnimationId> {
        if let Some(running) = self.running.as_ref() {
            let total = running.request.duration.secs() as f32;
            let elapsed = now.saturating_duration_since(running.started).as_secs_f32();
            let progress = if total > 0.0 { elapsed / total } else { 1.0 };

            for transition in &running.request.transitions {
                let value = transition.value_at(running.start.get(transition.property), progress);
                self.frame.set(transition.property, value);
            }
            if progress >= 1.0 {
                self.finished.push(running.request.id);
                self.running = None;
            }
        }
        std::mem::take(&mut self.finished)
    }

    /// Height of a text block wrapped to `max_width`.
    ///
    /// Uses an average glyph advance rather than shaping the text.
    fn estimate_lines(text: &str, font_size: f32, max_width: f32) -> usize {
        let per_line = (max_width / (font_size * GLYPH_ADVANCE)).floor().max(1.0) as usize;
        text.lines()
            .map(|line| line.chars().count().div_ceil(per_line).max(1))
            .sum()
    }
}

impl BannerSurface for IcedSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn measure_text(
        &self,
        text: &str,
        role: TextRole,
        max_width: f32,
        max_lines: Option<usize>,
    ) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let (font_size, line_height) = match role {
            TextRole::Title => (TITLE_FONT_SIZE, TITLE_LINE_HEIGHT),
            TextRole::Subtitle => (SUBTITLE_FONT_SIZE, SUBTITLE_LINE_HEIGHT),
        };
        let lines = Self::estimate_lines(text, font_size, max_width);
        let lines = max_lines.map_or(lines, |limit| lines.min(limit));
        lines as f32 * line_height
    }

    fn attach(&mut self, announcement: &Announcement) {
        self.content = Some(BannerContent {
            title: announcement.title().to_owned(),
            subtitle: announcement.subtitle().to_owned(),
            image: announcement.image().cloned(),
        });
    }

    fn detach(&mut self) {
        self.content = None;
        self.geometry = None;
        self.running = None;
        self.frame = AnimatedFrame::default();
    }

    fn apply_geometry(&mut self, geometry: &Geometry) {
        self.geometry = Some(*geometry);
    }

    fn set_subtitle_line_limit(&mut self, limit: Option<usize>) {
        self.subtitle_line_limit = limit;
    }

    fn animate(&mut self, request: AnimationRequest) {
        let mut start = self.frame;
        for transition in &request.transitions {
            if let Some(from) = transition.from {
                start.set(transition.property, from);
            }
        }
        self.frame = start;

        if request.duration.is_instant() {
            for transition in &request.transitions {
                self.frame.set(transition.property, transition.to);
            }
            self.running = None;
            self.finished.push(request.id);
            return;
        }

        self.running = Some(RunningAnimation {
            request,
            started: Instant::now(),
            start,
        });
    }

    fn subscribe_orientation(&mut self) -> OrientationSubscription {
        self.next_subscription += 1;
        self.orientation = Some(self.next_subscription);
        OrientationSubscription::new(self.next_subscription)
    }

    fn unsubscribe_orientation(&mut self, subscription: OrientationSubscription) {
        if self.orientation == Some(subscription.id()) {
            self.orientation = None;
        }
    }
}
