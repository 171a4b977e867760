// SPDX-License-Identifier: MPL-2.0
//! Host surface port definition.
//!
//! This module defines the [`BannerSurface`] trait: everything the banner
//! controller needs from the UI host. Infrastructure adapters (the Iced
//! demo host, test doubles) implement it.
//!
//! # Design Notes
//!
//! - Text is measured by the host; the controller only consumes heights
//! - Animations are fire-and-forget requests; the host reports completion
//!   through `BannerController::handle_animation_finished`
//! - Orientation subscriptions are explicit handles so the controller can
//!   release them exactly once

use crate::ui::banner::{AnimationRequest, Announcement, Geometry};

/// Current viewport metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width available to the banner.
    pub width: f32,
    /// Whether the host's status bar is hidden.
    pub status_bar_hidden: bool,
}

/// Which text element is being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Title,
    Subtitle,
}

/// Handle for an active orientation-change subscription.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct OrientationSubscription(u64);

impl OrientationSubscription {
    /// Wraps a host-specific subscription id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the host-specific subscription id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Port for the UI host presenting the banner.
///
/// # Lifecycle
///
/// 1. `subscribe_orientation()` and `attach()` when a banner is presented
/// 2. `apply_geometry()` and `animate()` while it is on screen
/// 3. `detach()` and `unsubscribe_orientation()` exactly once at teardown
pub trait BannerSurface {
    /// Returns the current viewport width and status-bar visibility.
    fn viewport(&self) -> Viewport;

    /// Measures the height `text` needs at `max_width`.
    ///
    /// `max_lines` of `None` means unbounded.
    fn measure_text(
        &self,
        text: &str,
        role: TextRole,
        max_width: f32,
        max_lines: Option<usize>,
    ) -> f32;

    /// Attaches the banner's visual root showing `announcement`.
    ///
    /// Called again with new content when a banner is replaced.
    fn attach(&mut self, announcement: &Announcement);

    /// Removes the banner's visual root.
    fn detach(&mut self);

    /// Applies element frames immediately.
    fn apply_geometry(&mut self, geometry: &Geometry);

    /// Changes how many lines the subtitle may wrap to (`None` = unbounded).
    fn set_subtitle_line_limit(&mut self, limit: Option<usize>);

    /// Starts a set of property transitions sharing one duration.
    fn animate(&mut self, request: AnimationRequest);

    /// Starts delivering orientation changes to the controller.
    fn subscribe_orientation(&mut self) -> OrientationSubscription;

    /// Stops delivering orientation changes.
    fn unsubscribe_orientation(&mut self, subscription: OrientationSubscription);
}

impl<S: BannerSurface + ?Sized> BannerSurface for Box<S> {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn measure_text(
        &self,
        text: &str,
        role: TextRole,
        max_width: f32,
        max_lines: Option<usize>,
    ) -> f32 {
        (**self).measure_text(text, role, max_width, max_lines)
    }

    fn attach(&mut self, announcement: &Announcement) {
        (**self).attach(announcement);
    }

    fn detach(&mut self) {
        (**self).detach();
    }

    fn apply_geometry(&mut self, geometry: &Geometry) {
        (**self).apply_geometry(geometry);
    }

    fn set_subtitle_line_limit(&mut self, limit: Option<usize>) {
        (**self).set_subtitle_line_limit(limit);
    }

    fn animate(&mut self, request: AnimationRequest) {
        (**self).animate(request);
    }

    fn subscribe_orientation(&mut self) -> OrientationSubscription {
        (**self).subscribe_orientation()
    }

    fn unsubscribe_orientation(&mut self, subscription: OrientationSubscription) {
        (**self).unsubscribe_orientation(subscription);
    }
}
