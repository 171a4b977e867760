// SPDX-License-Identifier: MPL-2.0
//! Banner content.
//!
//! An [`Announcement`] is the payload of one presentation: text, an
//! optional image, how long it stays up and what happens when it is tapped.

use crate::domain::ui::DisplayDuration;
use iced::widget::image::Handle;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Callback run when the banner is tapped.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Content for a single banner presentation.
#[derive(Clone)]
pub struct Announcement {
    title: String,
    subtitle: String,
    image: Option<Handle>,
    duration: Option<DisplayDuration>,
    action: Option<Action>,
}

impl Announcement {
    /// Creates an announcement that stays up for the presenting
    /// controller's configured display duration.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            image: None,
            duration: None,
            action: None,
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: Handle) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the display duration, clamped like [`DisplayDuration`].
    #[must_use]
    pub fn with_duration(self, duration: Duration) -> Self {
        self.with_duration_secs(duration.as_secs_f64())
    }

    /// Sets the display duration in seconds.
    ///
    /// Negative and NaN values become zero; values past the display
    /// maximum are capped.
    #[must_use]
    pub fn with_duration_secs(mut self, secs: f64) -> Self {
        self.duration = Some(DisplayDuration::new(secs));
        self
    }

    /// Sets the callback run when the banner is tapped.
    #[must_use]
    pub fn with_action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn image(&self) -> Option<&Handle> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Explicit display duration, `None` to use the controller's.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration.map(DisplayDuration::as_duration)
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }
}

impl fmt::Debug for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcement")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("has_image", &self.image.is_some())
            .field("duration", &self.duration())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
