// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::ui::banner::Announcement;
use iced::widget::image::Handle;
use iced::{Point, Size};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle as RuntimeHandle;

/// Runtime flags passed from the CLI.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Overrides the directory `settings.toml` is read from.
    pub config_dir: Option<PathBuf>,
    /// Runtime the dismiss timers sleep on.
    pub timer_runtime: RuntimeHandle,
}

/// Canned announcements offered by the demo buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Title only.
    Short,
    /// Subtitle long enough to be cut at two lines.
    Long,
    /// Avatar image with a one-line subtitle.
    WithImage,
    /// Gone after a tenth of a second.
    Quick,
}

impl Sample {
    pub const ALL: [Sample; 4] = [Sample::Short, Sample::Long, Sample::WithImage, Sample::Quick];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Long => "Long",
            Self::WithImage => "With image",
            Self::Quick => "0.1 s",
        }
    }

    /// Builds the announcement; tapping it bumps `taps`.
    ///
    /// Only [`Sample::Quick`] sets its own duration; the others stay up for
    /// the configured display time.
    #[must_use]
    pub fn announcement(self, taps: &Arc<AtomicUsize>) -> Announcement {
        let taps = Arc::clone(taps);
        let base = match self {
            Self::Short => Announcement::new("Upload finished"),
            Self::Long => Announcement::new("Ada Lovelace").with_subtitle(
                "The engine might compose elaborate and scientific pieces of music of any \
                 degree of complexity or extent. Pull down to read the rest of this note, \
                 or flick it up to put it away.",
            ),
            Self::WithImage => Announcement::new("Grace Hopper")
                .with_subtitle("Shared a picture with you")
                .with_image(avatar()),
            Self::Quick => Announcement::new("Copied").with_duration_secs(0.1),
        };
        base.with_action(move || {
            let count = taps.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::info!(count, "banner action triggered");
        })
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Present(Sample),
    Dismiss,
    ToggleStatusBar,
    /// Animation frame and timer drain.
    Tick(Instant),
    WindowResized(Size),
    CursorMoved(Point),
    CursorLeft,
    ButtonPressed,
    ButtonReleased,
}

/// Gradient square standing in for an avatar.
fn avatar() -> Handle {
    const SIDE: u32 = 48;
    let mut pixels = Vec::with_capacity((SIDE * SIDE * 4) as usize);
    for y in 0..SIDE {
        for x in 0..SIDE {
            pixels.extend_from_slice(&[
                (x * 255 / SIDE) as u8,
                (y * 255 / SIDE) as u8,
                200,
                255,
            ]);
        }
    }
    Handle::from_rgba(SIDE, SIDE, pixels)
}
