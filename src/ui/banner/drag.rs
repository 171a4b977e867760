// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Turns begin/change/end samples into live banner heights while the drag
//! is in progress and a terminal decision once it is released.

use crate::domain::banner::DismissReason;
use crate::domain::ui::RubberBandDamping;

/// Per-gesture bookkeeping, alive from `Begin` to `End`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Subtitle height at its resting line limit, captured before expansion.
    pub original_subtitle_height: f32,
    /// Subtitle height with the line limit lifted.
    pub expanded_subtitle_height: f32,
    /// Latest vertical translation.
    pub translation: f32,
}

impl DragSession {
    /// How far the banner can grow before rubber-banding kicks in.
    #[must_use]
    pub fn max_expansion(&self) -> f32 {
        (self.expanded_subtitle_height - self.original_subtitle_height).max(0.0)
    }
}

/// How a released drag resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Return to the resting height.
    SnapBack { height: f32 },
    /// Collapse to zero and tear the banner down.
    Dismiss { reason: DismissReason },
}

/// Manages drag-to-expand and drag-to-dismiss state
#[derive(Debug, Clone)]
pub struct DragController {
    session: Option<DragSession>,
    rubber_band: RubberBandDamping,
    fling_threshold: f32,
}

impl DragController {
    pub fn new(rubber_band: RubberBandDamping, fling_threshold: f32) -> Self {
        Self {
            session: None,
            rubber_band,
            fling_threshold,
        }
    }

    /// Starts a drag session.
    ///
    /// Returns `false` and keeps the running session if one already exists,
    /// since its original height was captured before the subtitle expanded.
    pub fn begin(&mut self, original_subtitle_height: f32, expanded_subtitle_height: f32) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            original_subtitle_height,
            expanded_subtitle_height,
            translation: 0.0,
        });
        true
    }

    /// Applies a translation sample and returns the banner height to show.
    ///
    /// `None` when no session is running.
    pub fn change(&mut self, translation: f32, resting_height: f32) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.translation = translation;

        let max_expansion = session.max_expansion();
        let height = if translation >= max_expansion {
            resting_height + max_expansion + self.rubber_band.damp(translation - max_expansion)
        } else {
            resting_height + translation
        };
        Some(height.max(0.0))
    }

    /// Ends the session and decides where the banner goes.
    ///
    /// `should_silent` records a dismiss timer that expired mid-drag.
    /// `None` when no session is running.
    pub fn end(
        &mut self,
        translation: f32,
        should_silent: bool,
        resting_height: f32,
    ) -> Option<DragOutcome> {
        self.session.take()?;

        let outcome = if translation < -self.fling_threshold {
            DragOutcome::Dismiss {
                reason: DismissReason::Fling,
            }
        } else if should_silent {
            DragOutcome::Dismiss {
                reason: DismissReason::DeferredTimeout,
            }
        } else {
            DragOutcome::SnapBack {
                height: resting_height,
            }
        };
        Some(outcome)
    }

    /// Replaces the measured subtitle heights of a running session, keeping
    /// its translation.
    pub fn remeasure(&mut self, original_subtitle_height: f32, expanded_subtitle_height: f32) {
        if let Some(session) = self.session.as_mut() {
            session.original_subtitle_height = original_subtitle_height;
            session.expanded_subtitle_height = expanded_subtitle_height;
        }
    }

    /// Drops any running session without a decision.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Whether a gesture is between begin and end.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }
}
