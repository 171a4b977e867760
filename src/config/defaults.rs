// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all banner constants.
//!
//! This module serves as the single source of truth for the dimensions,
//! durations and drag thresholds used across the crate. Constants are
//! organized by category.
//!
//! # Categories
//!
//! - **Layout**: Banner heights, image and indicator dimensions
//! - **Timing**: Display and animation durations
//! - **Drag**: Fling threshold and rubber-band damping

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Banner base height when the status bar is hidden.
pub const BASE_HEIGHT_STATUS_BAR_HIDDEN: f32 = 55.0;

/// Banner base height when the status bar is visible.
pub const BASE_HEIGHT_STATUS_BAR_VISIBLE: f32 = 65.0;

/// Side length of the (round) announcement image.
pub const IMAGE_SIZE: f32 = 48.0;

/// Distance of the image from the leading edge.
pub const IMAGE_OFFSET: f32 = 18.0;

/// Leading offset of the text column when an image is shown.
pub const TEXT_OFFSET: f32 = 75.0;

/// Vertical nudge applied to the image when the status bar is hidden.
pub const IMAGE_NUDGE_STATUS_BAR_HIDDEN: f32 = 2.5;

/// Vertical nudge applied to the image when the status bar is visible.
pub const IMAGE_NUDGE_STATUS_BAR_VISIBLE: f32 = 5.0;

/// Gap between the title's bottom edge and the subtitle.
pub const TITLE_SUBTITLE_GAP: f32 = 2.5;

/// Upward shift of a lone title relative to the image center.
pub const LONE_TITLE_SHIFT: f32 = 2.5;

/// Drag indicator width.
pub const INDICATOR_WIDTH: f32 = 50.0;

/// Drag indicator height.
pub const INDICATOR_HEIGHT: f32 = 6.0;

/// Gap between the drag indicator and the banner's bottom edge.
pub const INDICATOR_BOTTOM_MARGIN: f32 = 5.0;

/// Number of lines the title and subtitle wrap to while resting.
pub const RESTING_LINE_LIMIT: usize = 2;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a banner stays on screen before auto-dismissing (in seconds).
pub const DEFAULT_DISPLAY_SECS: f64 = 2.0;

/// Maximum display duration accepted from configuration (in seconds).
pub const MAX_DISPLAY_SECS: f64 = 60.0;

/// Slide-in and slide-out animation duration (in seconds).
pub const DEFAULT_PRESENT_ANIMATION_SECS: f64 = 0.35;

/// Duration of the settle animation at the end of a drag (in seconds).
pub const DEFAULT_DRAG_SETTLE_SECS: f64 = 0.2;

/// Maximum animation duration accepted from configuration (in seconds).
pub const MAX_ANIMATION_SECS: f64 = 2.0;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Upward translation past which a released drag dismisses the banner.
pub const DEFAULT_FLING_THRESHOLD: f32 = 5.0;

/// Divisor applied to translation beyond full subtitle expansion.
pub const DEFAULT_RUBBER_BAND_DAMPING: f32 = 25.0;

/// Smallest accepted rubber-band divisor.
pub const MIN_RUBBER_BAND_DAMPING: f32 = 1.0;

/// Largest accepted rubber-band divisor.
pub const MAX_RUBBER_BAND_DAMPING: f32 = 100.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Layout validation
    assert!(BASE_HEIGHT_STATUS_BAR_HIDDEN > 0.0);
    assert!(BASE_HEIGHT_STATUS_BAR_VISIBLE > BASE_HEIGHT_STATUS_BAR_HIDDEN);
    assert!(TEXT_OFFSET >= IMAGE_OFFSET + IMAGE_SIZE);
    assert!(INDICATOR_HEIGHT + INDICATOR_BOTTOM_MARGIN < BASE_HEIGHT_STATUS_BAR_HIDDEN);
    assert!(RESTING_LINE_LIMIT > 0);

    // Timing validation
    assert!(DEFAULT_DISPLAY_SECS >= 0.0);
    assert!(DEFAULT_DISPLAY_SECS <= MAX_DISPLAY_SECS);
    assert!(DEFAULT_PRESENT_ANIMATION_SECS > 0.0);
    assert!(DEFAULT_PRESENT_ANIMATION_SECS <= MAX_ANIMATION_SECS);
    assert!(DEFAULT_DRAG_SETTLE_SECS > 0.0);
    assert!(DEFAULT_DRAG_SETTLE_SECS <= MAX_ANIMATION_SECS);

    // Drag validation
    assert!(DEFAULT_FLING_THRESHOLD >= 0.0);
    assert!(DEFAULT_RUBBER_BAND_DAMPING >= MIN_RUBBER_BAND_DAMPING);
    assert!(DEFAULT_RUBBER_BAND_DAMPING <= MAX_RUBBER_BAND_DAMPING);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults_match_banner_metrics() {
        assert_eq!(BASE_HEIGHT_STATUS_BAR_HIDDEN, 55.0);
        assert_eq!(BASE_HEIGHT_STATUS_BAR_VISIBLE, 65.0);
        assert_eq!(IMAGE_SIZE, 48.0);
        assert_eq!(IMAGE_OFFSET, 18.0);
        assert_eq!(TEXT_OFFSET, 75.0);
    }

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_PRESENT_ANIMATION_SECS, 0.35);
        assert_eq!(DEFAULT_DRAG_SETTLE_SECS, 0.2);
        assert!(DEFAULT_DISPLAY_SECS <= MAX_DISPLAY_SECS);
    }

    #[test]
    fn drag_defaults_are_valid() {
        assert_eq!(DEFAULT_FLING_THRESHOLD, 5.0);
        assert_eq!(DEFAULT_RUBBER_BAND_DAMPING, 25.0);
    }
}
