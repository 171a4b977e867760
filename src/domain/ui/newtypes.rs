// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for banner timing and drag
//! tuning values, ensuring they are always within valid ranges.

use crate::config::defaults;
use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Display duration bounds (0s to 60s).
pub mod display_bounds {
    use crate::config::defaults;

    /// Minimum display duration in seconds.
    pub const MIN_SECS: f64 = 0.0;
    /// Maximum display duration in seconds.
    pub const MAX_SECS: f64 = defaults::MAX_DISPLAY_SECS;
    /// Default display duration in seconds.
    pub const DEFAULT_SECS: f64 = defaults::DEFAULT_DISPLAY_SECS;
}

/// Animation duration bounds (instant to 2s).
pub mod animation_bounds {
    use crate::config::defaults;

    /// Minimum animation duration in seconds (instant).
    pub const MIN_SECS: f64 = 0.0;
    /// Maximum animation duration in seconds.
    pub const MAX_SECS: f64 = defaults::MAX_ANIMATION_SECS;
}

/// Clamps a seconds value, mapping NaN to the lower bound.
fn clamp_secs(secs: f64, min: f64, max: f64) -> f64 {
    if secs.is_nan() {
        min
    } else {
        secs.clamp(min, max)
    }
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a banner stays on screen before the dismiss timer fires.
///
/// Guaranteed to be within 0–60 seconds. Negative and NaN inputs collapse
/// to zero, which dismisses the banner as soon as the timer is serviced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDuration(f64);

impl DisplayDuration {
    /// Creates a display duration, clamping to the valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        Self(clamp_secs(
            secs,
            display_bounds::MIN_SECS,
            display_bounds::MAX_SECS,
        ))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(display_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Length of a height transition, within 0–2 seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDuration(f64);

impl AnimationDuration {
    /// A transition applied immediately, without interpolation.
    pub const INSTANT: Self = Self(0.0);

    /// Creates an animation duration, clamping to the valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        Self(clamp_secs(
            secs,
            animation_bounds::MIN_SECS,
            animation_bounds::MAX_SECS,
        ))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }

    /// Returns true if the transition has no interpolation.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(defaults::DEFAULT_PRESENT_ANIMATION_SECS)
    }
}

// =============================================================================
// RubberBandDamping
// =============================================================================

/// Divisor applied to drag translation past the full subtitle expansion.
///
/// Always at least 1, so over-pulling can never move faster than the finger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBandDamping(f32);

impl RubberBandDamping {
    /// Creates a damping factor, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(
            defaults::MIN_RUBBER_BAND_DAMPING,
            defaults::MAX_RUBBER_BAND_DAMPING,
        ))
    }

    /// Returns the raw divisor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Applies the damping to an overshoot distance.
    #[must_use]
    pub fn damp(self, overshoot: f32) -> f32 {
        overshoot / self.0
    }
}

impl Default for RubberBandDamping {
    fn default() -> Self {
        Self(defaults::DEFAULT_RUBBER_BAND_DAMPING)
    }
}
