// SPDX-License-Identifier: MPL-2.0
//! Animation requests issued by the banner controller.
//!
//! Every visible height change is a set of property transitions sharing one
//! duration. The host runs them and reports completion by [`AnimationId`].

use super::layout::LayoutEngine;
use crate::domain::ui::AnimationDuration;

/// Identifies one animation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A numeric property the host animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Height of the banner's outer frame.
    BannerHeight,
    /// Height of the clipped background.
    BackgroundHeight,
    /// Vertical origin of the drag indicator.
    IndicatorY,
}

/// Moves one property to `to`, optionally jumping to `from` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: AnimatedProperty,
    pub from: Option<f32>,
    pub to: f32,
}

impl Transition {
    /// Interpolated value at `progress` (0..=1) with an ease-in-out curve.
    #[must_use]
    pub fn value_at(&self, start: f32, progress: f32) -> f32 {
        let start = self.from.unwrap_or(start);
        let t = progress.clamp(0.0, 1.0);
        let eased = t * t * (3.0 - 2.0 * t);
        start + (self.to - start) * eased
    }
}

/// Transitions issued together with a single completion.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    pub id: AnimationId,
    pub duration: AnimationDuration,
    pub transitions: Vec<Transition>,
}

impl AnimationRequest {
    /// Resizes the banner, keeping the background and indicator in step.
    pub(crate) fn resize(
        id: AnimationId,
        duration: AnimationDuration,
        from: Option<f32>,
        height: f32,
    ) -> Self {
        let transition = |property, from: Option<f32>, to| Transition { property, from, to };
        Self {
            id,
            duration,
            transitions: vec![
                transition(AnimatedProperty::BannerHeight, from, height),
                transition(AnimatedProperty::BackgroundHeight, from, height),
                transition(
                    AnimatedProperty::IndicatorY,
                    from.map(LayoutEngine::indicator_y),
                    LayoutEngine::indicator_y(height),
                ),
            ],
        }
    }

    /// Target of the banner height transition, if any.
    #[must_use]
    pub fn height_target(&self) -> Option<f32> {
        self.target_of(AnimatedProperty::BannerHeight)
    }

    /// Target of the transition for `property`, if any.
    #[must_use]
    pub fn target_of(&self, property: AnimatedProperty) -> Option<f32> {
        self.transitions
            .iter()
            .find(|transition| transition.property == property)
            .map(|transition| transition.to)
    }
}
