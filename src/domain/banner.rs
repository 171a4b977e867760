// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle value types.
//!
//! These types describe where a banner is in its presentation cycle and
//! the classified gesture input it reacts to. They carry no rendering or
//! timing machinery.

use std::fmt;

/// Lifecycle state of a banner presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationState {
    /// Nothing has been presented yet.
    #[default]
    Idle,
    /// The slide-in animation is running.
    Presenting,
    /// Resting on screen, waiting for the timer or the user.
    Displayed,
    /// A drag gesture is in progress.
    Dragging,
    /// The dismiss timer expired during a drag; dismissal waits for the drag to end.
    AutoDismissPending,
    /// The slide-out animation is running.
    Dismissing,
    /// Torn down. Terminal until the next `present`.
    Dismissed,
}

impl PresentationState {
    /// Returns true while a banner is attached and has not started leaving.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            Self::Presenting | Self::Displayed | Self::Dragging | Self::AutoDismissPending
        )
    }

    /// Returns true while a drag gesture owns the banner height.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging | Self::AutoDismissPending)
    }

    /// Returns true if a banner is currently attached to the host surface.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle | Self::Dismissed)
    }
}

impl fmt::Display for PresentationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Presenting => "presenting",
            Self::Displayed => "displayed",
            Self::Dragging => "dragging",
            Self::AutoDismissPending => "auto-dismiss-pending",
            Self::Dismissing => "dismissing",
            Self::Dismissed => "dismissed",
        };
        f.write_str(name)
    }
}

/// A classified drag gesture phase with its vertical translation.
///
/// Translation is measured from the point where the gesture began;
/// positive values pull the banner down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Begin,
    Change(f32),
    End(f32),
}

/// Why a banner left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The display timer expired.
    Timeout,
    /// The user flung the banner upward.
    Fling,
    /// The timer expired mid-drag and the drag has now ended.
    DeferredTimeout,
    /// The banner was tapped.
    Tap,
    /// The host asked for dismissal.
    Requested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(PresentationState::default(), PresentationState::Idle);
    }

    #[test]
    fn interactive_states_exclude_teardown() {
        assert!(PresentationState::Displayed.is_interactive());
        assert!(PresentationState::AutoDismissPending.is_interactive());
        assert!(!PresentationState::Dismissing.is_interactive());
        assert!(!PresentationState::Dismissed.is_interactive());
        assert!(!PresentationState::Idle.is_interactive());
    }

    #[test]
    fn active_states_include_dismissing() {
        assert!(PresentationState::Dismissing.is_active());
        assert!(!PresentationState::Dismissed.is_active());
    }

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(
            PresentationState::AutoDismissPending.to_string(),
            "auto-dismiss-pending"
        );
    }
}
