// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture classification
//!
//! Turns raw press/move/release positions over the banner into drag phases
//! and taps. A press only becomes a drag once the cursor has travelled past
//! [`DRAG_THRESHOLD`]; a release before that is a tap.

use crate::domain::banner::DragEvent;
use iced::Point;

/// Distance the cursor must travel before a press becomes a drag.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    Tap,
    Drag(DragEvent),
}

/// Manages press-and-drag state over the banner
#[derive(Debug, Clone, Default)]
pub struct PointerGesture {
    /// Position where the press started
    pub start_position: Option<Point>,

    /// Whether the press has turned into a drag
    pub is_dragging: bool,
}

impl PointerGesture {
    /// Starts tracking a press
    pub fn press(&mut self, position: Point) {
        self.start_position = Some(position);
        self.is_dragging = false;
    }

    /// Feeds a cursor move and returns the drag phases it produces.
    pub fn moved(&mut self, position: Point) -> Vec<DragEvent> {
        let Some(start) = self.start_position else {
            return Vec::new();
        };
        let delta_y = position.y - start.y;

        if self.is_dragging {
            return vec![DragEvent::Change(delta_y)];
        }
        if position.distance(start) < DRAG_THRESHOLD {
            return Vec::new();
        }
        self.is_dragging = true;
        vec![DragEvent::Begin, DragEvent::Change(delta_y)]
    }

    /// Ends the press. `None` if no press was being tracked.
    pub fn release(&mut self, position: Point) -> Option<Release> {
        let start = self.start_position.take()?;
        let was_dragging = std::mem::take(&mut self.is_dragging);

        Some(if was_dragging {
            Release::Drag(DragEvent::End(position.y - start.y))
        } else {
            Release::Tap
        })
    }

    /// Drops the press when the cursor leaves the window. A running drag
    /// ends as if released where it started.
    pub fn cancel(&mut self) -> Option<DragEvent> {
        self.start_position.take()?;
        std::mem::take(&mut self.is_dragging).then_some(DragEvent::End(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gesture_is_idle() {
        let mut gesture = PointerGesture::default();
        assert!(gesture.moved(Point::new(0.0, 40.0)).is_empty());
        assert_eq!(gesture.release(Point::ORIGIN), None);
    }

    #[test]
    fn short_press_is_a_tap() {
        let mut gesture = PointerGesture::default();
        gesture.press(Point::new(100.0, 30.0));
        assert!(gesture.moved(Point::new(103.0, 33.0)).is_empty());
        assert_eq!(gesture.release(Point::new(103.0, 33.0)), Some(Release::Tap));
    }

    #[test]
    fn crossing_threshold_begins_drag() {
        let mut gesture = PointerGesture::default();
        gesture.press(Point::new(100.0, 30.0));

        let events = gesture.moved(Point::new(100.0, 45.0));
        assert_eq!(events, vec![DragEvent::Begin, DragEvent::Change(15.0)]);
        assert_eq!(
            gesture.moved(Point::new(100.0, 20.0)),
            vec![DragEvent::Change(-10.0)]
        );
    }

    #[test]
    fn release_after_drag_ends_with_translation() {
        let mut gesture = PointerGesture::default();
        gesture.press(Point::new(100.0, 30.0));
        gesture.moved(Point::new(100.0, 10.0));

        assert_eq!(
            gesture.release(Point::new(100.0, 12.0)),
            Some(Release::Drag(DragEvent::End(-18.0)))
        );
        assert!(!gesture.is_dragging);
    }

    #[test]
    fn cancel_mid_drag_ends_in_place() {
        let mut gesture = PointerGesture::default();
        gesture.press(Point::new(0.0, 0.0));
        gesture.moved(Point::new(0.0, 30.0));

        assert_eq!(gesture.cancel(), Some(DragEvent::End(0.0)));
        assert_eq!(gesture.cancel(), None);
    }
}
