// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.
//!
//! Mouse events feed the pointer classifier, window resizes stand in for
//! orientation changes, and a frame tick drives animations and drains
//! fired timers.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Tick interval while a banner is on screen.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes native mouse and window events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

/// Maps one native event to a demo message.
///
/// A press already captured by a widget (a control panel button under an
/// expanded banner) never starts a banner gesture, so one click cannot
/// drive both.
fn route_event(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            (status == event::Status::Ignored).then_some(Message::ButtonPressed)
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::ButtonReleased)
        }
        _ => None,
    }
}

/// Creates the frame tick while a banner is up or a timer is pending.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
