// SPDX-License-Identifier: MPL-2.0
//! Transient notification banner.
//!
//! A banner slides in from the top edge, stays for the announcement's
//! duration and slides out again. While it is up the user can pull it down
//! to read a long subtitle, fling it away, or tap it to run its action.
//!
//! # Components
//!
//! - [`layout`] - Pure geometry for the banner's elements
//! - [`timer`] - Cancelable single-shot dismiss timer
//! - [`drag`] - Drag-to-expand and drag-to-dismiss decisions
//! - [`controller`] - State machine tying the above together
//! - [`shared`] - Thread-local default instance
//!
//! # Usage
//!
//! ```ignore
//! use iced_shout::ui::banner::{Announcement, BannerController};
//!
//! let mut banner = BannerController::new(surface, scheduler);
//! banner.present(
//!     Announcement::new("Ada").with_subtitle("Sent you a message"),
//!     Some(Box::new(|| tracing::info!("banner gone"))),
//! );
//!
//! // Later, from the host's event loop
//! banner.handle_timer_fired(token);
//! banner.handle_animation_finished(id);
//! ```

pub mod announcement;
pub mod controller;
pub mod drag;
pub mod layout;
pub mod shared;
pub mod timer;
pub mod transition;


pub use announcement::{Action, Announcement};
pub use controller::{BannerController, Completion};
pub use drag::{DragController, DragOutcome, DragSession};
pub use layout::{Geometry, LayoutEngine, LayoutInput};
pub use timer::DismissTimer;
pub use transition::{AnimatedProperty, AnimationId, AnimationRequest, Transition};
