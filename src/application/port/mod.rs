// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the capabilities the banner controller consumes
//! from its host. Adapters implement these traits; the controller never
//! talks to a windowing toolkit directly.
//!
//! # Available Ports
//!
//! - [`surface`]: Text measurement, attachment, animation, orientation
//! - [`timer`]: One-shot dismiss timers
//!
//! # Design Notes
//!
//! - Traits are not `Send`; the controller lives on the UI thread
//! - No `async fn` - completions come back as explicit controller calls
//! - `Box<T>` forwards both traits so hosts can be type-erased
//!
//! # Example
//!
//! ```ignore
//! use iced_shout::application::port::{BannerSurface, TextRole};
//!
//! fn title_height(surface: &impl BannerSurface, title: &str) -> f32 {
//!     surface.measure_text(title, TextRole::Title, surface.viewport().width, Some(2))
//! }
//! ```

pub mod surface;
pub mod timer;

// Re-export main types for convenience
pub use surface::{BannerSurface, OrientationSubscription, TextRole, Viewport};
pub use timer::{TimerScheduler, TimerToken};
