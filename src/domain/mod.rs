// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core banner types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`banner`]: Lifecycle types ([`PresentationState`](banner::PresentationState),
//!   [`DragEvent`](banner::DragEvent), [`DismissReason`](banner::DismissReason))
//! - [`ui`]: UI value objects ([`DisplayDuration`](ui::newtypes::DisplayDuration),
//!   [`AnimationDuration`](ui::newtypes::AnimationDuration),
//!   [`RubberBandDamping`](ui::newtypes::RubberBandDamping))

pub mod banner;
pub mod ui;
