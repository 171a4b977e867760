// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! # Components
//!
//! - [`banner`] - Transient notification banner: layout, timer, drag and
//!   the presentation state machine
pub mod banner;
