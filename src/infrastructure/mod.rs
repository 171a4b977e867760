// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`tokio_timer`]: Dismiss timer backed by Tokio sleep tasks (implements [`TimerScheduler`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Fires are delivered over channels and applied on the UI thread
//!
//! [`TimerScheduler`]: crate::application::port::TimerScheduler

pub mod tokio_timer;

// Re-export main types for convenience
pub use tokio_timer::TokioTimer;
