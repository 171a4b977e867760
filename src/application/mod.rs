// SPDX-License-Identifier: MPL-2.0
//! Application layer - host capability ports.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The banner controller depends only on these ports
//! - Infrastructure and the demo app implement them
//!
//! # Example
//!
//! ```ignore
//! use iced_shout::application::port::TimerScheduler;
//!
//! // Infrastructure implements the port trait
//! struct TokioTimer { /* ... */ }
//! impl TimerScheduler for TokioTimer { /* ... */ }
//! ```

pub mod port;
