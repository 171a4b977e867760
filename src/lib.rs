// SPDX-License-Identifier: MPL-2.0
//! `iced_shout` is a transient notification banner engine with an Iced demo host.
//!
//! A banner slides in from the top, dismisses itself after a timeout, and
//! can be pulled down to expand, flung up to dismiss, or tapped to run an
//! action. The engine is toolkit-agnostic: hosts implement the ports in
//! [`application::port`] and feed events into
//! [`ui::banner::BannerController`].

#![doc(html_root_url = "https://docs.rs/iced_shout/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_utils;
