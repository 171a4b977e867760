// SPDX-License-Identifier: MPL-2.0
//! Thread-local default banner.
//!
//! Hosts that only ever show one banner can install a controller here once
//! with [`init`] and reach it from anywhere on the UI thread. Independent
//! [`BannerController`] instances keep working alongside it.
//!
//! Calls made while the slot is already borrowed (for example from inside a
//! completion callback) are dropped and return `None`.

use super::announcement::Announcement;
use super::controller::{BannerController, Completion};
use crate::application::port::{BannerSurface, TimerScheduler};
use std::cell::RefCell;

/// Controller type held by the default slot.
pub type SharedBanner = BannerController<Box<dyn BannerSurface>, Box<dyn TimerScheduler>>;

thread_local! {
    static DEFAULT: RefCell<Option<SharedBanner>> = const { RefCell::new(None) };
}

/// Installs the default controller, replacing any previous one.
pub fn init(surface: Box<dyn BannerSurface>, scheduler: Box<dyn TimerScheduler>) {
    install(BannerController::new(surface, scheduler));
}

/// Installs an already configured controller.
pub fn install(controller: SharedBanner) {
    let previous = DEFAULT.with(|slot| match slot.try_borrow_mut() {
        Ok(mut slot) => slot.replace(controller),
        Err(_) => {
            tracing::warn!("default banner is busy, install ignored");
            None
        }
    });
    // Dropped outside the borrow so its teardown cannot observe the slot.
    drop(previous);
}

/// Removes the default controller.
pub fn reset() {
    let previous = DEFAULT.with(|slot| slot.try_borrow_mut().ok().and_then(|mut slot| slot.take()));
    drop(previous);
}

#[must_use]
pub fn is_initialized() -> bool {
    DEFAULT.with(|slot| slot.try_borrow().is_ok_and(|slot| slot.is_some()))
}

/// Runs `f` against the default controller.
///
/// Returns `None` when nothing is installed or the slot is already in use.
pub fn with<R>(f: impl FnOnce(&mut SharedBanner) -> R) -> Option<R> {
    DEFAULT.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            tracing::debug!("re-entrant access to default banner ignored");
            return None;
        };
        slot.as_mut().map(f)
    })
}

/// Presents on the default controller. Returns `false` if none is installed.
pub fn present(announcement: Announcement, completion: Option<Completion>) -> bool {
    with(|banner| banner.present(announcement, completion)).is_some()
}

/// Dismisses the default controller's banner, if any.
pub fn dismiss() -> bool {
    with(SharedBanner::dismiss).is_some()
}
