// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting one banner.
//!
//! The `App` struct owns a [`BannerController`] wired to an
//! [`IcedSurface`] and a [`TokioTimer`], and translates iced messages into
//! controller calls: buttons present canned announcements, mouse input is
//! classified into drags and taps, window resizes count as orientation
//! changes, and a frame tick advances animations and delivers timer fires.

pub mod host;
mod message;
pub mod pointer;
mod subscription;
mod view;

pub use message::{Flags, Message, Sample};

use crate::application::port::{TimerToken, Viewport};
use crate::config;
use crate::infrastructure::TokioTimer;
use crate::ui::banner::BannerController;
use host::IcedSurface;
use iced::{window, Element, Point, Size, Subscription, Task};
use pointer::{PointerGesture, Release};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 280.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root state of the demo.
pub struct App {
    banner: BannerController<IcedSurface, TokioTimer>,
    fired_rx: mpsc::UnboundedReceiver<TimerToken>,
    pointer: PointerGesture,
    cursor: Point,
    window_width: f32,
    status_bar_hidden: bool,
    config_warning: Option<String>,
    taps: Arc<AtomicUsize>,
    completions: Arc<AtomicUsize>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.banner.state())
            .field("window_width", &self.window_width)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir);
        let (timer, fired_rx) = TokioTimer::new(flags.timer_runtime);
        let surface = IcedSurface::new(Viewport {
            width: WINDOW_DEFAULT_WIDTH,
            status_bar_hidden: false,
        });

        let app = Self {
            banner: BannerController::with_config(surface, timer, &config),
            fired_rx,
            pointer: PointerGesture::default(),
            cursor: Point::ORIGIN,
            window_width: WINDOW_DEFAULT_WIDTH,
            status_bar_hidden: false,
            config_warning,
            taps: Arc::new(AtomicUsize::new(0)),
            completions: Arc::new(AtomicUsize::new(0)),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("IcedShout - {}", self.banner.state())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Present(sample) => {
                let announcement = sample.announcement(&self.taps);
                let completions = Arc::clone(&self.completions);
                self.pointer = PointerGesture::default();
                self.banner.present(
                    announcement,
                    Some(Box::new(move || {
                        completions.fetch_add(1, Ordering::Relaxed);
                    })),
                );
            }
            Message::Dismiss => self.banner.dismiss(),
            Message::ToggleStatusBar => {
                self.status_bar_hidden = !self.status_bar_hidden;
                self.sync_viewport();
            }
            Message::Tick(now) => self.on_tick(now),
            Message::WindowResized(size) => {
                self.window_width = size.width;
                self.sync_viewport();
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
                for event in self.pointer.moved(position) {
                    self.banner.handle_drag_event(event);
                }
            }
            Message::CursorLeft => {
                if let Some(event) = self.pointer.cancel() {
                    self.banner.handle_drag_event(event);
                }
            }
            Message::ButtonPressed => {
                if self.banner_contains(self.cursor) {
                    self.pointer.press(self.cursor);
                }
            }
            Message::ButtonReleased => match self.pointer.release(self.cursor) {
                Some(Release::Tap) => self.banner.handle_tap(),
                Some(Release::Drag(event)) => self.banner.handle_drag_event(event),
                None => {}
            },
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            surface: self.banner.surface(),
            state: self.banner.state(),
            current_height: self.banner.current_height(),
            pan_active: self.banner.is_pan_active(),
            should_silent: self.banner.should_silent(),
            status_bar_hidden: self.status_bar_hidden,
            taps: self.taps.load(Ordering::Relaxed),
            completions: self.completions.load(Ordering::Relaxed),
            config_warning: self.config_warning.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let active = self.banner.state().is_active() || self.banner.scheduler().pending() > 0;
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(active),
        ])
    }

    /// Delivers fired timers, then steps animations.
    fn on_tick(&mut self, now: Instant) {
        while let Ok(token) = self.fired_rx.try_recv() {
            self.banner.handle_timer_fired(token);
        }
        for id in self.banner.surface_mut().advance(now) {
            self.banner.handle_animation_finished(id);
        }
    }

    fn sync_viewport(&mut self) {
        let viewport = Viewport {
            width: self.window_width,
            status_bar_hidden: self.status_bar_hidden,
        };
        if self.banner.surface_mut().set_viewport(viewport) {
            self.banner.handle_orientation_change();
        }
    }

    fn banner_contains(&self, position: Point) -> bool {
        self.banner.state().is_interactive()
            && position.y >= 0.0
            && position.y <= self.banner.surface().frame().banner_height
    }
}
