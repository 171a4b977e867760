// SPDX-License-Identifier: MPL-2.0
use iced_shout::application::port::{
    BannerSurface, OrientationSubscription, TextRole, TimerScheduler, TimerToken, Viewport,
};
use iced_shout::config::{self, Config};
use iced_shout::domain::banner::{DragEvent, PresentationState};
use iced_shout::error::{ConstructionError, Error};
use iced_shout::ui::banner::{
    shared, AnimationId, AnimationRequest, Announcement, BannerController, Geometry,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

#[derive(Default)]
struct Host {
    attached: bool,
    animations: Vec<AnimationRequest>,
    subscribed: bool,
    scheduled: Vec<(TimerToken, Duration)>,
}

impl Host {
    fn last_animation(&self) -> AnimationId {
        self.animations.last().expect("no animation").id
    }
}

#[derive(Clone, Default)]
struct Surface(Rc<RefCell<Host>>);

impl BannerSurface for Surface {
    fn viewport(&self) -> Viewport {
        Viewport {
            width: 390.0,
            status_bar_hidden: true,
        }
    }

    fn measure_text(&self, text: &str, _role: TextRole, _width: f32, limit: Option<usize>) -> f32 {
        let lines = text.lines().count();
        limit.map_or(lines, |limit| lines.min(limit)) as f32 * 18.0
    }

    fn attach(&mut self, _announcement: &Announcement) {
        self.0.borrow_mut().attached = true;
    }

    fn detach(&mut self) {
        self.0.borrow_mut().attached = false;
    }

    fn apply_geometry(&mut self, _geometry: &Geometry) {}

    fn set_subtitle_line_limit(&mut self, _limit: Option<usize>) {}

    fn animate(&mut self, request: AnimationRequest) {
        self.0.borrow_mut().animations.push(request);
    }

    fn subscribe_orientation(&mut self) -> OrientationSubscription {
        self.0.borrow_mut().subscribed = true;
        OrientationSubscription::new(1)
    }

    fn unsubscribe_orientation(&mut self, _subscription: OrientationSubscription) {
        self.0.borrow_mut().subscribed = false;
    }
}

#[derive(Clone, Default)]
struct Timer(Rc<RefCell<Host>>);

impl TimerScheduler for Timer {
    fn schedule(&mut self, token: TimerToken, after: Duration) {
        self.0.borrow_mut().scheduled.push((token, after));
    }

    fn cancel(&mut self, _token: TimerToken) {}
}

fn host() -> (Rc<RefCell<Host>>, Surface, Timer) {
    let host = Rc::new(RefCell::new(Host::default()));
    (host.clone(), Surface(host.clone()), Timer(host))
}

#[test]
fn configured_banner_runs_full_drag_cycle() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[timing]\npresent_animation_secs = 0.5\n\n[drag]\nfling_threshold = 20.0\n",
    )
    .expect("write config");
    let config = config::load_from_path(&path).expect("load config");

    let (host, surface, timer) = host();
    let mut banner = BannerController::with_config(surface, timer, &config);
    let done = Rc::new(RefCell::new(0));
    let counter = done.clone();
    banner.present(
        Announcement::new("Build passed").with_subtitle("main\n42 tests"),
        Some(Box::new(move || *counter.borrow_mut() += 1)),
    );

    assert_eq!(host.borrow().animations[0].duration.secs(), 0.5);
    assert_eq!(banner.current_height(), 55.0 + 36.0);
    let id = host.borrow().last_animation();
    banner.handle_animation_finished(id);

    // -10 is inside the configured fling threshold, so the banner stays.
    banner.handle_drag_event(DragEvent::Begin);
    banner.handle_drag_event(DragEvent::Change(-10.0));
    banner.handle_drag_event(DragEvent::End(-10.0));
    assert_eq!(banner.state(), PresentationState::Displayed);

    banner.handle_drag_event(DragEvent::Begin);
    banner.handle_drag_event(DragEvent::End(-25.0));
    assert_eq!(banner.state(), PresentationState::Dismissing);

    let id = host.borrow().last_animation();
    banner.handle_animation_finished(id);
    assert_eq!(banner.state(), PresentationState::Dismissed);
    assert_eq!(*done.borrow(), 1);
    assert!(!host.borrow().attached);
    assert!(!host.borrow().subscribed);
}

#[test]
fn defaults_survive_save_and_reload() {
    let dir = tempdir().expect("temp dir");
    config::save_with_override(&Config::default(), Some(dir.path().to_path_buf()))
        .expect("save");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.tuning(), Config::default().tuning());
}

#[test]
fn decoding_persisted_banner_is_rejected() {
    let result = BannerController::<Surface, Timer>::decode(&[1, 2, 3]);
    assert!(matches!(
        result,
        Err(Error::Construction(
            ConstructionError::PersistedStateUnsupported
        ))
    ));
}

#[test]
fn shared_banner_times_out_through_boxed_ports() {
    let (host, surface, timer) = host();
    shared::init(Box::new(surface), Box::new(timer));

    assert!(shared::present(
        Announcement::new("Saved").with_duration_secs(0.1),
        None
    ));
    let (token, after) = host.borrow().scheduled[0];
    assert_eq!(after, Duration::from_millis(100));

    shared::with(|banner| banner.handle_timer_fired(token));
    assert_eq!(
        shared::with(|banner| banner.state()),
        Some(PresentationState::Dismissing)
    );

    let id = host.borrow().last_animation();
    shared::with(|banner| banner.handle_animation_finished(id));
    assert_eq!(
        shared::with(|banner| banner.state()),
        Some(PresentationState::Dismissed)
    );
    shared::reset();
    assert!(!shared::is_initialized());
}
