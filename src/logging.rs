// SPDX-License-Identifier: MPL-2.0
//! Console logging for the demo binary.
//!
//! Installs a `tracing-subscriber` fmt subscriber once per process. The
//! library itself only emits `tracing` events and never installs a
//! subscriber.

use std::str::FromStr;
use std::sync::OnceLock;
use tracing::Level;

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Level used when none is given or the given one does not parse.
pub const DEFAULT_LEVEL: Level = Level::INFO;

/// Parses a level name (`error`, `warn`, `info`, `debug`, `trace`).
///
/// Unknown names fall back to [`DEFAULT_LEVEL`] and return it with `false`.
#[must_use]
pub fn parse_level(name: Option<&str>) -> (Level, bool) {
    match name {
        None => (DEFAULT_LEVEL, true),
        Some(name) => match Level::from_str(name.trim()) {
            Ok(level) => (level, true),
            Err(_) => (DEFAULT_LEVEL, false),
        },
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(level: Level) {
    let _ = LOGGING_INIT.get_or_init(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .compact()
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("A global tracing subscriber is already installed");
        }
    });
}
