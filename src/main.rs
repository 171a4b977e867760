// SPDX-License-Identifier: MPL-2.0
use iced_shout::app::{self, Flags};
use iced_shout::logging;
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_shout [OPTIONS]

Options:
  --log-level <LEVEL>   error, warn, info, debug or trace (default: info)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or(None);
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir").unwrap_or(None);

    let (level, recognized) = logging::parse_level(log_level.as_deref());
    logging::init(level);
    if !recognized {
        tracing::warn!(?log_level, "unknown log level, using info");
    }
    for unused in args.finish() {
        tracing::warn!(argument = ?unused, "ignoring unknown argument");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("banner-timer")
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "failed to start timer runtime");
            std::process::exit(1);
        }
    };

    app::run(Flags {
        config_dir,
        timer_runtime: runtime.handle().clone(),
    })
}
