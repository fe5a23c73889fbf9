//! Log output on stderr.
//!
//! `RUST_LOG` wins when set. Otherwise the level follows `-v`: warnings by
//! default, `info` with `-v`, `debug` with `-vv`.

use tracing_subscriber::EnvFilter;

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    if let Err(err) = builder.try_init() {
        eprintln!("failed to install tracing subscriber: {}", err);
    }
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
