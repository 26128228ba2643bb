//! Diagnostics for the menu driver go to stderr so they never interleave with
//! the menu itself on stdout.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Maps the `-d` count onto a level. `RUST_LOG`, when set, wins.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    if let Err(e) = tracing_subscriber::registry().with(fmt_layer).try_init() {
        eprintln!("Error: Failed to set up logging: {e}");
        return;
    }
    tracing::debug!(?verbosity, "logging initialised");
}
