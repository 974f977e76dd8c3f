//! Logging and tracing setup.
//!
//! Diagnostics go to stderr through the tracing crate so that stdout carries
//! nothing but the dump.

use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

/// Filter directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Subsequent calls are ignored.
pub fn init_tracing(verbose: u8) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(verbose >= 2)
            .with_line_number(verbose >= 2);

        tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(fmt_layer)
            .init();

        debug!("tracing initialized");
    });
}

/// Initialize tracing with JSON lines on stderr.
pub fn init_tracing_json(verbose: u8) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_current_span(true);

        tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(fmt_layer)
            .init();

        debug!("tracing initialized (JSON mode)");
    });
}
