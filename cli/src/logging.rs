//! Process-wide tracing subscriber for the `affirm` binary.
//!
//! Writes to stderr so `affirm once` keeps stdout for the affirmation itself. Filter comes
//! from `RUST_LOG`, default `info`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::log_format::SpanTaggedLine;

const DEFAULT_FILTER: &str = "info";

pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(SpanTaggedLine::new())
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}
