//! Log output for the `alea` binary.
//!
//! Logs go to stderr so drawn values on stdout stay pipeable. The level
//! defaults to `info` and follows `RUST_LOG` when set, e.g.
//! `RUST_LOG=alea=trace` shows a span per draw.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false)
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
