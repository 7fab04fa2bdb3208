//! Diagnostic logging
//!
//! Diagnostics go through `tracing` and are written to stderr so they never
//! mix with command output. Nothing is shown below `warn` unless asked for.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const VERBOSE_FILTER: &str = "debug";

/// Install the global subscriber.
///
/// `verbose` overrides `filter` with debug output. Installing twice is not an
/// error so tests can call this freely.
pub fn init(filter: &str, verbose: bool) -> anyhow::Result<()> {
    let env_filter = build_env_filter(filter, verbose)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    Ok(())
}

fn build_env_filter(filter: &str, verbose: bool) -> anyhow::Result<EnvFilter> {
    let directive = if verbose { VERBOSE_FILTER } else { filter };

    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter {directive:?}"))
}
