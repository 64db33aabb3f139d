use std::any::Any;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. `filter` is the already-resolved
/// `RUST_LOG` value from [`crate::config::LoggingConfig`].
pub fn init_tracing(filter: &str) -> Result<()> {
    fmt()
        .with_env_filter(parse_filter(filter)?)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|location| location.to_string())
            .unwrap_or_default();
        tracing::error!(panic = panic_message(info.payload()), %location, "panic");
    }));
    Ok(())
}

fn parse_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).with_context(|| format!("invalid RUST_LOG filter '{filter}'"))
}

/// Text carried by a panic payload, for `panic!("..")` and `panic!("{x}")`.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
