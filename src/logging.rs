//! Log sink construction.
//!
//! The subscriber is built once at startup. The returned `Dispatch` is
//! installed as the global default (for middleware and library events) and
//! handed to the resolver, which emits through it explicitly.

use tracing::Dispatch;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install global log dispatcher: {0}")]
    Install(#[from] tracing::dispatcher::SetGlobalDefaultError),
}

/// Pick the log filter. Priority: CLI flag, then `RUST_LOG`, then the default.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Build a dispatcher for `filter` writing to stdout in `format`.
pub fn build_dispatch(filter: &str, format: LogFormat) -> Result<Dispatch, LoggingError> {
    let registry = tracing_subscriber::registry().with(EnvFilter::try_new(filter)?);

    let dispatch = match format {
        LogFormat::Text => Dispatch::new(registry.with(tracing_subscriber::fmt::layer())),
        LogFormat::Json => Dispatch::new(registry.with(tracing_subscriber::fmt::layer().json())),
    };
    Ok(dispatch)
}

/// Build the dispatcher and install it as the process-wide default.
pub fn init(filter: &str, format: LogFormat) -> Result<Dispatch, LoggingError> {
    let dispatch = build_dispatch(filter, format)?;
    tracing::dispatcher::set_global_default(dispatch.clone())?;
    Ok(dispatch)
}
