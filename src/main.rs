//! Redirector: a base64 URL redirect service.
//!
//! This is the application entry point. It loads configuration, initializes
//! tracing, creates the redirect resolver with the log dispatcher, sets up the
//! Axum router, and starts the HTTP server.

use clap::Parser;

use redirector::config::AppConfig;
use redirector::routes::create_router;
use redirector::state::AppState;
use redirector::{logging, AppError, RedirectResolver};

/// Redirector: redirect to base64-encoded URLs
#[derive(Parser, Debug)]
#[command(name = "redirector", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "redirector=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format: "text" or "json" (overrides the config file)
    #[arg(long)]
    log_format: Option<String>,

    /// Listen port (overrides the config file; default 80)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration, then apply CLI overrides
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.http.port = port;
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }
    config.validate()?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    let dispatch = logging::init(&log_filter, config.logging.log_format()?)?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        format = %config.logging.format,
        "Loaded configuration"
    );

    let state = AppState::new(RedirectResolver::new(dispatch));
    let app = create_router(state);

    if let Err(e) = redirector::http::start_server(app, &config.http).await {
        tracing::error!(error = %e, "failed to start server");
        return Err(e.into());
    }

    Ok(())
}
