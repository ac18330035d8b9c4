//! Process-level errors.
//!
//! Request handling never fails with these; per-request problems are
//! [`Outcome`](crate::resolver::Outcome) variants. These cover startup and the
//! listener, and end the process.

use crate::config::ConfigError;
use crate::http::ServerError;
use crate::logging::LoggingError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
