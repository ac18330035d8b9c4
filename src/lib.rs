//! Redirector - base64 URL redirect service
//!
//! Decodes a base64-encoded URL from the request path and answers with a
//! permanent redirect to it. `/health` serves as a liveness probe.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod resolver;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use resolver::{InboundRequest, Outcome, RedirectResolver};
