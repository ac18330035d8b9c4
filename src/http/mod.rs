//! HTTP listener.
//!
//! Serves the router over plain HTTP (TLS is terminated in front of the
//! service) with graceful shutdown on SIGTERM/SIGINT. Client socket addresses
//! are attached to every request for the resolver's logs.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
