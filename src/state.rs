//! Shared application state for request handlers.

use std::sync::Arc;

use crate::resolver::RedirectResolver;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RedirectResolver>,
}

impl AppState {
    /// Creates a new application state around the given resolver.
    pub fn new(resolver: RedirectResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}
