//! Redirect route: adapts an HTTP request to the resolver.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap},
};

use crate::resolver::{InboundRequest, Outcome};
use crate::state::AppState;

/// Fallback handler for every path other than the health check.
pub async fn redirect(State(state): State<AppState>, request: Request) -> Outcome {
    let inbound = inbound_request(&request);
    state.resolver.resolve(&inbound)
}

/// Collect the fields the resolver needs. Missing headers become empty strings.
fn inbound_request(request: &Request) -> InboundRequest {
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    InboundRequest {
        method: request.method().clone(),
        path: request.uri().path().to_string(),
        client_ip,
        user_agent: header_str(request.headers(), header::USER_AGENT),
        referer: header_str(request.headers(), header::REFERER),
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
