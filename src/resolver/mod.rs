//! Redirect resolution.
//!
//! `RedirectResolver` turns an inbound request into exactly one [`Outcome`].
//! The checks run in a fixed order and the first failure wins:
//!
//! 1. method must be GET
//! 2. the leading `/` is stripped from the (percent-decoded) path
//! 3. the remainder is decoded as standard base64 with padding
//! 4. the bytes are parsed as a UTF-8 URL reference
//! 5. the reference must carry a scheme or a host
//!
//! Every branch logs through the `Dispatch` handed to the resolver at
//! construction, with the client's address, user agent and referer attached.

mod outcome;
mod target;

pub use outcome::Outcome;
pub use target::{TargetError, TargetReference};

use std::borrow::Cow;

use axum::http::Method;
use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use tracing::Dispatch;

/// Standard alphabet with required padding. Non-zero trailing bits in the
/// final quantum are accepted, matching non-strict standard base64 decoders.
const TRANSPORT_ENCODING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// The fields of an HTTP request the resolver looks at.
///
/// Only `method` and `path` influence the outcome; the rest is carried into
/// log records.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Raw request path, always starting with `/`
    pub path: String,
    pub client_ip: String,
    pub user_agent: String,
    pub referer: String,
}

/// Decides what to do with a redirect request.
///
/// Holds no mutable state; a single instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct RedirectResolver {
    log: Dispatch,
}

impl RedirectResolver {
    /// Create a resolver that emits its log records through `log`.
    pub fn new(log: Dispatch) -> Self {
        tracing::dispatcher::with_default(&log, || tracing::info!("handler created"));
        Self { log }
    }

    /// Classify `request`.
    pub fn resolve(&self, request: &InboundRequest) -> Outcome {
        tracing::dispatcher::with_default(&self.log, || {
            let span = tracing::info_span!(
                "resolve",
                ip = %request.client_ip,
                user_agent = %request.user_agent,
                referer = %request.referer,
            );
            let _guard = span.enter();

            match resolve_target(request) {
                Ok(target) => {
                    tracing::info!(link = %target, "redirecting");
                    Outcome::Redirect(target.into_string())
                }
                Err(outcome) => outcome,
            }
        })
    }
}

fn resolve_target(request: &InboundRequest) -> Result<TargetReference, Outcome> {
    check_method(&request.method)?;
    let payload = extract_payload(&request.path)?;
    let decoded = decode_payload(&payload)?;
    let target = parse_target(&decoded)?;
    validate_target(target)
}

fn check_method(method: &Method) -> Result<(), Outcome> {
    if *method != Method::GET {
        tracing::error!(method = %method, "invalid method");
        return Err(Outcome::MethodRejected);
    }
    Ok(())
}

/// Undo the transport's percent-encoding and drop the leading `/`.
fn extract_payload(path: &str) -> Result<Cow<'_, str>, Outcome> {
    let decoded = urlencoding::decode(path).map_err(|e| {
        tracing::error!(data = %path, error = %e, "invalid decoded data");
        Outcome::DecodeFailed
    })?;

    Ok(match decoded {
        Cow::Borrowed(s) => Cow::Borrowed(s.strip_prefix('/').unwrap_or(s)),
        Cow::Owned(s) => match s.strip_prefix('/') {
            Some(rest) => Cow::Owned(rest.to_string()),
            None => Cow::Owned(s),
        },
    })
}

fn decode_payload(payload: &str) -> Result<Vec<u8>, Outcome> {
    TRANSPORT_ENCODING.decode(payload).map_err(|e| {
        tracing::error!(data = %payload, error = %e, "invalid decoded data");
        Outcome::DecodeFailed
    })
}

fn parse_target(decoded: &[u8]) -> Result<TargetReference, Outcome> {
    TargetReference::parse(decoded).map_err(|e| {
        tracing::error!(
            data = %String::from_utf8_lossy(decoded),
            error = %e,
            "invalid data"
        );
        Outcome::ParseFailed
    })
}

fn validate_target(target: TargetReference) -> Result<TargetReference, Outcome> {
    if !target.is_usable() {
        tracing::error!(data = %target, "empty scheme or host");
        return Err(Outcome::TargetInvalid);
    }
    Ok(target)
}
