//! Terminal classification of a request and its HTTP response.

use axum::{
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::{HEALTH_BODY, INVALID_DATA_BODY, INVALID_METHOD_BODY};

/// Result of handling one request. Exactly one is produced per request and it
/// fully determines the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Healthy,
    /// Permanent redirect to the canonical target
    Redirect(String),
    MethodRejected,
    DecodeFailed,
    ParseFailed,
    TargetInvalid,
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Healthy => StatusCode::OK,
            Outcome::Redirect(_) => StatusCode::MOVED_PERMANENTLY,
            Outcome::MethodRejected => StatusCode::METHOD_NOT_ALLOWED,
            Outcome::DecodeFailed | Outcome::ParseFailed | Outcome::TargetInvalid => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Redirect target, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Outcome::Redirect(target) => Some(target),
            _ => None,
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Outcome::Healthy => (status, HEALTH_BODY).into_response(),
            Outcome::Redirect(target) => match HeaderValue::try_from(target) {
                Ok(location) => (status, [(LOCATION, location)]).into_response(),
                Err(e) => {
                    // URL serializations are ASCII without controls
                    tracing::error!(error = %e, "redirect target is not a valid header value");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            Outcome::MethodRejected => (status, INVALID_METHOD_BODY).into_response(),
            Outcome::DecodeFailed | Outcome::ParseFailed | Outcome::TargetInvalid => {
                (status, INVALID_DATA_BODY).into_response()
            }
        }
    }
}
