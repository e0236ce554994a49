//! Authorization error types

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Why the guard refused a request. Both are terminal for the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// No authenticated principal on the request.
    #[error("Not authorized, please log in")]
    Unauthenticated,

    /// The principal's role is not on the allow-list.
    #[error("Access denied")]
    Forbidden { role: String },
}

/// JSON body of a refusal.
#[derive(Debug, Serialize)]
struct Message<'a> {
    msg: &'a str,
}

impl GuardError {
    /// 401 for missing principal, 403 for a role outside the allow-list.
    pub fn status(&self) -> StatusCode {
        match self {
            GuardError::Unauthenticated => StatusCode::UNAUTHORIZED,
            GuardError::Forbidden { .. } => StatusCode::FORBIDDEN,
        }
    }

    /// The user-facing message (never includes the role).
    pub fn message(&self) -> &'static str {
        match self {
            GuardError::Unauthenticated => "Not authorized, please log in",
            GuardError::Forbidden { .. } => "Access denied",
        }
    }

    /// JSON body, e.g. `{"msg":"Access denied"}`.
    pub fn body(&self) -> Bytes {
        let message = Message {
            msg: self.message(),
        };
        // Serializing a struct with one string field cannot fail
        Bytes::from(serde_json::to_vec(&message).unwrap_or_default())
    }

    /// Build the response that ends the request.
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(self.body()));
        *response.status_mut() = self.status();
        response.headers_mut().insert(
            hyper::header::CONTENT_TYPE,
            hyper::header::HeaderValue::from_static("application/json"),
        );
        response
    }
}
