//! Authenticated principal

use serde::{Deserialize, Serialize};

/// The authenticated user of a request.
///
/// Stored in the request extensions by whatever authenticated the request
/// (token verification, session lookup, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable user identifier.
    pub id: String,
    /// Role used for authorization decisions.
    pub role: String,
}

impl Principal {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
        }
    }

    /// Attach this principal to a request.
    pub fn attach<B>(self, request: &mut hyper::Request<B>) {
        request.extensions_mut().insert(self);
    }

    /// The principal attached to a request, if any.
    pub fn from_request<B>(request: &hyper::Request<B>) -> Option<&Principal> {
        request.extensions().get::<Principal>()
    }
}
