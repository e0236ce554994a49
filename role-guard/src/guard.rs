//! The role guard

use std::future::Future;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use serde::Deserialize;

use crate::error::GuardError;
use crate::principal::Principal;

/// Response body produced by the guard.
pub type GuardBody = Full<Bytes>;

/// Allow-list guard over request principals.
///
/// Cheap to clone; clones share the allow-list.
///
/// # Example
///
/// ```ignore
/// use std::convert::Infallible;
///
/// use hyper::service::service_fn;
/// use role_guard::RoleGuard;
///
/// let guard = RoleGuard::new(["admin"]);
/// let service = service_fn(move |req| {
///     let guard = guard.clone();
///     async move { Ok::<_, Infallible>(guard.handle(req, admin_dashboard).await) }
/// });
/// ```
#[derive(Clone)]
pub struct RoleGuard {
    roles: Arc<[String]>,
}

#[derive(Deserialize)]
struct RoleGuardConfig {
    roles: Vec<String>,
}

impl RoleGuard {
    /// Create a guard admitting the given roles.
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Load the allow-list from JSON: `{"roles": ["admin", "editor"]}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: RoleGuardConfig = serde_json::from_str(json)?;
        Ok(Self::new(config.roles))
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Whether a role is on the allow-list. Comparison is exact.
    pub fn allows(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Authorize a request, returning its principal when allowed.
    pub fn check<'r, B>(&self, request: &'r Request<B>) -> Result<&'r Principal, GuardError> {
        let Some(principal) = Principal::from_request(request) else {
            log::warn!("Denied {} {}: no principal", request.method(), request.uri().path());
            return Err(GuardError::Unauthenticated);
        };

        if !self.allows(&principal.role) {
            log::warn!(
                "Denied {} {}: user {} has role {:?}",
                request.method(),
                request.uri().path(),
                principal.id,
                principal.role
            );
            return Err(GuardError::Forbidden {
                role: principal.role.clone(),
            });
        }

        log::debug!(
            "Allowed {} {} for user {} ({})",
            request.method(),
            request.uri().path(),
            principal.id,
            principal.role
        );
        Ok(principal)
    }

    /// Run `next` if the request is authorized, otherwise answer with the
    /// refusal without calling it.
    pub async fn handle<B, F, Fut>(&self, request: Request<B>, next: F) -> Response<GuardBody>
    where
        F: FnOnce(Request<B>) -> Fut,
        Fut: Future<Output = Response<GuardBody>>,
    {
        match self.check(&request) {
            Ok(_) => next(request).await,
            Err(err) => err.into_response(),
        }
    }
}

impl std::fmt::Debug for RoleGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleGuard")
            .field("roles", &self.roles)
            .finish()
    }
}
