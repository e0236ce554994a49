//! Role-based authorization guard for hyper request pipelines.
//!
//! The authentication layer attaches a [`Principal`] to the request
//! extensions; [`RoleGuard`] lets the request through only when that
//! principal's role is on its allow-list, answering 401 or 403 otherwise.

pub mod error;
pub mod guard;
pub mod principal;

pub use error::GuardError;
pub use guard::{GuardBody, RoleGuard};
pub use principal::Principal;
