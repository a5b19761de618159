//! Pluggable authentication seam.
//!
//! The business modules do NOT depend on any specific auth system. They
//! only know this trait; the concrete implementation is injected at
//! startup time. Handlers receive the [`Principal`] as an explicit value —
//! there is no request-extension mutation anywhere.

use axum::http::HeaderMap;

use crate::ServiceError;

/// An authenticated caller, as established by whatever sits in front of
/// this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable user identifier, recorded as `createdBy` on documents.
    pub id: String,

    /// Display name, when the gateway forwards one.
    pub name: Option<String>,
}

/// Pluggable authenticator. Protected handlers call this once per request
/// and pass the resulting principal down explicitly.
pub trait Authenticator: Send + Sync + 'static {
    /// Authenticate a request from its headers.
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, ServiceError>;
}

/// Trusts the identity headers injected by the upstream auth gateway:
/// `x-user-id` (required) and `x-user-name` (optional).
pub struct HeaderAuth;

impl Authenticator for HeaderAuth {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, ServiceError> {
        let id = headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ServiceError::Unauthorized("authentication required".into()))?;

        let name = headers
            .get("x-user-name")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(Principal {
            id: id.to_string(),
            name,
        })
    }
}

/// Always yields the same principal. Used for testing and for
/// single-operator deployments.
pub struct StaticPrincipal(pub Principal);

impl Authenticator for StaticPrincipal {
    fn authenticate(&self, _headers: &HeaderMap) -> Result<Principal, ServiceError> {
        Ok(self.0.clone())
    }
}

/// An authenticator that denies everything. Used for testing.
pub struct DenyAll;

impl Authenticator for DenyAll {
    fn authenticate(&self, _headers: &HeaderMap) -> Result<Principal, ServiceError> {
        Err(ServiceError::Unauthorized("access denied".into()))
    }
}
