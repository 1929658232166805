//! Login event domain types
//!
//! These types mirror what the host platform hands over on a successful
//! login: the request flags that mark special login sub-flows, and the
//! identity record of the subject being redirected.

use crate::domain::TenantId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flags derived from the incoming login request.
///
/// Interim-login and reauthentication sub-flows carry their own navigation
/// and must never be redirected elsewhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginContext {
    #[serde(default)]
    pub is_interim_login: bool,
    #[serde(default)]
    pub is_reauth: bool,
}

impl LoginContext {
    /// True when the login belongs to a sub-flow that owns its destination.
    pub fn is_special_flow(&self) -> bool {
        self.is_interim_login || self.is_reauth
    }
}

/// The authenticated subject, or an authentication failure marker.
///
/// Owned by the host's authentication subsystem; read-only here. The
/// primary tenant reference is accepted as any integer and validated at
/// resolution time, so malformed upstream data degrades to "absent"
/// instead of failing the login flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserIdentity {
    #[serde(default)]
    pub is_authentication_error: bool,
    #[serde(default)]
    pub primary_tenant_id: Option<i64>,
}

impl UserIdentity {
    /// The user's primary tenant, if present and well-formed.
    pub fn primary_tenant(&self) -> Option<TenantId> {
        self.primary_tenant_id.and_then(TenantId::new)
    }
}
