//! REST API shared utilities (response types, capability guards)

pub mod health;
pub mod login_redirect;
pub mod settings;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::state::HasServices;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role allowed to manage settings shared across a multi-tenant deployment
pub const NETWORK_SETTINGS_ROLE: &str = "network-admin";

/// Role allowed to manage settings of a single installation
pub const SITE_SETTINGS_ROLE: &str = "admin";

/// Require the capability to manage the redirect settings.
///
/// In multi-tenant mode the settings are shared deployment-wide, so the
/// caller must hold the network settings role; otherwise the installation
/// admin role suffices.
pub(crate) fn require_settings_admin<S: HasServices>(state: &S, auth: &AuthUser) -> Result<()> {
    let required = if state.config().multi_tenant {
        NETWORK_SETTINGS_ROLE
    } else {
        SITE_SETTINGS_ROLE
    };

    if auth.has_role(required) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(format!(
            "Role '{}' required to manage redirect settings",
            required
        )))
    }
}

/// Standard success response wrapper
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse<T> {
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
