//! Redirect settings domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Setting key for the custom post-login redirect URL.
pub const REDIRECT_URL_KEY: &str = "primary_redirect_url";

/// Setting key for the primary-tenant dashboard redirect flag.
///
/// Stored as `"1"`/`"0"`; anything other than `"1"` reads as disabled.
pub const DASHBOARD_REDIRECT_ENABLED_KEY: &str = "primary_redirect_dashboard_enabled";

/// Which settings partition a read or write targets.
///
/// `Network` is the value shared across every tenant of a multi-tenant
/// deployment; `Site` is the per-installation value of a single-tenant
/// deployment. Selection between the two belongs to the settings service,
/// never to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SettingScope {
    Network,
    Site,
}

impl SettingScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Site => "site",
        }
    }
}

impl std::fmt::Display for SettingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SettingScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "network" => Ok(Self::Network),
            "site" => Ok(Self::Site),
            _ => Err(format!("Unknown setting scope: {}", s)),
        }
    }
}

/// Setting row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SettingRow {
    pub id: i32,
    pub scope: String,
    pub setting_key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating/updating a setting
#[derive(Debug, Clone)]
pub struct UpsertSettingInput {
    pub scope: SettingScope,
    pub setting_key: String,
    pub value: String,
}

/// The persisted redirect settings, as exposed on the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RedirectSettings {
    /// Custom URL users are sent to after login; empty means "no override".
    pub custom_redirect_url: String,
    /// Whether users are sent to their primary tenant's dashboard instead.
    /// Only consulted in multi-tenant deployments.
    pub dashboard_redirect_enabled: bool,
}

/// Immutable configuration snapshot handed to the resolver.
///
/// `dashboard_redirect_enabled` is only meaningful when `multi_tenant_mode`
/// is true; in single-tenant mode the flag is never consulted.
#[derive(Debug, Clone, Default)]
pub struct RedirectConfig {
    pub multi_tenant_mode: bool,
    pub dashboard_redirect_enabled: bool,
    pub custom_redirect_url: Option<String>,
}

/// Input for updating the redirect settings
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRedirectSettingsInput {
    /// New custom redirect URL; `None` or empty clears the override.
    #[validate(length(max = 2048))]
    pub custom_redirect_url: Option<String>,
    #[serde(default)]
    pub dashboard_redirect_enabled: bool,
}
