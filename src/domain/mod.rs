//! Domain models

pub mod login;
pub mod settings;
pub mod tenant;

pub use login::{LoginContext, UserIdentity};
pub use settings::{
    RedirectConfig, RedirectSettings, SettingRow, SettingScope, UpdateRedirectSettingsInput,
    UpsertSettingInput, DASHBOARD_REDIRECT_ENABLED_KEY, REDIRECT_URL_KEY,
};
pub use tenant::TenantId;
