//! Post-login redirect resolution
//!
//! The resolver is a pure decision function: one call per successful login
//! event, exactly one URL out, no side effects. Every failure along the way
//! (missing tenant, failed lookup, unset custom URL) is expressed as "rule
//! does not match, try the next rule", never as an error.

use crate::domain::{LoginContext, RedirectConfig, UserIdentity};
use crate::repository::{SettingsRepository, TenantDirectory};
use crate::service::settings::RedirectSettingsService;
use std::sync::Arc;
use tracing::warn;
use url::Url;

/// Path of a tenant's administrative dashboard, relative to its base URL.
pub const DASHBOARD_PATH: &str = "wp-admin/";

/// Collapse any run of trailing slashes to exactly one.
pub fn ensure_trailing_slash(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

/// Permissively sanitize a redirect URL.
///
/// Absolute http/https URLs are normalized; anything else is stripped of
/// control characters and surrounding whitespace but otherwise returned
/// untouched. Callers needing strict validation must layer it themselves.
pub fn sanitize_redirect_url(raw: &str) -> String {
    let cleaned: String = raw.trim().chars().filter(|c| !c.is_control()).collect();

    match Url::parse(&cleaned) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.to_string(),
        _ => cleaned,
    }
}

/// Decide where to send a user after a successful login.
///
/// Priority order, first match wins:
/// 1. authentication errors pass the default through untouched;
/// 2. interim-login/reauth flows pass the default through untouched;
/// 3. in multi-tenant mode with the dashboard redirect enabled, a user's
///    primary tenant resolves to `<base URL>/wp-admin/`;
/// 4. a non-empty custom redirect URL is returned sanitized;
/// 5. otherwise the default is returned unchanged.
///
/// `requested_url` is accepted for interface parity with the invocation
/// hook but never consulted.
pub async fn resolve<T: TenantDirectory + ?Sized>(
    default_url: &str,
    _requested_url: &str,
    context: &LoginContext,
    user: &UserIdentity,
    config: &RedirectConfig,
    directory: &T,
) -> String {
    // Never redirect a failed authentication.
    if user.is_authentication_error {
        return default_url.to_string();
    }

    // Interim login and reauthentication own their destination.
    if context.is_special_flow() {
        return default_url.to_string();
    }

    // Primary-tenant dashboard outranks the custom URL.
    if config.multi_tenant_mode && config.dashboard_redirect_enabled {
        if let Some(tenant_id) = user.primary_tenant() {
            match directory.resolve_base_url(tenant_id).await {
                Ok(Some(base)) if !base.is_empty() => {
                    return format!("{}{}", ensure_trailing_slash(&base), DASHBOARD_PATH);
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(%tenant_id, "primary tenant lookup failed: {}", e);
                }
            }
        }
    }

    if let Some(custom) = config.custom_redirect_url.as_deref() {
        if !custom.is_empty() {
            return sanitize_redirect_url(custom);
        }
    }

    default_url.to_string()
}

/// Service wrapping the resolver with a settings snapshot per login event.
pub struct RedirectService<S: SettingsRepository, T: TenantDirectory> {
    settings: Arc<RedirectSettingsService<S>>,
    directory: Arc<T>,
}

impl<S: SettingsRepository, T: TenantDirectory> RedirectService<S, T> {
    pub fn new(settings: Arc<RedirectSettingsService<S>>, directory: Arc<T>) -> Self {
        Self {
            settings,
            directory,
        }
    }

    /// Resolve the redirect for one login event.
    ///
    /// A settings load failure degrades to the empty configuration (no
    /// override, dashboard disabled) so the login flow itself never fails.
    pub async fn resolve_login_redirect(
        &self,
        default_url: &str,
        requested_url: &str,
        context: &LoginContext,
        user: &UserIdentity,
    ) -> String {
        let config = match self.settings.snapshot().await {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load redirect settings, using defaults: {}", e);
                RedirectConfig::default()
            }
        };

        resolve(
            default_url,
            requested_url,
            context,
            user,
            &config,
            self.directory.as_ref(),
        )
        .await
    }
}
