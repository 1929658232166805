//! Application state trait for dependency injection
//!
//! Handlers are generic over this trait so the same code runs against the
//! production `AppState` and lightweight test states.

use crate::config::Config;
use crate::jwt::JwtManager;
use crate::repository::{SettingsRepository, TenantDirectory};
use crate::service::{RedirectService, RedirectSettingsService};

/// Trait for application state that provides access to all services.
pub trait HasServices: Clone + Send + Sync + 'static {
    /// The settings repository type
    type SettingsRepo: SettingsRepository;
    /// The tenant directory type
    type Tenants: TenantDirectory;

    /// Get the application configuration
    fn config(&self) -> &Config;

    /// Get the redirect resolution service
    fn redirect_service(&self) -> &RedirectService<Self::SettingsRepo, Self::Tenants>;

    /// Get the redirect settings service
    fn settings_service(&self) -> &RedirectSettingsService<Self::SettingsRepo>;

    /// Get the JWT manager
    fn jwt_manager(&self) -> &JwtManager;

    /// Check if the system is ready (storage is healthy)
    fn check_ready(&self) -> impl std::future::Future<Output = bool> + Send;
}
