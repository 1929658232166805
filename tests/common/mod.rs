//! Common test utilities
//!
//! Integration tests run the real router against in-memory collaborator
//! implementations, so they stay hermetic.

use async_trait::async_trait;
use landing_core::config::{Config, DatabaseConfig, JwtConfig};
use landing_core::domain::{SettingRow, SettingScope, TenantId, UpsertSettingInput};
use landing_core::error::Result;
use landing_core::jwt::JwtManager;
use landing_core::repository::{SettingsRepository, TenantDirectory};
use landing_core::service::{RedirectService, RedirectSettingsService};
use landing_core::state::HasServices;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory settings store keyed by (scope, key)
#[derive(Default)]
pub struct InMemorySettingsRepository {
    rows: Mutex<HashMap<(String, String), SettingRow>>,
    next_id: AtomicI32,
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn get(&self, scope: SettingScope, key: &str) -> Result<Option<SettingRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .get(&(scope.as_str().to_string(), key.to_string()))
            .cloned())
    }

    async fn upsert(&self, input: &UpsertSettingInput) -> Result<SettingRow> {
        let mut rows = self.rows.lock().unwrap();
        let key = (
            input.scope.as_str().to_string(),
            input.setting_key.clone(),
        );
        let now = chrono::Utc::now();

        let row = match rows.get(&key) {
            Some(existing) => SettingRow {
                value: input.value.clone(),
                updated_at: now,
                ..existing.clone()
            },
            None => SettingRow {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                scope: input.scope.as_str().to_string(),
                setting_key: input.setting_key.clone(),
                value: input.value.clone(),
                created_at: now,
                updated_at: now,
            },
        };

        rows.insert(key, row.clone());
        Ok(row)
    }
}

/// In-memory tenant directory
#[derive(Default)]
pub struct InMemoryTenantDirectory {
    tenants: HashMap<i64, String>,
}

impl InMemoryTenantDirectory {
    pub fn with_tenants(tenants: &[(i64, &str)]) -> Self {
        Self {
            tenants: tenants
                .iter()
                .map(|(id, url)| (*id, url.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn resolve_base_url(&self, id: TenantId) -> Result<Option<String>> {
        Ok(self.tenants.get(&id.get()).cloned())
    }
}

/// Application state backed by the in-memory collaborators
#[derive(Clone)]
pub struct TestState {
    config: Arc<Config>,
    redirect_service: Arc<RedirectService<InMemorySettingsRepository, InMemoryTenantDirectory>>,
    settings_service: Arc<RedirectSettingsService<InMemorySettingsRepository>>,
    jwt_manager: JwtManager,
}

impl TestState {
    pub fn new(multi_tenant: bool, tenants: &[(i64, &str)]) -> Self {
        let config = test_config(multi_tenant);

        let settings_repo = Arc::new(InMemorySettingsRepository::default());
        let directory = Arc::new(InMemoryTenantDirectory::with_tenants(tenants));

        let settings_service = Arc::new(RedirectSettingsService::new(
            settings_repo,
            config.multi_tenant,
        ));
        let redirect_service = Arc::new(RedirectService::new(settings_service.clone(), directory));
        let jwt_manager = JwtManager::new(&config.jwt);

        Self {
            config: Arc::new(config),
            redirect_service,
            settings_service,
            jwt_manager,
        }
    }
}

impl HasServices for TestState {
    type SettingsRepo = InMemorySettingsRepository;
    type Tenants = InMemoryTenantDirectory;

    fn config(&self) -> &Config {
        &self.config
    }

    fn redirect_service(&self) -> &RedirectService<Self::SettingsRepo, Self::Tenants> {
        &self.redirect_service
    }

    fn settings_service(&self) -> &RedirectSettingsService<Self::SettingsRepo> {
        &self.settings_service
    }

    fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    async fn check_ready(&self) -> bool {
        true
    }
}

pub fn test_config(multi_tenant: bool) -> Config {
    Config {
        http_host: "127.0.0.1".to_string(),
        http_port: 0,
        multi_tenant,
        database: DatabaseConfig {
            url: "mysql://localhost/unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            issuer: "https://landing.test".to_string(),
            access_token_ttl_secs: 3600,
        },
    }
}

/// Mint a token carrying the given roles
pub fn token_with_roles(state: &TestState, roles: &[&str]) -> String {
    state
        .jwt_manager()
        .create_access_token(
            Uuid::new_v4(),
            "admin@example.com",
            roles.iter().map(|r| r.to_string()).collect(),
        )
        .unwrap()
}
