//! Tenant directory
//!
//! Read-only lookup from a tenant ID to that tenant's base URL. Tenant
//! provisioning and lifecycle are owned elsewhere; this collaborator only
//! answers "where does this tenant live".

use crate::domain::TenantId;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Resolve a tenant's base URL, or `None` if the tenant does not exist.
    async fn resolve_base_url(&self, id: TenantId) -> Result<Option<String>>;
}

pub struct TenantDirectoryImpl {
    pool: MySqlPool,
}

impl TenantDirectoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantDirectory for TenantDirectoryImpl {
    async fn resolve_base_url(&self, id: TenantId) -> Result<Option<String>> {
        let base_url: Option<String> = sqlx::query_scalar(
            r#"
            SELECT base_url
            FROM tenants
            WHERE id = ?
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(base_url)
    }
}
