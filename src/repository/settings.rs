//! Settings repository
//!
//! Key-value store for persisted settings, partitioned by scope. This is
//! the configuration store collaborator; the resolver core never talks to
//! it directly.

use crate::domain::{SettingRow, SettingScope, UpsertSettingInput};
use crate::error::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Get a setting by scope and key
    async fn get(&self, scope: SettingScope, key: &str) -> Result<Option<SettingRow>>;

    /// Upsert a setting (insert or update)
    async fn upsert(&self, input: &UpsertSettingInput) -> Result<SettingRow>;
}

pub struct SettingsRepositoryImpl {
    pool: MySqlPool,
}

impl SettingsRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryImpl {
    async fn get(&self, scope: SettingScope, key: &str) -> Result<Option<SettingRow>> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            SELECT id, scope, setting_key, value, created_at, updated_at
            FROM settings
            WHERE scope = ? AND setting_key = ?
            "#,
        )
        .bind(scope.as_str())
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn upsert(&self, input: &UpsertSettingInput) -> Result<SettingRow> {
        sqlx::query(
            r#"
            INSERT INTO settings (scope, setting_key, value, created_at, updated_at)
            VALUES (?, ?, ?, NOW(), NOW())
            ON DUPLICATE KEY UPDATE
                value = VALUES(value),
                updated_at = NOW()
            "#,
        )
        .bind(input.scope.as_str())
        .bind(&input.setting_key)
        .bind(&input.value)
        .execute(&self.pool)
        .await?;

        // Fetch the updated/inserted row
        self.get(input.scope, &input.setting_key)
            .await?
            .ok_or_else(|| {
                crate::error::AppError::Internal(anyhow::anyhow!("Failed to upsert setting"))
            })
    }
}
