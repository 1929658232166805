//! Redirect settings service
//!
//! Read and write path for the two persisted redirect settings. Scope
//! selection (network-wide vs per-installation) happens here so the
//! resolver only ever sees an already-selected snapshot.

use crate::domain::{
    RedirectConfig, RedirectSettings, SettingScope, UpdateRedirectSettingsInput,
    UpsertSettingInput, DASHBOARD_REDIRECT_ENABLED_KEY, REDIRECT_URL_KEY,
};
use crate::error::Result;
use crate::repository::SettingsRepository;
use crate::service::redirect::sanitize_redirect_url;
use std::sync::Arc;
use validator::Validate;

pub struct RedirectSettingsService<S: SettingsRepository> {
    repo: Arc<S>,
    multi_tenant: bool,
}

impl<S: SettingsRepository> RedirectSettingsService<S> {
    pub fn new(repo: Arc<S>, multi_tenant: bool) -> Self {
        Self { repo, multi_tenant }
    }

    /// In multi-tenant mode settings are shared across the deployment;
    /// otherwise they belong to the single installation.
    fn scope(&self) -> SettingScope {
        if self.multi_tenant {
            SettingScope::Network
        } else {
            SettingScope::Site
        }
    }

    /// Get a string setting, falling back to `default` when unset.
    pub async fn get_string(&self, key: &str, default: &str) -> Result<String> {
        let row = self.repo.get(self.scope(), key).await?;
        Ok(row.map(|r| r.value).unwrap_or_else(|| default.to_string()))
    }

    /// Get a boolean setting stored as `"1"`/`"0"`.
    ///
    /// Anything other than `"1"` reads as false.
    pub async fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        let fallback = if default { "1" } else { "0" };
        Ok(self.get_string(key, fallback).await? == "1")
    }

    /// Current redirect settings.
    pub async fn get(&self) -> Result<RedirectSettings> {
        Ok(RedirectSettings {
            custom_redirect_url: self.get_string(REDIRECT_URL_KEY, "").await?,
            dashboard_redirect_enabled: self
                .get_bool(DASHBOARD_REDIRECT_ENABLED_KEY, false)
                .await?,
        })
    }

    /// Build the immutable configuration snapshot for one resolution.
    pub async fn snapshot(&self) -> Result<RedirectConfig> {
        let settings = self.get().await?;
        Ok(RedirectConfig {
            multi_tenant_mode: self.multi_tenant,
            dashboard_redirect_enabled: settings.dashboard_redirect_enabled,
            custom_redirect_url: (!settings.custom_redirect_url.is_empty())
                .then_some(settings.custom_redirect_url),
        })
    }

    /// Sanitize and persist the submitted settings, returning the stored
    /// state. Authorization is the caller's responsibility.
    pub async fn update(&self, input: UpdateRedirectSettingsInput) -> Result<RedirectSettings> {
        input.validate()?;

        let url = sanitize_redirect_url(input.custom_redirect_url.as_deref().unwrap_or(""));

        self.repo
            .upsert(&UpsertSettingInput {
                scope: self.scope(),
                setting_key: REDIRECT_URL_KEY.to_string(),
                value: url,
            })
            .await?;

        self.repo
            .upsert(&UpsertSettingInput {
                scope: self.scope(),
                setting_key: DASHBOARD_REDIRECT_ENABLED_KEY.to_string(),
                value: if input.dashboard_redirect_enabled {
                    "1".to_string()
                } else {
                    "0".to_string()
                },
            })
            .await?;

        self.get().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SettingRow;
    use crate::repository::settings::MockSettingsRepository;
    use mockall::predicate::*;

    fn setting_row(scope: SettingScope, key: &str, value: &str) -> SettingRow {
        SettingRow {
            id: 1,
            scope: scope.as_str().to_string(),
            setting_key: key.to_string(),
            value: value.to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_defaults_when_unset() {
        let mut mock = MockSettingsRepository::new();
        mock.expect_get().returning(|_, _| Ok(None));

        let service = RedirectSettingsService::new(Arc::new(mock), false);
        let settings = service.get().await.unwrap();

        assert_eq!(settings.custom_redirect_url, "");
        assert!(!settings.dashboard_redirect_enabled);
    }

    #[tokio::test]
    async fn test_multi_tenant_reads_network_scope() {
        let mut mock = MockSettingsRepository::new();
        mock.expect_get()
            .with(eq(SettingScope::Network), eq(REDIRECT_URL_KEY))
            .returning(|scope, key| {
                Ok(Some(setting_row(scope, key, "https://example.com/go")))
            });

        let service = RedirectSettingsService::new(Arc::new(mock), true);
        let url = service.get_string(REDIRECT_URL_KEY, "").await.unwrap();

        assert_eq!(url, "https://example.com/go");
    }

    #[tokio::test]
    async fn test_single_tenant_reads_site_scope() {
        let mut mock = MockSettingsRepository::new();
        mock.expect_get()
            .with(eq(SettingScope::Site), eq(REDIRECT_URL_KEY))
            .returning(|_, _| Ok(None));

        let service = RedirectSettingsService::new(Arc::new(mock), false);
        let url = service.get_string(REDIRECT_URL_KEY, "fallback").await.unwrap();

        assert_eq!(url, "fallback");
    }

    #[tokio::test]
    async fn test_get_bool_decodes_one_as_true() {
        for (stored, expected) in [("1", true), ("0", false), ("", false), ("yes", false)] {
            let mut mock = MockSettingsRepository::new();
            let stored = stored.to_string();
            mock.expect_get().returning(move |scope, key| {
                Ok(Some(setting_row(scope, key, &stored)))
            });

            let service = RedirectSettingsService::new(Arc::new(mock), false);
            let value = service
                .get_bool(DASHBOARD_REDIRECT_ENABLED_KEY, false)
                .await
                .unwrap();
            assert_eq!(value, expected);
        }
    }

    #[tokio::test]
    async fn test_get_bool_default_when_unset() {
        let mut mock = MockSettingsRepository::new();
        mock.expect_get().returning(|_, _| Ok(None));

        let service = RedirectSettingsService::new(Arc::new(mock), false);
        assert!(service
            .get_bool(DASHBOARD_REDIRECT_ENABLED_KEY, true)
            .await
            .unwrap());
        assert!(!service
            .get_bool(DASHBOARD_REDIRECT_ENABLED_KEY, false)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_update_sanitizes_and_persists_both_keys() {
        let mut mock = MockSettingsRepository::new();

        mock.expect_upsert()
            .withf(|input| {
                input.setting_key == REDIRECT_URL_KEY
                    && input.value == "https://example.com/dashboard"
                    && input.scope == SettingScope::Site
            })
            .returning(|input| {
                Ok(setting_row(input.scope, &input.setting_key, &input.value))
            });
        mock.expect_upsert()
            .withf(|input| {
                input.setting_key == DASHBOARD_REDIRECT_ENABLED_KEY && input.value == "1"
            })
            .returning(|input| {
                Ok(setting_row(input.scope, &input.setting_key, &input.value))
            });

        mock.expect_get()
            .withf(|_, key| key == REDIRECT_URL_KEY)
            .returning(|scope, key| {
                Ok(Some(setting_row(scope, key, "https://example.com/dashboard")))
            });
        mock.expect_get()
            .withf(|_, key| key == DASHBOARD_REDIRECT_ENABLED_KEY)
            .returning(|scope, key| Ok(Some(setting_row(scope, key, "1"))));

        let service = RedirectSettingsService::new(Arc::new(mock), false);
        let settings = service
            .update(UpdateRedirectSettingsInput {
                custom_redirect_url: Some("  https://example.com/dashboard ".to_string()),
                dashboard_redirect_enabled: true,
            })
            .await
            .unwrap();

        assert_eq!(settings.custom_redirect_url, "https://example.com/dashboard");
        assert!(settings.dashboard_redirect_enabled);
    }

    #[tokio::test]
    async fn test_update_clears_url_when_absent() {
        let mut mock = MockSettingsRepository::new();

        mock.expect_upsert()
            .withf(|input| input.setting_key == REDIRECT_URL_KEY && input.value.is_empty())
            .returning(|input| {
                Ok(setting_row(input.scope, &input.setting_key, &input.value))
            });
        mock.expect_upsert()
            .withf(|input| {
                input.setting_key == DASHBOARD_REDIRECT_ENABLED_KEY && input.value == "0"
            })
            .returning(|input| {
                Ok(setting_row(input.scope, &input.setting_key, &input.value))
            });
        mock.expect_get().returning(|scope, key| {
            let value = if key == REDIRECT_URL_KEY { "" } else { "0" };
            Ok(Some(setting_row(scope, key, value)))
        });

        let service = RedirectSettingsService::new(Arc::new(mock), false);
        let settings = service
            .update(UpdateRedirectSettingsInput {
                custom_redirect_url: None,
                dashboard_redirect_enabled: false,
            })
            .await
            .unwrap();

        assert_eq!(settings.custom_redirect_url, "");
        assert!(!settings.dashboard_redirect_enabled);
    }

    #[tokio::test]
    async fn test_update_rejects_oversized_url() {
        let mock = MockSettingsRepository::new();
        let service = RedirectSettingsService::new(Arc::new(mock), false);

        let result = service
            .update(UpdateRedirectSettingsInput {
                custom_redirect_url: Some("x".repeat(3000)),
                dashboard_redirect_enabled: false,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            crate::error::AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_snapshot_maps_empty_url_to_none() {
        let mut mock = MockSettingsRepository::new();
        mock.expect_get().returning(|_, _| Ok(None));

        let service = RedirectSettingsService::new(Arc::new(mock), true);
        let config = service.snapshot().await.unwrap();

        assert!(config.multi_tenant_mode);
        assert!(!config.dashboard_redirect_enabled);
        assert!(config.custom_redirect_url.is_none());
    }
}
