//! OpenAPI 3.0 documentation assembly
//!
//! Aggregates the handler path annotations and domain schemas into a single
//! OpenAPI specification, served as raw JSON.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Landing Core API",
        version = "0.2.0",
        description = "Login Redirect Service API",
        contact(name = "Landing Team")
    ),
    tags(
        (name = "System", description = "Health checks and system status"),
        (name = "Login", description = "Post-login redirect resolution"),
        (name = "Settings", description = "Redirect settings management"),
    ),
    components(schemas(
        crate::api::health::HealthResponse,
        crate::api::login_redirect::LoginRedirectRequest,
        crate::api::login_redirect::LoginRedirectResponse,
        crate::domain::LoginContext,
        crate::domain::UserIdentity,
        crate::domain::TenantId,
        crate::domain::RedirectSettings,
        crate::domain::UpdateRedirectSettingsInput,
    )),
    paths(
        crate::api::health::health,
        crate::api::health::ready,
        crate::api::login_redirect::resolve_login_redirect,
        crate::api::settings::get_redirect_settings,
        crate::api::settings::update_redirect_settings,
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Build the document with the Bearer JWT security scheme attached.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        if let Some(c) = doc.components.as_mut() {
            c.security_schemes.insert(
                "bearer_jwt".to_string(),
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            );
        }
        doc
    }
}
