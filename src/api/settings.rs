//! Redirect settings API handlers

use crate::api::{require_settings_admin, SuccessResponse};
use crate::domain::UpdateRedirectSettingsInput;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::state::HasServices;
use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

/// Get the redirect settings
#[utoipa::path(
    get,
    path = "/api/v1/settings/redirect",
    tag = "Settings",
    security(("bearer_jwt" = [])),
    responses(
        (status = 200, description = "Current redirect settings"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller lacks the settings capability")
    )
)]
pub async fn get_redirect_settings<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
) -> Result<impl IntoResponse> {
    require_settings_admin(&state, &auth)?;

    let settings = state.settings_service().get().await?;
    Ok(Json(SuccessResponse::new(settings)))
}

/// Update the redirect settings
#[utoipa::path(
    put,
    path = "/api/v1/settings/redirect",
    tag = "Settings",
    security(("bearer_jwt" = [])),
    request_body = UpdateRedirectSettingsInput,
    responses(
        (status = 200, description = "Stored redirect settings"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller lacks the settings capability"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn update_redirect_settings<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
    Json(input): Json<UpdateRedirectSettingsInput>,
) -> Result<impl IntoResponse> {
    require_settings_admin(&state, &auth)?;

    let settings = state.settings_service().update(input).await?;

    info!(
        user_id = %auth.user_id,
        dashboard_redirect_enabled = settings.dashboard_redirect_enabled,
        "redirect settings updated"
    );

    Ok(Json(SuccessResponse::new(settings)))
}
