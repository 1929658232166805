//! Login redirect invocation hook
//!
//! The host platform calls this once per successful login, before issuing
//! its redirect. The response always carries exactly one URL; when no rule
//! applies the submitted default comes back unchanged.

use crate::domain::{LoginContext, UserIdentity};
use crate::error::Result;
use crate::state::HasServices;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Request body of the login redirect hook
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRedirectRequest {
    /// The URL the host would redirect to absent any override
    pub default_url: String,
    /// The destination requested upstream; accepted but not consulted
    #[serde(default)]
    pub requested_url: String,
    /// Flags of the login request
    #[serde(default)]
    pub context: LoginContext,
    /// The authenticated subject (or failure marker)
    #[serde(default)]
    pub user: UserIdentity,
}

/// Response body of the login redirect hook
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRedirectResponse {
    pub redirect_url: String,
}

/// Resolve the post-login redirect for one login event
#[utoipa::path(
    post,
    path = "/api/v1/login/redirect",
    tag = "Login",
    request_body = LoginRedirectRequest,
    responses(
        (status = 200, description = "Resolved redirect URL", body = LoginRedirectResponse)
    )
)]
pub async fn resolve_login_redirect<S: HasServices>(
    State(state): State<S>,
    Json(request): Json<LoginRedirectRequest>,
) -> Result<impl IntoResponse> {
    debug!(
        default_url = %request.default_url,
        requested_url = %request.requested_url,
        "resolving login redirect"
    );

    let redirect_url = state
        .redirect_service()
        .resolve_login_redirect(
            &request.default_url,
            &request.requested_url,
            &request.context,
            &request.user,
        )
        .await;

    Ok(Json(LoginRedirectResponse { redirect_url }))
}
