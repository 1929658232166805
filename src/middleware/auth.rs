//! JWT Authentication extractor
//!
//! Provides the `AuthUser` extractor for handlers requiring an
//! authenticated caller, validated against the state's `JwtManager`.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::jwt::AccessClaims;
use crate::state::HasServices;

/// Authenticated user information extracted from a JWT token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// User ID from the token's `sub` claim
    pub user_id: Uuid,
    /// User's email address
    pub email: String,
    /// Roles granted to the user
    pub roles: Vec<String>,
}

impl AuthUser {
    /// Create an AuthUser from access token claims
    pub fn from_claims(claims: AccessClaims) -> Result<Self, AuthError> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AuthError::InvalidToken("Invalid user ID in token".to_string()))?;

        Ok(Self {
            user_id,
            email: claims.email,
            roles: claims.roles,
        })
    }

    /// Check if the user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Authentication errors
#[derive(Debug, Clone)]
pub enum AuthError {
    /// No Authorization header present
    MissingToken,
    /// Invalid Authorization header format
    InvalidHeader(String),
    /// Token validation failed
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authorization token"),
            AuthError::InvalidHeader(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid authorization header")
            }
            AuthError::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid token"),
        };

        let body = serde_json::json!({
            "error": message,
            "code": "UNAUTHORIZED"
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Extract and validate Bearer token from Authorization header
fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("Invalid header encoding".to_string()))?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AuthError::InvalidHeader("Authorization header must use Bearer scheme".to_string())
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: HasServices + Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state
            .jwt_manager()
            .verify_access_token(token)
            .map_err(|_| AuthError::InvalidToken("Token validation failed".to_string()))?;

        AuthUser::from_claims(claims)
    }
}
