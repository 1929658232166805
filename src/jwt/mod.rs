//! JWT token handling

use crate::config::JwtConfig;
use crate::error::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audience of tokens accepted by this service
const TOKEN_AUDIENCE: &str = "landing";

/// Access token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: String,
    /// Roles granted to the subject
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// JWT token manager
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    access_token_ttl_secs: i64,
}

impl JwtManager {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            access_token_ttl_secs: config.access_token_ttl_secs,
        }
    }

    /// Create a Validation with a strict leeway (5 seconds) instead of the
    /// default 60 seconds, tolerating minor clock skew only.
    fn strict_validation(&self) -> Validation {
        let mut v = Validation::new(Algorithm::HS256);
        v.leeway = 5;
        v
    }

    /// Create an access token
    pub fn create_access_token(
        &self,
        user_id: Uuid,
        email: &str,
        roles: Vec<String>,
    ) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.access_token_ttl_secs);

        let claims = AccessClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            roles,
            iss: self.issuer.clone(),
            aud: TOKEN_AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        let header = Header::new(Algorithm::HS256);
        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    /// Verify and decode an access token
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims> {
        let mut validation = self.strict_validation();
        validation.set_audience(&[TOKEN_AUDIENCE]);
        validation.set_issuer(&[&self.issuer]);

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}
