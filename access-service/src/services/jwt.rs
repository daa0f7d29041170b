//! Default [`CredentialVerifier`] backed by HS256 JWTs.
//!
//! Token payload matches the Profitcast session tokens: `{ id, iat, exp }`
//! signed with a shared secret.

use async_trait::async_trait;
use chrono::DateTime;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;

use super::identity::{CredentialVerifier, VerifiedCredential, VerifyError};

/// Claims carried by a Profitcast session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account ID.
    pub id: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// HS256 verifier over a shared secret.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;
        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl CredentialVerifier for JwtVerifier {
    async fn verify(&self, credential: &str) -> Result<VerifiedCredential, VerifyError> {
        let data =
            decode::<SessionClaims>(credential, &self.decoding_key, &self.validation).map_err(
                |e| match e.kind() {
                    ErrorKind::ExpiredSignature => VerifyError::Expired,
                    _ => VerifyError::Invalid,
                },
            )?;

        let expires_at =
            DateTime::from_timestamp(data.claims.exp, 0).ok_or(VerifyError::Invalid)?;

        Ok(VerifiedCredential {
            account_id: data.claims.id,
            expires_at,
        })
    }
}
