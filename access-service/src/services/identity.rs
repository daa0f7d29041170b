//! Session/identity resolution: credential in, [`Requester`] out.
//!
//! Credential verification and account lookup are collaborators behind
//! traits; this is the only place account activity is checked. Everything
//! downstream trusts the resulting `Requester` for the rest of the request.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::error::AccessError;
use crate::models::{Account, Requester, Role};

/// Result of verifying a bearer credential's signature and expiry.
#[derive(Debug, Clone)]
pub struct VerifiedCredential {
    pub account_id: String,
    pub expires_at: DateTime<Utc>,
}

/// Verification failures, as reported by the verifier collaborator.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("credential is not valid")]
    Invalid,
    #[error("credential has expired")]
    Expired,
    #[error("verifier unavailable: {0}")]
    Unavailable(anyhow::Error),
}

/// External credential-verification collaborator.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Result<VerifiedCredential, VerifyError>;
}

/// External account-store collaborator.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_account(&self, account_id: &str) -> Result<Option<Account>, anyhow::Error>;
}

/// Maps a bearer credential to a [`Requester`].
pub struct IdentityResolver {
    verifier: Arc<dyn CredentialVerifier>,
    accounts: Arc<dyn AccountStore>,
}

impl IdentityResolver {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { verifier, accounts }
    }

    /// Resolve a credential to a requester identity.
    ///
    /// Verification failures other than expiry map uniformly to
    /// `InvalidCredential`. A store outage is `Unavailable` (retryable by
    /// the caller), never a denial.
    pub async fn resolve(&self, credential: &str) -> Result<Requester, AccessError> {
        let verified = self.verifier.verify(credential).await.map_err(|e| match e {
            VerifyError::Expired => AccessError::ExpiredCredential,
            VerifyError::Unavailable(source) => AccessError::Unavailable(source),
            VerifyError::Invalid => AccessError::InvalidCredential,
        })?;

        if verified.expires_at <= Utc::now() {
            return Err(AccessError::ExpiredCredential);
        }

        let account = self
            .accounts
            .find_account(&verified.account_id)
            .await
            .map_err(AccessError::Unavailable)?
            .ok_or(AccessError::InvalidCredential)?;

        if !account.is_active {
            tracing::warn!(account_id = %account.id, "resolved credential for inactive account");
            return Err(AccessError::InactiveAccount);
        }

        let role = Role::from_str(&account.role)?;
        Ok(Requester::new(account.id, role))
    }
}

/// In-memory account store for tests and local development.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: Mutex<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, account: Account) {
        if let Ok(mut accounts) = self.accounts.lock() {
            accounts.insert(account.id.clone(), account);
        }
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_account(&self, account_id: &str) -> Result<Option<Account>, anyhow::Error> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|e| anyhow::anyhow!("account store mutex poisoned: {}", e))?;
        Ok(accounts.get(account_id).cloned())
    }
}
