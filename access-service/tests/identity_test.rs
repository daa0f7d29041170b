mod common;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use access_service::config::JwtConfig;
use access_service::error::AccessError;
use access_service::models::Role;
use access_service::services::{
    AccountStore, CredentialVerifier, IdentityResolver, JwtVerifier, MemoryAccountStore,
    SessionClaims, VerifiedCredential, VerifyError,
};
use common::account;

const SECRET: &str = "test-secret";

/// Verifier that accepts any credential as account id, one hour of validity.
struct TrustingVerifier;

#[async_trait]
impl CredentialVerifier for TrustingVerifier {
    async fn verify(&self, credential: &str) -> Result<VerifiedCredential, VerifyError> {
        Ok(VerifiedCredential {
            account_id: credential.to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        })
    }
}

struct OutageStore;

#[async_trait]
impl AccountStore for OutageStore {
    async fn find_account(
        &self,
        _account_id: &str,
    ) -> Result<Option<access_service::models::Account>, anyhow::Error> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

fn resolver_with(accounts: Arc<dyn AccountStore>) -> IdentityResolver {
    IdentityResolver::new(Arc::new(TrustingVerifier), accounts)
}

fn jwt_resolver(accounts: Arc<dyn AccountStore>) -> IdentityResolver {
    let verifier = JwtVerifier::new(&JwtConfig {
        secret: SECRET.to_string(),
        leeway_seconds: 0,
    });
    IdentityResolver::new(Arc::new(verifier), accounts)
}

fn mint_token(account_id: &str, secret: &str, ttl: Duration) -> String {
    let now = Utc::now();
    let claims = SessionClaims {
        id: account_id.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("sign token")
}

#[tokio::test]
async fn active_account_resolves_to_a_requester() {
    let accounts = Arc::new(MemoryAccountStore::new());
    accounts.insert(account("2", "HR_MANAGER", true));

    let requester = resolver_with(accounts).resolve("2").await.expect("resolve");
    assert_eq!(requester.id, "2");
    assert_eq!(requester.role, Role::HrManager);
}

#[tokio::test]
async fn unknown_account_is_an_invalid_credential() {
    let accounts = Arc::new(MemoryAccountStore::new());
    let err = resolver_with(accounts).resolve("ghost").await.unwrap_err();
    assert!(matches!(err, AccessError::InvalidCredential));
}

#[tokio::test]
async fn inactive_account_is_rejected() {
    let accounts = Arc::new(MemoryAccountStore::new());
    accounts.insert(account("4", "EMPLOYEE", false));

    let err = resolver_with(accounts).resolve("4").await.unwrap_err();
    assert!(matches!(err, AccessError::InactiveAccount));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn store_outage_is_retryable_not_a_denial() {
    let err = resolver_with(Arc::new(OutageStore))
        .resolve("2")
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::Unavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn corrupt_role_string_surfaces_the_broken_invariant() {
    let accounts = Arc::new(MemoryAccountStore::new());
    accounts.insert(account("8", "SUPERUSER", true));

    let err = resolver_with(accounts).resolve("8").await.unwrap_err();
    assert!(matches!(err, AccessError::UnknownRole(ref name) if name == "SUPERUSER"));
}

#[tokio::test]
async fn jwt_round_trip_resolves_the_token_subject() {
    let accounts = Arc::new(MemoryAccountStore::new());
    accounts.insert(account("3", "TEAM_LEAD", true));

    let token = mint_token("3", SECRET, Duration::minutes(30));
    let requester = jwt_resolver(accounts)
        .resolve(&token)
        .await
        .expect("resolve jwt");
    assert_eq!(requester.id, "3");
    assert_eq!(requester.role, Role::TeamLead);
}

#[tokio::test]
async fn expired_token_is_reported_as_expired() {
    let accounts = Arc::new(MemoryAccountStore::new());
    accounts.insert(account("3", "TEAM_LEAD", true));

    let token = mint_token("3", SECRET, Duration::minutes(-5));
    let err = jwt_resolver(accounts).resolve(&token).await.unwrap_err();
    assert!(matches!(err, AccessError::ExpiredCredential));
}

#[tokio::test]
async fn tampered_or_garbage_tokens_are_invalid() {
    let accounts: Arc<MemoryAccountStore> = Arc::new(MemoryAccountStore::new());
    accounts.insert(account("3", "TEAM_LEAD", true));

    let foreign = mint_token("3", "some-other-secret", Duration::minutes(30));
    for credential in [foreign.as_str(), "not-a-jwt", ""] {
        let err = jwt_resolver(accounts.clone())
            .resolve(credential)
            .await
            .unwrap_err();
        assert!(
            matches!(err, AccessError::InvalidCredential),
            "expected InvalidCredential for {credential:?}"
        );
    }
}
