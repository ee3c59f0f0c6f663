//! Bearer-token verification against the identity provider's signing keys.
//!
//! Access tokens are JWTs issued by an external provider (Auth0-style). The
//! provider publishes its public keys as a JWKS document; tokens name the key
//! that signed them in the `kid` header. Keys are cached by `kid` and the set
//! is refetched once whenever a token names a key we have not seen, which
//! covers key rotation. Refetches are at most one per
//! [`MIN_REFRESH_INTERVAL`], however many unknown `kid`s arrive.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::error::AuthError;
use super::jwks;

/// Timeout for a single JWKS request.
const JWKS_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimum time between two JWKS fetches.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Claims this service reads from a verified access token.
///
/// `exp`, `aud` and `iss` are checked by [`Validation`] and not kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject -- the provider's id for the caller.
    pub sub: String,
    /// API permissions granted to the caller (RBAC "add permissions in the
    /// access token" setting on the provider).
    pub permissions: Option<Vec<String>>,
}

/// Identity provider settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Provider tenant domain, e.g. `casting.eu.auth0.com`.
    pub domain: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Signing algorithms accepted in token headers.
    pub algorithms: Vec<Algorithm>,
}

const DEFAULT_ALGORITHMS: &str = "RS256";

impl AuthConfig {
    /// Load identity provider settings from environment variables.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `AUTH0_DOMAIN`    | **yes**  | --      |
    /// | `API_AUDIENCE`    | **yes**  | --      |
    /// | `AUTH_ALGORITHMS` | no       | `RS256` |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or an algorithm name is
    /// not recognised.
    pub fn from_env() -> Self {
        let domain =
            std::env::var("AUTH0_DOMAIN").expect("AUTH0_DOMAIN must be set in the environment");
        let audience =
            std::env::var("API_AUDIENCE").expect("API_AUDIENCE must be set in the environment");

        let algorithms = std::env::var("AUTH_ALGORITHMS")
            .unwrap_or_else(|_| DEFAULT_ALGORITHMS.into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<Algorithm>()
                    .unwrap_or_else(|e| panic!("Invalid AUTH_ALGORITHMS entry '{s}': {e}"))
            })
            .collect();

        Self {
            domain,
            audience,
            algorithms,
        }
    }

    /// Expected `iss` claim.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain)
    }
}

/// Verifies bearer tokens and caches the provider's signing keys.
pub struct TokenVerifier {
    config: AuthConfig,
    keys: RwLock<HashMap<String, DecodingKey>>,
    /// `None` when the verifier was built from a fixed key set.
    client: Option<reqwest::Client>,
    /// When the last fetch was attempted, successful or not.
    last_fetch: Mutex<Option<Instant>>,
}

impl TokenVerifier {
    /// Build a verifier that loads keys from the provider's JWKS endpoint.
    ///
    /// The cache starts empty; call [`TokenVerifier::refresh_keys`] to warm
    /// it, otherwise the first request triggers the fetch.
    pub fn new(config: AuthConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(JWKS_FETCH_TIMEOUT)
            .build()?;

        Ok(Self {
            config,
            keys: RwLock::new(HashMap::new()),
            client: Some(client),
            last_fetch: Mutex::new(None),
        })
    }

    /// Build a verifier over a fixed set of `(kid, key)` pairs that is never
    /// refreshed.
    pub fn with_static_keys(
        config: AuthConfig,
        keys: impl IntoIterator<Item = (String, DecodingKey)>,
    ) -> Self {
        Self {
            config,
            keys: RwLock::new(keys.into_iter().collect()),
            client: None,
            last_fetch: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Verify `token` and return its claims.
    ///
    /// Checks, in order: header structure and algorithm, signing key lookup,
    /// signature, expiry, audience and issuer, presence of `permissions`.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token)
            .map_err(|_| AuthError::InvalidHeader("Unable to parse authentication token."))?;

        if !self.config.algorithms.contains(&header.alg) {
            return Err(AuthError::InvalidHeader("Unsupported signing algorithm."));
        }

        let kid = header
            .kid
            .ok_or(AuthError::InvalidHeader("Authorization malformed."))?;
        let key = self.key_for(&kid).await?;

        let mut validation = Validation::new(header.alg);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[self.config.issuer()]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        let claims = decode::<Claims>(token, &key, &validation)?.claims;

        if claims.permissions.is_none() {
            return Err(AuthError::MissingPermissions);
        }

        Ok(claims)
    }

    /// Replace the cached key set with the provider's current one.
    ///
    /// A no-op for verifiers built with [`TokenVerifier::with_static_keys`].
    pub async fn refresh_keys(&self) -> Result<(), reqwest::Error> {
        let Some(client) = &self.client else {
            return Ok(());
        };

        self.mark_fetch();
        let set = jwks::fetch(client, &self.config.jwks_url()).await?;
        let fresh = jwks::decoding_keys(&set);
        tracing::info!(key_count = fresh.len(), "Loaded identity provider signing keys");

        *self.keys.write().await = fresh;
        Ok(())
    }

    async fn key_for(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        if let Some(key) = self.keys.read().await.get(kid) {
            return Ok(key.clone());
        }

        if self.client.is_none() {
            return Err(AuthError::KeyNotFound);
        }

        if !self.refresh_due() {
            tracing::debug!(kid, "Unknown signing key, JWKS fetched too recently");
            return Err(AuthError::KeyNotFound);
        }

        tracing::debug!(kid, "Unknown signing key, refreshing JWKS");
        if let Err(e) = self.refresh_keys().await {
            tracing::error!(error = %e, "Failed to fetch identity provider signing keys");
            return Err(AuthError::KeyNotFound);
        }

        self.keys
            .read()
            .await
            .get(kid)
            .cloned()
            .ok_or(AuthError::KeyNotFound)
    }

    fn last_fetched_at(&self) -> Option<Instant> {
        *self.last_fetch.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn mark_fetch(&self) {
        *self.last_fetch.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
    }

    fn refresh_due(&self) -> bool {
        self.last_fetched_at()
            .map_or(true, |at| at.elapsed() >= MIN_REFRESH_INTERVAL)
    }
}
