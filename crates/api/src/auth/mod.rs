//! Access-token verification against the identity provider.
//!
//! - [`verifier`] -- signature, expiry, audience and issuer checks; yields [`Claims`].
//! - [`jwks`] -- retrieval of the provider's published signing keys.
//! - [`error`] -- the closed set of verification failures.

pub mod error;
pub mod jwks;
pub mod verifier;

pub use error::AuthError;
pub use verifier::{AuthConfig, Claims, TokenVerifier};
