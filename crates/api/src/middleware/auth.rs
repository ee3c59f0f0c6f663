//! Bearer-token authentication extractor for Axum handlers.

use std::collections::HashSet;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Caller identity extracted from a verified `Authorization: Bearer` token.
///
/// Prefer [`Authorized`](super::rbac::Authorized) in handlers; use this
/// directly only where any valid token is enough.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The identity provider's subject id (`claims.sub`).
    pub subject: String,
    /// Permissions granted by the token.
    pub permissions: HashSet<String>,
}

impl AuthUser {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.verifier.verify(token).await?;

        Ok(AuthUser {
            subject: claims.sub,
            permissions: claims.permissions.unwrap_or_default().into_iter().collect(),
        })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; anything other than exactly
/// two space-separated parts is rejected.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken("Authorization header is expected."))?
        .to_str()
        .map_err(|_| AuthError::MissingToken("Authorization header must be bearer token."))?;

    let mut parts = value.split_whitespace();
    let (Some(scheme), token, rest) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AuthError::MissingToken("Authorization header is expected."));
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingToken(
            "Authorization header must start with \"Bearer\".",
        ));
    }

    match (token, rest) {
        (Some(token), None) => Ok(token),
        (None, _) => Err(AuthError::MissingToken("Token not found.")),
        (Some(_), Some(_)) => Err(AuthError::MissingToken(
            "Authorization header must be bearer token.",
        )),
    }
}
