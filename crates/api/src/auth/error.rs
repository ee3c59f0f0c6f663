use axum::http::StatusCode;

/// Reasons an inbound request fails authentication or authorization.
///
/// Every variant carries its own HTTP status and machine-readable code so the
/// error mapper can render it without further classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header, or one that is not `Bearer <token>`.
    #[error("{0}")]
    MissingToken(&'static str),

    /// The token (or its header) could not be parsed or uses an algorithm
    /// this service does not accept.
    #[error("{0}")]
    InvalidHeader(&'static str),

    #[error("Token expired.")]
    TokenExpired,

    /// Audience, issuer or another registered claim did not match.
    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,

    #[error("Token signature could not be verified.")]
    InvalidSignature,

    /// No published signing key matches the token's `kid`.
    #[error("Unable to find the appropriate key.")]
    KeyNotFound,

    /// The token verified but carries no `permissions` claim.
    #[error("Permissions not included in JWT.")]
    MissingPermissions,

    /// The token's permission set lacks the one the endpoint requires.
    #[error("Permission '{permission}' not found.")]
    Forbidden { permission: &'static str },
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingPermissions => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken(_) => "authorization_header_missing",
            AuthError::InvalidHeader(_) | AuthError::KeyNotFound => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims | AuthError::MissingPermissions => "invalid_claims",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Forbidden { .. } => "unauthorized",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::ImmatureSignature
            | ErrorKind::MissingRequiredClaim(_)
            | ErrorKind::Json(_) => AuthError::InvalidClaims,
            ErrorKind::InvalidAlgorithm | ErrorKind::MissingAlgorithm => {
                AuthError::InvalidHeader("Unsupported signing algorithm.")
            }
            _ => AuthError::InvalidHeader("Unable to parse authentication token."),
        }
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::errors::{Error, ErrorKind};

    use super::*;

    #[test]
    fn only_missing_permissions_is_a_bad_request() {
        assert_eq!(AuthError::MissingPermissions.status(), StatusCode::BAD_REQUEST);
        for err in [
            AuthError::MissingToken("x"),
            AuthError::InvalidHeader("x"),
            AuthError::TokenExpired,
            AuthError::InvalidClaims,
            AuthError::InvalidSignature,
            AuthError::KeyNotFound,
            AuthError::Forbidden { permission: "add:actors" },
        ] {
            assert_eq!(err.status(), StatusCode::UNAUTHORIZED, "{err:?}");
        }
    }

    #[test]
    fn jsonwebtoken_kinds_are_classified() {
        assert_eq!(
            AuthError::from(Error::from(ErrorKind::ExpiredSignature)),
            AuthError::TokenExpired
        );
        assert_eq!(
            AuthError::from(Error::from(ErrorKind::InvalidAudience)),
            AuthError::InvalidClaims
        );
        assert_eq!(
            AuthError::from(Error::from(ErrorKind::InvalidIssuer)),
            AuthError::InvalidClaims
        );
        assert_eq!(
            AuthError::from(Error::from(ErrorKind::InvalidSignature)),
            AuthError::InvalidSignature
        );
        assert_eq!(
            AuthError::from(Error::from(ErrorKind::InvalidToken)),
            AuthError::InvalidHeader("Unable to parse authentication token.")
        );
    }
}
