//! Permission-based access control extractors.
//!
//! Each endpoint names the single permission it requires through a marker
//! type, so the requirement is visible in the handler signature:
//!
//! ```ignore
//! async fn create(auth: Authorized<AddActors>, ...) -> AppResult<...> {
//!     // auth.user is guaranteed to hold `add:actors` here
//! }
//! ```
//!
//! The check runs while extracting request parts, before the body is read,
//! so a caller without the permission is rejected regardless of payload.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use casting_core::permissions;

use super::auth::AuthUser;
use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// A permission an endpoint can require.
pub trait Permission: Send + Sync + 'static {
    /// The permission string as it appears in the token's `permissions` claim.
    const NAME: &'static str;
}

macro_rules! permission_markers {
    ($($(#[$meta:meta])* $marker:ident => $name:path;)*) => {
        $(
            $(#[$meta])*
            pub struct $marker;

            impl Permission for $marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

permission_markers! {
    /// `get:actors`
    GetActors => permissions::GET_ACTORS;
    /// `add:actors`
    AddActors => permissions::ADD_ACTORS;
    /// `modify:actors`
    ModifyActors => permissions::MODIFY_ACTORS;
    /// `delete:actors`
    DeleteActors => permissions::DELETE_ACTORS;
    /// `get:movie`
    GetMovie => permissions::GET_MOVIE;
    /// `add:movie`
    AddMovie => permissions::ADD_MOVIE;
    /// `modify:movie`
    ModifyMovie => permissions::MODIFY_MOVIE;
    /// `delete:movie`
    DeleteMovie => permissions::DELETE_MOVIE;
}

/// An authenticated caller holding permission `P`. Rejects with 401 otherwise.
pub struct Authorized<P: Permission> {
    pub user: AuthUser,
    _permission: PhantomData<P>,
}

impl<P: Permission> FromRequestParts<AppState> for Authorized<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.has_permission(P::NAME) {
            return Err(AuthError::Forbidden {
                permission: P::NAME,
            }
            .into());
        }
        Ok(Authorized {
            user,
            _permission: PhantomData,
        })
    }
}
