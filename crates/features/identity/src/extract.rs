//! Request guard for the admin API surface.

use crate::error::IdentityError;
use crate::{Identity, IdentityErrorExt};
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use waymark_kernel::server::ApiState;

/// An authenticated admin session, extracted from the `Authorization` header.
///
/// The token must carry a valid signature, issuer, and expiry, and its `jti`
/// must still be present in the session cache (i.e. not logged out).
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
    pub jti: String,
}

impl<S> FromRequestParts<S> for AdminSession
where
    ApiState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = IdentityError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = ApiState::from_ref(state);
        let identity = state
            .try_get_slice::<Identity>()
            .map_err(|e| IdentityError::from(e.to_string()))
            .context("Identity slice not registered")?;

        let header =
            parts.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok()).ok_or_else(
                || IdentityError::Auth {
                    message: "Missing Authorization header".into(),
                    context: None,
                },
            )?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| IdentityError::Auth {
            message: "Authorization header is not a Bearer token".into(),
            context: None,
        })?;

        let claims = identity.tokens.verify(token)?;
        if !identity.sessions.contains(&claims.jti) {
            return Err(IdentityError::Auth {
                message: "Session revoked or expired".into(),
                context: None,
            });
        }

        Ok(Self { username: claims.sub, jti: claims.jti })
    }
}
