//! Identity feature slice: admin credentials, JWT sessions, and the Axum
//! auth extractor guarding the mutating API surface.

mod error;
mod extract;
mod handlers;
mod password;
mod repository;
mod session;
mod token;

pub use crate::error::{IdentityError, IdentityErrorExt};
pub use crate::extract::AdminSession;
pub use crate::handlers::{AdminProfile, LoginRequest, TokenResponse, router};
pub use crate::repository::{AdminRecord, AdminRepository};
pub use crate::session::SessionCache;
pub use crate::token::{Claims, TokenCodec};
use std::time::Duration;
use waymark_database::Database;
use waymark_domain::config::ApiConfig;
use waymark_domain::registry::InitializedSlice;

/// Identity feature state.
#[waymark_derive::waymark_slice]
pub struct Identity {
    pub tokens: TokenCodec,
    pub sessions: SessionCache,
    pub admins: AdminRepository,
}

/// Initialize the identity feature.
///
/// # Errors
/// Returns an error if the JWT configuration is unusable.
pub fn init(config: &ApiConfig, db: &Database) -> Result<InitializedSlice, IdentityError> {
    let identity_cfg = &config.security.identity;

    let inner = IdentityInner {
        tokens: TokenCodec::new(&identity_cfg.jwt)?,
        sessions: SessionCache::new(
            identity_cfg.session_cache_capacity,
            Duration::from_secs(identity_cfg.jwt.ttl_seconds),
        ),
        admins: AdminRepository::new(db.clone()),
    };

    let slice = Identity::new(inner);
    tracing::info!("Identity server slice initialized");

    Ok(InitializedSlice::new(slice))
}
