use crate::error::IdentityError;
use crate::extract::AdminSession;
use crate::{Identity, password};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use waymark_derive::{api_handler, api_model};
use waymark_domain::constants::AUTH_TAG;
use waymark_kernel::server::ApiState;

#[api_model]
/// Admin credentials presented at login.
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[api_model(rename_all = "snake_case")]
/// Issued session token (OAuth2-style field names).
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

#[api_model]
/// The authenticated admin, as exposed over the wire.
pub struct AdminProfile {
    pub username: String,
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(login_handler))
        .routes(routes!(logout_handler))
        .routes(routes!(me_handler))
}

fn slice(state: &ApiState) -> Result<&Identity, IdentityError> {
    state.try_get_slice::<Identity>().map_err(|e| IdentityError::from(e.to_string()))
}

#[api_handler(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = OK, description = "Session issued", body = TokenResponse),
        (status = UNAUTHORIZED, description = "Invalid credentials"),
    ),
    tag = AUTH_TAG,
)]
pub(crate) async fn login_handler(
    State(state): State<ApiState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, IdentityError> {
    let identity = slice(&state)?;

    // Same rejection for unknown usernames and wrong passwords.
    let admin = identity.admins.find_by_username(&payload.username).await?.ok_or_else(|| {
        IdentityError::Auth { message: "Unknown username".into(), context: None }
    })?;

    if !password::verify_password(&admin.password_hash, &payload.password)? {
        return Err(IdentityError::Auth { message: "Wrong password".into(), context: None });
    }

    let (token, claims) = identity.tokens.issue(&admin.username)?;
    identity.sessions.insert(claims.jti, claims.sub);

    info!(username = %admin.username, "Admin signed in");

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer",
        expires_in: identity.tokens.ttl_seconds(),
    }))
}

#[api_handler(
    post,
    path = "/api/auth/logout",
    responses(
        (status = NO_CONTENT, description = "Session revoked"),
        (status = UNAUTHORIZED, description = "Not authenticated"),
    ),
    tag = AUTH_TAG,
)]
pub(crate) async fn logout_handler(
    State(state): State<ApiState>,
    session: AdminSession,
) -> Result<StatusCode, IdentityError> {
    let identity = slice(&state)?;
    identity.sessions.invalidate(&session.jti);

    info!(username = %session.username, "Admin signed out");
    Ok(StatusCode::NO_CONTENT)
}

#[api_handler(
    get,
    path = "/api/auth/me",
    responses(
        (status = OK, description = "The authenticated admin", body = AdminProfile),
        (status = UNAUTHORIZED, description = "Not authenticated"),
    ),
    tag = AUTH_TAG,
)]
pub(crate) async fn me_handler(session: AdminSession) -> Json<AdminProfile> {
    Json(AdminProfile { username: session.username })
}
