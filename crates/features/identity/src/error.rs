use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;

/// A specialized [`IdentityError`] enum of this crate.
#[waymark_derive::waymark_error]
pub enum IdentityError {
    /// Configuration errors for identity/authentication.
    #[error("Identity config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Authentication failures (bad credentials, invalid or revoked token).
    #[error("Identity auth error{}: {message}", format_context(.context))]
    Auth { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Storage failures surfaced through the admin repository.
    #[error("Identity storage error{}: {source}", format_context(.context))]
    Storage {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal identity error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Auth { .. } => (StatusCode::UNAUTHORIZED, "invalid credentials"),
            Self::Config { .. } | Self::Storage { .. } | Self::Internal { .. } => {
                // Storage/config details stay in the logs.
                tracing::error!(error = %self, "identity request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            },
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
