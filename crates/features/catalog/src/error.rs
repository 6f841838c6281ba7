use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[waymark_derive::waymark_error]
pub enum CatalogError {
    /// Malformed input (bad URL, bad record id).
    #[error("Catalog validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The referenced record does not exist.
    #[error("Catalog record not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A uniqueness constraint was violated (duplicate category name).
    #[error("Catalog conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Storage failures surfaced through the repositories.
    #[error("Catalog storage error{}: {source}", format_context(.context))]
    Storage {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },
    /// Failures while writing generated icon files.
    #[error("Icon store error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation { message, .. } => (StatusCode::BAD_REQUEST, message.to_string()),
            Self::NotFound { message, .. } => (StatusCode::NOT_FOUND, message.to_string()),
            Self::Conflict { message, .. } => (StatusCode::CONFLICT, message.to_string()),
            Self::Storage { .. } | Self::Io { .. } | Self::Internal { .. } => {
                // Storage details stay in the logs.
                tracing::error!(error = %self, "catalog request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned())
            },
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
