use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Events service error variants.
#[derive(Debug, thiserror::Error)]
pub enum EventsServiceError {
    #[error("email not found")]
    UsernameNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl EventsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UsernameNotFound => "USERNAME_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for EventsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UsernameNotFound => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
