use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Request-terminal errors. Each maps to a status code and a plain-text
/// body; internal details are logged, never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Chirp is too long")]
    ChirpTooLong,

    #[error("Reset endpoint is only available in development environment")]
    ResetForbidden,

    #[error("{message}")]
    Persistence {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Internal Server Error")]
    Template(#[from] std::io::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::ChirpTooLong => StatusCode::BAD_REQUEST,
            Self::ResetForbidden => StatusCode::FORBIDDEN,
            Self::Persistence { .. } | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            match &self {
                ApiError::Persistence { message, source } => {
                    error!("{}: {:#}", message, source);
                }
                ApiError::Template(e) => error!("failed to read metrics template: {}", e),
                _ => {}
            }
        }
        (status, self.to_string()).into_response()
    }
}
