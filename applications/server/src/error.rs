/// Server error types
use crate::api::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadence_core::{ApiError, ErrorKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Failure reported by the annotation coordinator
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Subsonic clients expect protocol errors inside a 200 response
        let (status, error) = match self {
            ServerError::Api(err) => (StatusCode::OK, err),
            ServerError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new(ErrorKind::InvalidArgument, msg),
            ),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ApiError::internal())
            }
        };

        (status, Json(Envelope::failed(&error))).into_response()
    }
}
