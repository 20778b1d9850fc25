use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::{Failure, Reply};

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request itself is unacceptable. Not an operator concern.
    #[error("{0}")]
    Validation(&'static str),

    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,

    /// The store could not complete the operation.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: mailroom_shared::Error,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                tracing::debug!("Rejected request: {}", message);
                Reply(StatusCode::BAD_REQUEST, Failure::new(message)).into_response()
            }
            ApiError::PayloadTooLarge => {
                tracing::debug!("Rejected oversized request body");
                Reply(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Failure::new("Request body too large"),
                )
                .into_response()
            }
            ApiError::Store { message, source } => {
                tracing::error!(error = ?source, "{}", message);
                Reply(StatusCode::INTERNAL_SERVER_ERROR, Failure::new(message)).into_response()
            }
        }
    }
}

/// Attaches the client-facing failure message to a store result.
pub trait StoreResultExt<T> {
    fn or_fail(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> StoreResultExt<T> for mailroom_shared::Result<T> {
    fn or_fail(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|source| ApiError::Store { message, source })
    }
}
