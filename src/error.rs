//! Request error taxonomy and its HTTP mapping

use std::convert::Infallible;

use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::models::ErrorResponse;
use crate::store::StoreError;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or wrong API key
    #[error("Invalid API key")]
    Unauthorized,

    /// Message body exceeds the configured length
    #[error("Message exceeds maximum length of {max} characters")]
    MessageTooLong { max: usize },

    /// The store already holds the maximum number of messages
    #[error("Maximum message limit reached")]
    CapacityReached { limit: usize },

    /// No stored message has the requested id
    #[error("Message not found")]
    NotFound(Uuid),

    /// Persistence failure
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::FORBIDDEN,
            ApiError::MessageTooLong { .. } | ApiError::CapacityReached { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller; storage details stay in the logs
    pub fn detail(&self) -> String {
        match self {
            ApiError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl warp::reject::Reject for ApiError {}

/// Convert any rejection into a JSON `{"detail": ...}` reply
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, detail) = if let Some(api_error) = err.find::<ApiError>() {
        match api_error {
            ApiError::Storage(store_error) => error!(error = %store_error, "storage failure"),
            other => warn!(error = %other, "request rejected"),
        }
        (api_error.status(), api_error.detail())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(e) = err.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large".to_string())
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Length required".to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported media type".to_string(),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed".to_string(),
        )
    } else {
        error!(rejection = ?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorResponse { detail }),
        status,
    ))
}
