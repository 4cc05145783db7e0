//! HTTP error envelope returned by every failing route.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::github::ProviderError;

/// Failures a route can answer with.
///
/// Validation failures are reported before the provider is called; provider
/// failures carry their message through unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The create body was not an object with a non-empty `name` string.
    #[error("invalid request")]
    InvalidRequest,

    /// The repository path segment was empty.
    #[error("repository name is required")]
    MissingRepositoryName,

    /// The repository path segment could not be decoded or would address a
    /// different upstream route.
    #[error("invalid repository name")]
    InvalidRepositoryName,

    /// The `n` query parameter was not an integer of at least -1.
    #[error("invalid value for n")]
    InvalidCount,

    /// The provider client failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ApiError {
    /// HTTP status reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest
            | Self::MissingRepositoryName
            | Self::InvalidRepositoryName
            | Self::InvalidCount => StatusCode::BAD_REQUEST,
            Self::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
