//! HTTP-facing errors.
//!
//! Every failure is rendered as `{"errors": [...]}` with a status code chosen
//! by variant.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{model::ValidationErrors, store::StoreError};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 422
    #[error(transparent)]
    Validation(ValidationErrors),

    /// 404
    #[error("{0}")]
    NotFound(String),

    /// 400: the body could not be read as `{"todo": {...}}`.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::Invalid(errors) => ApiError::Validation(errors),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRequest(_) => warn!(%status, "{}", self),
            _ => debug!(%status, "{}", self),
        }

        let errors = match self {
            ApiError::Validation(errors) => errors.0,
            ApiError::NotFound(message) | ApiError::BadRequest(message) => vec![message],
        };
        (status, Json(ErrorBody { errors })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
