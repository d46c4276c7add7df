use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use thiserror::Error;
use uuid::Uuid;

use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_PAYLOAD_TOO_LARGE, CODE_USER_NOT_FOUND, CODE_VALIDATION_FAILED,
    ERR_PAYLOAD_TOO_LARGE, ERR_STORAGE_FAILURE, ERR_USER_NOT_FOUND, ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;
use crate::repositories::RepositoryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request [{code}]: {message}")]
    BadRequest { code: String, message: String },
    #[error("Not Found [{code}]: {message} ({id})")]
    NotFound { code: String, message: String, id: Uuid },
    #[error("Payload Too Large [{code}]: {message}")]
    PayloadTooLarge { code: String, message: String },
    #[error("Internal Server Error [{code}]: {message}")]
    InternalServerError { code: String, message: String },
    #[error("Validation Error [{code}]: {errors:?}")]
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// The lookup for `id` came back absent.
    pub fn user_not_found(id: Uuid) -> Self {
        ApiError::NotFound {
            code: CODE_USER_NOT_FOUND.to_string(),
            message: ERR_USER_NOT_FOUND.to_string(),
            id,
        }
    }

    /// Request body exceeded the configured payload limit.
    pub fn payload_too_large() -> Self {
        ApiError::PayloadTooLarge {
            code: CODE_PAYLOAD_TOO_LARGE.to_string(),
            message: ERR_PAYLOAD_TOO_LARGE.to_string(),
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::ValidationError {
            code: CODE_VALIDATION_FAILED.to_string(),
            errors,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::BadRequest { code, message }
            | ApiError::PayloadTooLarge { code, message }
            | ApiError::InternalServerError { code, message } => {
                ErrorResponse::new(code, message)
            }
            ApiError::NotFound { code, message, id } => {
                ErrorResponse::new(code, message).with_id(*id)
            }
            ApiError::ValidationError { code, errors } => {
                ErrorResponse::new(code, ERR_VALIDATION_FAILED).with_errors(errors.clone())
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        error!("User repository failure: {}", err);
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: ERR_STORAGE_FAILURE.to_string(),
        }
    }
}
