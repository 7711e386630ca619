use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("item not found")]
    NotFound,
    #[error("storage error: {public}")]
    Storage { public: &'static str },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl AppError {
    pub fn missing_fields() -> Self {
        AppError::Validation("Missing name or price".to_string())
    }

    /// Converts a store failure into the generic message the caller sees.
    /// The backend detail goes to the server log only.
    pub fn storage(public: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound,
            StoreError::Unavailable(detail) => {
                log::error!("{}: {}", public, detail);
                AppError::Storage { public }
            }
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation(msg) => msg,
            Self::NotFound => "Item not found",
            Self::Storage { public } => public,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.message(),
        })
    }
}
