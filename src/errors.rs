use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Division fault: session {session_id} has zero possible points")]
    DivisionFault { session_id: i64 },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Superseded by a newer request")]
    Superseded,

    #[error("Results dispatcher is not running")]
    DispatcherClosed,

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::FetchError(_) => "FETCH_ERROR",
            AppError::DivisionFault { .. } => "DIVISION_FAULT",
            AppError::InvalidRecord(_) => "INVALID_RECORD",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Superseded => "SUPERSEDED",
            AppError::DispatcherClosed => "DISPATCHER_CLOSED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// True when the upstream records are inconsistent, as opposed to the
    /// data source being unreachable.
    pub fn is_data_fault(&self) -> bool {
        matches!(
            self,
            AppError::DivisionFault { .. } | AppError::InvalidRecord(_)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::FetchError(_) => StatusCode::BAD_GATEWAY,
            AppError::DivisionFault { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Superseded => StatusCode::CONFLICT,
            AppError::DispatcherClosed => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<async_graphql::Error> for AppError {
    fn from(err: async_graphql::Error) -> Self {
        AppError::InternalError(err.message)
    }
}
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_err, e| {
            e.set("code", self.error_code());
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
