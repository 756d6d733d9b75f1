use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let kind = err.kind();
        let status = match &err {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApplicationError::Unauthorized(_) => StatusCode::FORBIDDEN,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::IllegalTransition(_) => StatusCode::CONFLICT,
            ApplicationError::ConcurrencyConflict(_) => StatusCode::PRECONDITION_FAILED,
            ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match err {
            ApplicationError::Validation(msg)
            | ApplicationError::IllegalTransition(msg)
            | ApplicationError::Unauthorized(msg)
            | ApplicationError::Unauthenticated(msg)
            | ApplicationError::ConcurrencyConflict(msg)
            | ApplicationError::NotFound(msg) => msg,
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "infrastructure failure");
                "internal error".into()
            }
        };
        Self {
            status,
            kind,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            kind: self.kind.to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
