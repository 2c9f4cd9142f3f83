use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[display("{_0}")]
    BadRequest(String),
    #[display("{_0}")]
    NotFound(String),
    #[display("{_0}")]
    MethodNotAllowed(String),
    #[display("internal")]
    Internal,
}

/// Error body: `{ "status": 400, "message": "..." }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrBody {
    pub status: u16,
    pub message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrBody {
            status: status.as_u16(),
            message: self.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepoErr {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("duplicate id: {0}")]
    Duplicate(String),
    #[error("index out of range: {0}")]
    IndexOutOfRange(usize),
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
}

impl From<RepoErr> for ApiError {
    fn from(err: RepoErr) -> Self {
        match err {
            RepoErr::NotFound(id) => ApiError::NotFound(format!("id not found: {id}")),
            other => {
                tracing::error!(err = %other, "repository failure");
                ApiError::Internal
            }
        }
    }
}
