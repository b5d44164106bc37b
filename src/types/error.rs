use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// A single failed check on one request field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    errors: T,
}

impl AppError {
    /// Unknown username and wrong password must be indistinguishable.
    pub fn invalid_credentials() -> Self {
        AppError::Unauthorized("invalid username or password".to_string())
    }

    pub fn unauthorized() -> Self {
        AppError::Unauthorized("unauthorized".to_string())
    }

    pub fn duplicate_username() -> Self {
        AppError::Conflict("username already exists".to_string())
    }

    fn from_db(err: DbErr) -> Self {
        // the unique index on username is the authoritative duplicate guard;
        // the pre-insert count check is only a fast path
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::duplicate_username(),
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match self {
            Self::Validation(fields) => res.json(ErrorBody { errors: fields }),
            Self::Conflict(message) | Self::Unauthorized(message) => {
                res.json(ErrorBody { errors: message })
            }
            // store/hash internals never reach the client
            Self::Db(_) | Self::Internal(_) => res.json(ErrorBody {
                errors: "internal server error",
            }),
        }
    }
}
