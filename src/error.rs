use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::{DbErr, SqlErr};

use crate::views::Views;

/// SQLite's wording when a foreign key refuses a write.
const SQLITE_FOREIGN_KEY_FAILED: &str = "FOREIGN KEY constraint failed";

/// Unified application error type that maps to the shared error page.
///
/// Pages that have a dedicated "not found" view render it themselves; this type
/// covers everything else.
#[derive(Debug)]
pub enum AppError {
    /// 404 Not Found
    NotFound(String),
    /// 409 Conflict (the store refused a write, e.g. a foreign-key restriction)
    Conflict(String),
    /// A form body the extractor could not accept (415, 422, ...)
    InvalidForm { status: StatusCode, message: String },
    /// 500 Internal Server Error (wraps any error, logs details, returns generic message)
    Internal(anyhow::Error),
}

impl AppError {
    /// Classify a store error from a write.
    ///
    /// Referential refusals become [`AppError::Conflict`]; anything else is internal.
    #[must_use]
    pub fn from_store(err: DbErr) -> Self {
        let detail = match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => detail,
            // SQLite reports a trigger-enforced refusal (e.g. `ON DELETE RESTRICT`)
            // under an extended code `sql_err` does not classify.
            _ if err.to_string().contains(SQLITE_FOREIGN_KEY_FAILED) => err.to_string(),
            _ => return Self::Internal(err.into()),
        };

        tracing::warn!(%detail, "store refused write: foreign key constraint");
        Self::Conflict(
            "This record is still referenced by other records and cannot be changed.".to_string(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::InvalidForm { status, message } => (status, message),
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        Views::error_page(status, &message)
    }
}

/// Allow `?` to automatically convert any `anyhow::Error` into `AppError::Internal`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
