//! Error types returned by the workout client.

use sea_orm::{DbErr, SqlErr};

/// Errors produced by [`WorkoutClient`](crate::WorkoutClient) and the model delegates.
///
/// Database failures that the client can recognise (missing rows, unique and
/// foreign key violations) are surfaced as dedicated variants so callers can
/// branch on them without inspecting driver messages. Everything else is passed
/// through as [`Error::Database`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No row matched a query that requires one.
    #[error("no {model} record matched the query")]
    NotFound { model: &'static str },

    /// A write collided with an existing row on a unique key.
    #[error("unique constraint failed on {model}: {detail}")]
    UniqueConstraint { model: &'static str, detail: String },

    /// A write referenced a row that does not exist.
    #[error("foreign key constraint failed on {model}: {detail}")]
    ForeignKeyConstraint { model: &'static str, detail: String },

    /// Input was rejected before reaching the database.
    #[error("invalid {model} input: {message}")]
    Validation { model: &'static str, message: String },

    /// The client could not be configured or connected.
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Classifies a database error raised while operating on `model`.
    pub(crate) fn from_db(model: &'static str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                return Error::UniqueConstraint { model, detail };
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                return Error::ForeignKeyConstraint { model, detail };
            }
            _ => {}
        }

        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Error::NotFound { model },
            other => Error::Database(other),
        }
    }

    pub(crate) fn validation(model: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            model,
            message: message.into(),
        }
    }

    /// Returns `true` for errors caused by a missing row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns `true` for unique key collisions.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Error::UniqueConstraint { .. })
    }
}
