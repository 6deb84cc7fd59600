use models::{errors::ModelError, Table};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error taxonomy shared by every repository backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
    #[error("invalid entity: {0}")]
    InvalidEntity(String),
    #[error("{0} must not be empty")]
    EmptyEntity(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("fixture error: {0}")]
    Fixture(String),
}

impl ServiceError {
    pub fn not_found(table: Table, id: i32) -> Self {
        Self::NotFound(format!("{} {}", table.entity_name(), id))
    }

    /// Translate a driver error raised while working on `table`.
    pub fn from_db(table: Table, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                return Self::AlreadyExists(format!("{} with the same unique code", table.entity_name()));
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                return Self::ForeignKeyViolation(format!("{}: {}", table.entity_name(), detail));
            }
            _ => {}
        }
        match err {
            DbErr::RecordNotFound(detail) => Self::NotFound(detail),
            DbErr::RecordNotUpdated => Self::NotFound(table.entity_name().to_string()),
            other => Self::Db(other.to_string()),
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Empty(field) => Self::EmptyEntity(field),
            ModelError::Invalid(reason) => Self::InvalidEntity(reason),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::AlreadyExists(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Self::ForeignKeyViolation(detail),
            _ => match err {
                DbErr::RecordNotFound(detail) => Self::NotFound(detail),
                DbErr::RecordNotUpdated => Self::NotFound("record".into()),
                other => Self::Db(other.to_string()),
            },
        }
    }
}
