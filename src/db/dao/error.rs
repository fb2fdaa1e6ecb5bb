use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("{0}")]
    Db(DbErr),
    #[error("{0}")]
    UniqueViolation(DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: String },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl From<DbErr> for DaoLayerError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::UniqueViolation(err),
            _ => Self::Db(err),
        }
    }
}
