//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("product was deleted by a concurrent request")]
    DeletedConcurrently,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error: {0}")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = ProductsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, ProductsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn pool_errors_are_kept_as_storage_errors() {
        let error = ProductsServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, ProductsServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
        assert!(error.to_string().starts_with("storage error"));
    }
}
