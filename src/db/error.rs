use thiserror::Error;

// Postgres error codes the store translates instead of passing through
const UNIQUE_VIOLATION: &str = "23505";
const NOT_NULL_VIOLATION: &str = "23502";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Error taxonomy of the store layer. Every sqlx error is classified into
/// exactly one of these kinds; callers map them to wire-level statuses.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("object does not exist")]
    NotFound,
    #[error("duplicate entity")]
    Duplicate,
    #[error("constraint violated: {0}")]
    Validation(String),
    #[error("store unavailable")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => StoreError::Duplicate,
                Some(NOT_NULL_VIOLATION) | Some(FOREIGN_KEY_VIOLATION) | Some(CHECK_VIOLATION) => {
                    StoreError::Validation(db_err.message().to_string())
                }
                _ => StoreError::Unavailable(sqlx::Error::Database(db_err)),
            },
            err => StoreError::Unavailable(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test]
    fn connection_failure_stays_unavailable() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
