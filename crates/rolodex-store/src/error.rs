//! Error types for store operations.

use rolodex_models::UserId;
use rolodex_persistence::PersistenceError;
use thiserror::Error;

/// Broad category of a [`StoreError`], for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required text field was empty after trimming.
    Validation,
    /// An id or query argument could not be used.
    InvalidInput,
    /// The requested record(s) do not exist.
    NotFound,
    /// Reading or writing the users file failed.
    Persistence,
}

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A contact field is empty after trimming.
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// The id argument is not an integer.
    #[error("user_id must be an integer")]
    NotAnInteger(String),

    /// The id argument is zero or negative.
    #[error("User id must be positive")]
    NonPositiveId(i64),

    /// The search query is empty after trimming.
    #[error("Search cannot be empty")]
    EmptyQuery,

    /// The store holds no records at all.
    #[error("Users catalog is empty")]
    EmptyCatalog,

    /// No record carries the requested id.
    #[error("User with id={0} not found")]
    UserNotFound(i64),

    /// The next id would exceed `i64::MAX`.
    #[error("no user ids left after {0}")]
    IdsExhausted(UserId),

    /// A search matched no record.
    #[error("{0} not found")]
    NoMatches(String),

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::EmptyField { .. } => ErrorKind::Validation,
            StoreError::NotAnInteger(_)
            | StoreError::NonPositiveId(_)
            | StoreError::EmptyQuery
            | StoreError::IdsExhausted(_) => ErrorKind::InvalidInput,
            StoreError::EmptyCatalog | StoreError::UserNotFound(_) | StoreError::NoMatches(_) => {
                ErrorKind::NotFound
            }
            StoreError::Persistence(_) => ErrorKind::Persistence,
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(StoreError::EmptyField { field: "Name" }.kind(), ErrorKind::Validation);
        assert_eq!(StoreError::NotAnInteger("x".into()).kind(), ErrorKind::InvalidInput);
        assert_eq!(StoreError::NonPositiveId(0).kind(), ErrorKind::InvalidInput);
        assert_eq!(StoreError::EmptyQuery.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            StoreError::IdsExhausted(UserId::new(i64::MAX)).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(StoreError::EmptyCatalog.kind(), ErrorKind::NotFound);
        assert_eq!(StoreError::UserNotFound(4).kind(), ErrorKind::NotFound);
        assert_eq!(StoreError::NoMatches("q".into()).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::EmptyField { field: "Phone" }.to_string(),
            "Phone cannot be empty"
        );
        assert_eq!(StoreError::UserNotFound(7).to_string(), "User with id=7 not found");
        assert_eq!(StoreError::NoMatches("linz".into()).to_string(), "linz not found");
        assert_eq!(StoreError::EmptyCatalog.to_string(), "Users catalog is empty");
    }
}
