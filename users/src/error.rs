use std::fmt;

use thiserror::Error;

use crate::context::Interrupted;
use crate::users::ValidationError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
pub type UsersResult<T> = Result<T, UsersError>;

/// The step of the create workflow an error came out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Validate,
    StoreCreate,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Validate => "Validate",
            Step::StoreCreate => "store.Create",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum UsersError {
    #[error("Validate: {0}")]
    Validation(#[source] ValidationError),

    /// Whatever the store returned, boxed so callers can downcast it.
    #[error("store.Create: {0}")]
    Store(#[source] BoxError),
}

impl UsersError {
    pub fn step(&self) -> Step {
        match self {
            UsersError::Validation(_) => Step::Validate,
            UsersError::Store(_) => Step::StoreCreate,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, UsersError::Validation(_))
    }

    pub fn is_store(&self) -> bool {
        matches!(self, UsersError::Store(_))
    }
}

/// Errors from the SQLite-backed store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Interrupted(#[from] Interrupted),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_is_prefixed_with_step() {
        let err = UsersError::Validation(ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Validate: invalid email address provided");
        assert_eq!(err.step(), Step::Validate);

        let err = UsersError::Store(Box::new(Interrupted::Cancelled));
        assert_eq!(err.to_string(), "store.Create: context cancelled");
        assert_eq!(err.step().to_string(), "store.Create");
    }

    #[test]
    fn test_store_source_downcasts() {
        let err = UsersError::Store(Box::new(StoreError::from(Interrupted::DeadlineExceeded)));
        assert!(err.is_store());
        assert!(!err.is_validation());

        let source = err.source().expect("store error has a source");
        let store_err = source
            .downcast_ref::<StoreError>()
            .expect("source is a StoreError");
        assert!(matches!(
            store_err,
            StoreError::Interrupted(Interrupted::DeadlineExceeded)
        ));
    }
}
