use std::fmt;

use crate::store::StoreError;
use crate::weapon::{ValidationError, WeaponId};

/// Coarse classification of a [`RepositoryError`].
///
/// Lets a caller pick a response class without inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Persistence,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// The input was malformed or broke a record invariant.
    Validation(ValidationError),
    /// No record with this id exists.
    NotFound(WeaponId),
    /// The store failed; the operation was not applied.
    Persistence(StoreError),
}

impl RepositoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::Validation(_) => ErrorKind::Validation,
            RepositoryError::NotFound(_) => ErrorKind::NotFound,
            RepositoryError::Persistence(_) => ErrorKind::Persistence,
        }
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Validation(err) => write!(f, "validation failed: {}", err),
            RepositoryError::NotFound(id) => write!(f, "no weapon with id {}", id),
            RepositoryError::Persistence(err) => write!(f, "persistence failed: {}", err),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::Validation(err) => Some(err),
            RepositoryError::Persistence(err) => Some(err),
            RepositoryError::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RepositoryError {
    fn from(err: ValidationError) -> Self {
        RepositoryError::Validation(err)
    }
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        RepositoryError::Persistence(err)
    }
}
