//! Store-level errors, distinct from grammar errors: the master document
//! being unreadable or malformed is not a property of any field value.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Csv(csv::Error),
    /// A row or submission with an id that does not parse as an integer
    InvalidId(String),
    /// An edit submission without an id field
    MissingId,
    /// An edit submission whose id matches no row
    UnknownId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(error) => write!(f, "I/O error on the master document: {}", error),
            StoreError::Csv(error) => write!(f, "Malformed master document: {}", error),
            StoreError::InvalidId(id) => {
                write!(f, "The following id is not a non-negative integer: {}", id)
            }
            StoreError::MissingId => {
                write!(f, "An edit submission must carry the id of the resource to edit")
            }
            StoreError::UnknownId(id) => {
                write!(f, "No resource with the following id exists: {}", id)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(error) => Some(error),
            StoreError::Csv(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> StoreError {
        StoreError::Io(error)
    }
}

impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> StoreError {
        StoreError::Csv(error)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
