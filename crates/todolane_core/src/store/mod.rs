//! Task persistence: wire records and JSON file IO.
//!
//! # Responsibility
//! - Define the persisted record shape for tasks and its (de)serialization.
//! - Read and write the task-list JSON file.
//!
//! # Invariants
//! - A malformed record is rejected wholesale, never partially applied.
//! - Decoding validates through the domain constructors; persisted state
//!   that violates domain invariants does not load.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;
pub mod task_file;

pub use codec::CodecError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for task-file read/write operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Codec(CodecError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CodecError> for StoreError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}
