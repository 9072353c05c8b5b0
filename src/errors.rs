use std::io;

use thiserror::Error;

/// A value that does not satisfy the constraints of the domain type it was meant for.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IllegalValueError {
    #[error("Person names should be spaces or alphanumeric characters: '{0}'")]
    Name(String),

    #[error("Person phone numbers should be 3 to 15 digits, optionally prefixed by '+': '{0}'")]
    Phone(String),

    #[error("Person emails should be 2 alphanumeric/period strings separated by '@': '{0}'")]
    Email(String),

    #[error("Person addresses can be in any format but must not be blank")]
    Address(String),

    #[error("Tags names should be alphanumeric: '{0}'")]
    Tag(String),

    #[error(transparent)]
    Duplicate(#[from] DuplicatePersonError),
}

impl IllegalValueError {
    /// Name of the constraint that rejected the value.
    pub fn constraint(&self) -> &'static str {
        match self {
            IllegalValueError::Name(_) => "name",
            IllegalValueError::Phone(_) => "phone",
            IllegalValueError::Email(_) => "email",
            IllegalValueError::Address(_) => "address",
            IllegalValueError::Tag(_) => "tag",
            IllegalValueError::Duplicate(_) => "unique persons",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Operation would result in duplicate persons: {name} ({phone})")]
pub struct DuplicatePersonError {
    pub name: String,
    pub phone: String,
}

/// Failure of a storage operation. Every variant carries the storage path.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage file should end with '.txt': {path}")]
    InvalidStorageFilePath { path: String },

    #[error("Error parsing file data format in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("File data missing some elements in {path}: {field}")]
    IncompleteData { path: String, field: String },

    #[error(
        "File contains illegal data values; data type constraints not met in {path} ({}): {source}",
        .source.constraint()
    )]
    IllegalValue {
        path: String,
        #[source]
        source: IllegalValueError,
    },

    #[error("I/O error while accessing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    pub fn path(&self) -> &str {
        match self {
            StorageError::InvalidStorageFilePath { path }
            | StorageError::Parse { path, .. }
            | StorageError::IncompleteData { path, .. }
            | StorageError::IllegalValue { path, .. }
            | StorageError::Io { path, .. } => path,
        }
    }
}

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Validation failed: {0}")]
    Validation(#[from] IllegalValueError),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] io::Error),
}

impl From<DuplicatePersonError> for AppError {
    fn from(err: DuplicatePersonError) -> Self {
        AppError::Validation(err.into())
    }
}
