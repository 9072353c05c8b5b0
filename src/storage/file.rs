use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use super::{AdaptedAddressBook, DEFAULT_STORAGE_FILEPATH, Storage, create_file_parent};
use crate::domain::AddressBook;
use crate::errors::StorageError;

/// Address book stored as a JSON document in a `.txt` file.
#[derive(Debug, Clone)]
pub struct StorageFile {
    path: String,
}

impl StorageFile {
    pub fn new() -> Result<Self, StorageError> {
        Self::with_path(DEFAULT_STORAGE_FILEPATH)
    }

    pub fn with_path(path: &str) -> Result<Self, StorageError> {
        if !Self::is_valid_path(path) {
            return Err(StorageError::InvalidStorageFilePath {
                path: path.to_string(),
            });
        }

        Ok(StorageFile {
            path: path.to_string(),
        })
    }

    /// A storage file is acceptable if its path ends with `.txt`.
    pub fn is_valid_path(path: &str) -> bool {
        path.ends_with(".txt")
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_error(&self, source: serde_json::Error) -> StorageError {
        if source.is_io() {
            self.io_error(source.into())
        } else {
            StorageError::Parse {
                path: self.path.clone(),
                source,
            }
        }
    }

    fn create_empty(&self) -> Result<AddressBook, StorageError> {
        info!(path = %self.path, "storage file not found, creating an empty address book");
        let empty = AddressBook::new();
        self.save(&empty)?;
        Ok(empty)
    }
}

impl Storage for StorageFile {
    fn load(&self) -> Result<AddressBook, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return self.create_empty(),
            Err(e) => return Err(self.io_error(e)),
        };

        let reader = BufReader::new(file);
        let loaded: AdaptedAddressBook = serde_json::from_reader(reader).map_err(|e| {
            warn!(path = %self.path, error = %e, "could not read address book");
            self.read_error(e)
        })?;

        // serde alone cannot tell a missing element apart from a present one
        if let Some(field) = loaded.first_missing_field() {
            warn!(path = %self.path, %field, "address book data is incomplete");
            return Err(StorageError::IncompleteData {
                path: self.path.clone(),
                field,
            });
        }

        let address_book = loaded.to_model_type().map_err(|source| {
            warn!(path = %self.path, error = %source, "address book contains illegal values");
            StorageError::IllegalValue {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(path = %self.path, persons = address_book.len(), "loaded address book");
        Ok(address_book)
    }

    fn save(&self, address_book: &AddressBook) -> Result<(), StorageError> {
        let adapted = AdaptedAddressBook::from(address_book);

        let path = Path::new(&self.path);
        create_file_parent(path).map_err(|e| self.io_error(e))?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| self.io_error(e))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &adapted)
            .map_err(|e| self.io_error(e.into()))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        debug!(path = %self.path, persons = address_book.len(), "saved address book");
        Ok(())
    }

    fn get_path(&self) -> &str {
        &self.path
    }
}
