pub mod adapted;
pub mod file;
pub mod memory;

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AddressBook;
use crate::errors::StorageError;

pub use adapted::{AdaptedAddressBook, AdaptedContactDetail, AdaptedPerson};
pub use file::StorageFile;
pub use memory::MemoryStorage;

/// Default file path used if the user doesn't provide the file name.
pub const DEFAULT_STORAGE_FILEPATH: &str = "addressbook.txt";

/// Backing medium for a whole address book.
pub trait Storage {
    fn load(&self) -> Result<AddressBook, StorageError>;

    fn save(&self, address_book: &AddressBook) -> Result<(), StorageError>;

    fn get_path(&self) -> &str;
}

/// Opens the file storage at `path`, or at [`DEFAULT_STORAGE_FILEPATH`] when none is given.
pub fn open_storage(path: Option<&str>) -> Result<Box<dyn Storage>, StorageError> {
    let storage = match path {
        Some(path) => StorageFile::with_path(path)?,
        None => StorageFile::new()?,
    };
    Ok(Box::new(storage))
}

pub fn create_file_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
