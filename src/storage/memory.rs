use std::cell::RefCell;

use super::Storage;
use crate::domain::AddressBook;
use crate::errors::StorageError;

/// Keeps the address book in memory. Nothing touches the filesystem.
#[derive(Debug)]
pub struct MemoryStorage {
    data: RefCell<AddressBook>,
    path: String,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(AddressBook::new()),
            path: "memory.txt".to_string(),
        }
    }

    pub fn with_book(address_book: AddressBook) -> Self {
        Self {
            data: RefCell::new(address_book),
            ..Self::new()
        }
    }

    pub fn snapshot(&self) -> AddressBook {
        self.data.borrow().clone()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<AddressBook, StorageError> {
        Ok(self.snapshot())
    }

    fn save(&self, address_book: &AddressBook) -> Result<(), StorageError> {
        *self.data.borrow_mut() = address_book.clone();
        Ok(())
    }

    fn get_path(&self) -> &str {
        &self.path
    }
}
