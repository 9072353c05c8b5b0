pub use crate::cli::{command, run_app};
pub use crate::domain::{Address, AddressBook, Email, Name, Person, Phone, Tag};
pub use crate::errors::{AppError, DuplicatePersonError, IllegalValueError, StorageError};
pub use crate::storage::{
    AdaptedAddressBook, DEFAULT_STORAGE_FILEPATH, MemoryStorage, Storage, StorageFile,
    open_storage,
};
