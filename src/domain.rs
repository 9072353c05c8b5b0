pub mod address_book;
pub mod person;

pub use address_book::AddressBook;
pub use person::{Address, Email, Name, Person, Phone, Tag};
