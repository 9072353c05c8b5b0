use std::collections::BTreeSet;

use super::person::{Name, Person, Phone, Tag};
use crate::errors::DuplicatePersonError;

/// The in-memory contact list: a list of unique persons plus the master tag list.
///
/// Every tag carried by a person is also present in the master tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
    tags: BTreeSet<Tag>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an address book from already validated persons and tags.
    pub fn with_data(
        persons: impl IntoIterator<Item = Person>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<Self, DuplicatePersonError> {
        let mut book = AddressBook {
            persons: Vec::new(),
            tags: tags.into_iter().collect(),
        };
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), DuplicatePersonError> {
        if self.contains(&person) {
            return Err(DuplicatePersonError {
                name: person.name.as_str().to_string(),
                phone: person.phone.value().to_string(),
            });
        }
        self.tags.extend(person.tags.iter().cloned());
        self.persons.push(person);
        Ok(())
    }

    /// Removes the person with this name and phone number. Tags stay in the master list.
    pub fn remove_person(&mut self, name: &Name, phone: &Phone) -> Option<Person> {
        let index = self
            .persons
            .iter()
            .position(|p| &p.name == name && p.phone.value() == phone.value())?;
        Some(self.persons.remove(index))
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn clear(&mut self) {
        self.persons.clear();
        self.tags.clear();
    }
}
