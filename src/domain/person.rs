use std::collections::BTreeSet;
use std::fmt;

use crate::errors::IllegalValueError;
use crate::validation::{
    validate_address, validate_email, validate_name, validate_number, validate_tag,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, IllegalValueError> {
        let name = name.trim();
        if !validate_name(name) {
            return Err(IllegalValueError::Name(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number, optionally hidden from listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
    is_private: bool,
}

impl Phone {
    pub fn new(phone: &str, is_private: bool) -> Result<Self, IllegalValueError> {
        let phone = phone.trim();
        if !validate_number(phone) {
            return Err(IllegalValueError::Phone(phone.to_string()));
        }
        Ok(Self {
            value: phone.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
    is_private: bool,
}

impl Email {
    pub fn new(email: &str, is_private: bool) -> Result<Self, IllegalValueError> {
        let email = email.trim();
        if !validate_email(email) {
            return Err(IllegalValueError::Email(email.to_string()));
        }
        Ok(Self {
            value: email.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
    is_private: bool,
}

impl Address {
    pub fn new(address: &str, is_private: bool) -> Result<Self, IllegalValueError> {
        if !validate_address(address) {
            return Err(IllegalValueError::Address(address.to_string()));
        }
        Ok(Self {
            value: address.trim().to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: &str) -> Result<Self, IllegalValueError> {
        let tag = tag.trim();
        if !validate_tag(tag) {
            return Err(IllegalValueError::Tag(tag.to_string()));
        }
        Ok(Self(tag.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Person {
            name,
            phone,
            email,
            address,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Two persons are the same contact when name and phone number match,
    /// regardless of privacy flags or other details.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && self.phone.value() == other.phone.value()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn detail(value: &str, is_private: bool) -> &str {
            if is_private { "(private)" } else { value }
        }

        write!(
            f,
            "Name: {}\nPhone: {}\nEmail: {}\nAddress: {}",
            self.name.as_str(),
            detail(self.phone.value(), self.phone.is_private()),
            detail(self.email.value(), self.email.is_private()),
            detail(self.address.value(), self.address.is_private()),
        )?;

        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, "\nTags: {}", tags.join(", "))?;
        }
        Ok(())
    }
}
