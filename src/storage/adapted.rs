//! On-disk shape of the address book.
//!
//! Every field that the domain requires is an `Option` here so that a document
//! with a missing element still deserializes. Completeness is checked with
//! [`AdaptedAddressBook::is_any_required_field_missing`] before
//! [`AdaptedAddressBook::to_model_type`] re-validates every value.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, AddressBook, Email, Name, Person, Phone, Tag};
use crate::errors::IllegalValueError;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptedAddressBook {
    #[serde(default)]
    pub persons: Vec<AdaptedPerson>,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptedPerson {
    pub name: Option<String>,
    pub phone: Option<AdaptedContactDetail>,
    pub email: Option<AdaptedContactDetail>,
    pub address: Option<AdaptedContactDetail>,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedContactDetail {
    pub value: Option<String>,

    #[serde(default)]
    pub is_private: bool,
}

impl AdaptedContactDetail {
    fn new(value: &str, is_private: bool) -> Self {
        Self {
            value: Some(value.to_string()),
            is_private,
        }
    }

    fn value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

impl AdaptedAddressBook {
    pub fn is_any_required_field_missing(&self) -> bool {
        self.first_missing_field().is_some()
    }

    /// Location of the first absent required field, e.g. `persons[2].phone.value`.
    pub fn first_missing_field(&self) -> Option<String> {
        self.persons.iter().enumerate().find_map(|(idx, person)| {
            person
                .first_missing_field()
                .map(|field| format!("persons[{idx}].{field}"))
        })
    }

    /// Converts into the domain model, validating every value on the way.
    ///
    /// Callers are expected to check completeness first. An absent value that
    /// reaches this point is rejected as illegal by its domain constraint.
    pub fn to_model_type(&self) -> Result<AddressBook, IllegalValueError> {
        let persons = self
            .persons
            .iter()
            .map(AdaptedPerson::to_model_type)
            .collect::<Result<Vec<Person>, _>>()?;
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::new(tag))
            .collect::<Result<Vec<Tag>, _>>()?;

        Ok(AddressBook::with_data(persons, tags)?)
    }
}

impl AdaptedPerson {
    pub fn is_any_required_field_missing(&self) -> bool {
        self.first_missing_field().is_some()
    }

    fn first_missing_field(&self) -> Option<String> {
        if self.name.is_none() {
            return Some("name".to_string());
        }

        let details = [
            ("phone", &self.phone),
            ("email", &self.email),
            ("address", &self.address),
        ];
        details.into_iter().find_map(|(field, detail)| match detail {
            None => Some(field.to_string()),
            Some(detail) if detail.value.is_none() => Some(format!("{field}.value")),
            Some(_) => None,
        })
    }

    pub fn to_model_type(&self) -> Result<Person, IllegalValueError> {
        let phone = self.phone.clone().unwrap_or_default();
        let email = self.email.clone().unwrap_or_default();
        let address = self.address.clone().unwrap_or_default();

        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::new(tag))
            .collect::<Result<Vec<Tag>, _>>()?;

        Ok(Person::new(
            Name::new(self.name.as_deref().unwrap_or_default())?,
            Phone::new(phone.value(), phone.is_private)?,
            Email::new(email.value(), email.is_private)?,
            Address::new(address.value(), address.is_private)?,
        )
        .with_tags(tags))
    }
}

impl From<&Person> for AdaptedPerson {
    fn from(person: &Person) -> Self {
        AdaptedPerson {
            name: Some(person.name.as_str().to_string()),
            phone: Some(AdaptedContactDetail::new(
                person.phone.value(),
                person.phone.is_private(),
            )),
            email: Some(AdaptedContactDetail::new(
                person.email.value(),
                person.email.is_private(),
            )),
            address: Some(AdaptedContactDetail::new(
                person.address.value(),
                person.address.is_private(),
            )),
            tags: person.tags.iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}

impl From<&AddressBook> for AdaptedAddressBook {
    fn from(book: &AddressBook) -> Self {
        AdaptedAddressBook {
            persons: book.persons().iter().map(AdaptedPerson::from).collect(),
            tags: book.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_person() -> AdaptedPerson {
        AdaptedPerson {
            name: Some("Alice Pauline".to_string()),
            phone: Some(AdaptedContactDetail::new("85355255", false)),
            email: Some(AdaptedContactDetail::new("alice@example.com", true)),
            address: Some(AdaptedContactDetail::new("123, Jurong West Ave 6", false)),
            tags: vec!["friends".to_string()],
        }
    }

    #[test]
    fn empty_book_has_nothing_missing() {
        let adapted = AdaptedAddressBook::default();
        assert!(!adapted.is_any_required_field_missing());
        assert_eq!(adapted.to_model_type(), Ok(AddressBook::new()));
    }

    #[test]
    fn detects_missing_fields_in_any_person() {
        let mut missing_email = complete_person();
        missing_email.email = None;

        let mut missing_value = complete_person();
        missing_value.address = Some(AdaptedContactDetail {
            value: None,
            is_private: true,
        });

        let adapted = AdaptedAddressBook {
            persons: vec![complete_person(), missing_value, missing_email],
            tags: vec![],
        };

        assert!(adapted.is_any_required_field_missing());
        assert_eq!(
            adapted.first_missing_field().as_deref(),
            Some("persons[1].address.value")
        );
        assert!(!adapted.persons[0].is_any_required_field_missing());
        assert!(adapted.persons[2].is_any_required_field_missing());
    }

    #[test]
    fn missing_tags_are_not_required() -> Result<(), serde_json::Error> {
        let adapted: AdaptedAddressBook = serde_json::from_str(
            r#"{"persons":[{"name":"Uche","phone":{"value":"0123456789"},
                "email":{"value":"uche@gmail.com"},"address":{"value":"Lagos"}}]}"#,
        )?;

        assert!(!adapted.is_any_required_field_missing());
        assert!(adapted.persons[0].tags.is_empty());
        assert!(!adapted.persons[0].phone.as_ref().is_some_and(|p| p.is_private));
        Ok(())
    }

    #[test]
    fn conversion_names_the_failing_constraint() {
        let mut bad_phone = complete_person();
        bad_phone.phone = Some(AdaptedContactDetail::new("not-a-number", false));

        let adapted = AdaptedAddressBook {
            persons: vec![complete_person(), bad_phone],
            tags: vec![],
        };
        let err = adapted.to_model_type().unwrap_err();
        assert_eq!(err, IllegalValueError::Phone("not-a-number".to_string()));

        let bad_tag = AdaptedAddressBook {
            persons: vec![],
            tags: vec!["best friends".to_string()],
        };
        assert_eq!(bad_tag.to_model_type().unwrap_err().constraint(), "tag");
    }

    #[test]
    fn duplicate_persons_are_illegal() {
        let adapted = AdaptedAddressBook {
            persons: vec![complete_person(), complete_person()],
            tags: vec![],
        };

        assert!(matches!(
            adapted.to_model_type(),
            Err(IllegalValueError::Duplicate(_))
        ));
    }

    #[test]
    fn converts_back_from_model() -> Result<(), IllegalValueError> {
        let adapted = AdaptedAddressBook {
            persons: vec![complete_person()],
            tags: vec!["colleagues".to_string()],
        };

        let book = adapted.to_model_type()?;
        let mut back = AdaptedAddressBook::from(&book);
        back.tags.sort();

        assert_eq!(back.persons, adapted.persons);
        assert_eq!(back.tags, vec!["colleagues", "friends"]);
        Ok(())
    }
}
