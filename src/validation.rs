use std::sync::LazyLock;

use regex::Regex;

// Patterns are fixed at compile time, a failure here is a programming error.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{N} ]+$").expect("name pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{3,15}$").expect("phone pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").expect("email pattern"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}]+$").expect("tag pattern"));

pub fn validate_name(name: &str) -> bool {
    // Letters, digits and spaces, but not only spaces
    !name.trim().is_empty() && NAME_RE.is_match(name)
}

pub fn validate_number(phone: &str) -> bool {
    // 3 to 15 digits, may begin with + signifying a country code
    PHONE_RE.is_match(phone)
}

pub fn validate_email(email: &str) -> bool {
    // Not more than 254 characters
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

pub fn validate_address(address: &str) -> bool {
    !address.trim().is_empty()
}

pub fn validate_tag(tag: &str) -> bool {
    TAG_RE.is_match(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(validate_name("Uche"));
        assert!(validate_name("John Doe 2nd"));
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
        assert!(!validate_name("O'Brien"));
        assert!(!validate_name("peter*"));
    }

    #[test]
    fn phone_numbers() {
        assert!(validate_number("911"));
        assert!(validate_number("08123456789"));
        assert!(validate_number("+2348123456789"));
        assert!(!validate_number("91"));
        assert!(!validate_number("phone"));
        assert!(!validate_number("0812 345 6789"));
        assert!(!validate_number("1234567890123456"));
    }

    #[test]
    fn emails() {
        assert!(validate_email("ucheuche@gmail.com"));
        assert!(validate_email("first.last@mail.example.org"));
        assert!(!validate_email("foo@bar"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("plainaddress"));
        assert!(!validate_email(""));
    }

    #[test]
    fn addresses_and_tags() {
        assert!(validate_address("123, Jurong West Ave 6, #08-111"));
        assert!(!validate_address(" "));

        assert!(validate_tag("friends"));
        assert!(validate_tag("gym2"));
        assert!(!validate_tag("best friend"));
        assert!(!validate_tag(""));
    }
}
