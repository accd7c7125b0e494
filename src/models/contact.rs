//! Contact model representing one person in the address book.

use crate::domain::{
    ContactField, EmailAddress, Locality, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unvalidated contact input, as read from JSON or collected from a form.
///
/// Convert with [`Contact::try_from`] to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

/// A validated address book entry.
///
/// Every field is checked when the contact is built and nothing can change
/// afterwards, so holding a `Contact` means holding valid data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactFields")]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    address: Locality,
    city: Locality,
    state: Locality,
    zip: ZipCode,
    phone: PhoneNumber,
    email: EmailAddress,
}

impl Contact {
    /// Build a contact, validating fields in order.
    ///
    /// Fields are checked as first name, last name, address, city, state,
    /// zip, phone, email. The first failure is returned and nothing is built.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::Contact;
    ///
    /// let contact = Contact::new(
    ///     "John", "Doe", "456 Avenue", "Delhi", "Delhi",
    ///     "110001", "9988776655", "john.doe@example.com",
    /// ).unwrap();
    /// assert_eq!(contact.full_name(), "John Doe");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new(ContactField::FirstName, first_name)?,
            last_name: PersonName::new(ContactField::LastName, last_name)?,
            address: Locality::new(ContactField::Address, address)?,
            city: Locality::new(ContactField::City, city)?,
            state: Locality::new(ContactField::State, state)?,
            zip: ZipCode::new(zip)?,
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn zip(&self) -> &str {
        self.zip.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Single-line rendering of every field.
    pub fn display_string(&self) -> String {
        format!(
            "{} {} | {}, {}, {} - {} | Phone: {} | Email: {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }

    /// True when both names match `other`'s, ignoring case.
    pub fn is_same_person(&self, other: &Contact) -> bool {
        self.first_name.matches(other.first_name())
            && self.last_name.matches(other.last_name())
    }

    /// True when `name` equals the first or the last name, ignoring case.
    pub fn answers_to(&self, name: &str) -> bool {
        self.first_name.matches(name) || self.last_name.matches(name)
    }

    /// True when the city equals `city`, ignoring case.
    pub fn in_city(&self, city: &str) -> bool {
        self.city.matches(city)
    }

    /// True when the state equals `state`, ignoring case.
    pub fn in_state(&self, state: &str) -> bool {
        self.state.matches(state)
    }
}

impl TryFrom<ContactFields> for Contact {
    type Error = ValidationError;

    fn try_from(fields: ContactFields) -> Result<Self, Self::Error> {
        Contact::new(
            fields.first_name,
            fields.last_name,
            fields.address,
            fields.city,
            fields.state,
            fields.zip,
            fields.phone,
            fields.email,
        )
    }
}

impl From<Contact> for ContactFields {
    fn from(contact: Contact) -> Self {
        Self {
            first_name: contact.first_name.into_inner(),
            last_name: contact.last_name.into_inner(),
            address: contact.address.into_inner(),
            city: contact.city.into_inner(),
            state: contact.state.into_inner(),
            zip: contact.zip.into_inner(),
            phone: contact.phone.into_inner(),
            email: contact.email.into_inner(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            first_name: "Samridhi".to_string(),
            last_name: "Singh".to_string(),
            address: "123 Street".to_string(),
            city: "Orai".to_string(),
            state: "Uttar Pradesh".to_string(),
            zip: "250002".to_string(),
            phone: "9876543210".to_string(),
            email: "samridhi@example.com".to_string(),
        }
    }

    #[test]
    fn test_contact_valid() {
        let contact = Contact::try_from(fields()).unwrap();
        assert_eq!(contact.full_name(), "Samridhi Singh");
        assert_eq!(contact.city(), "Orai");
        assert_eq!(contact.zip(), "250002");
    }

    #[test]
    fn test_display_string_includes_every_field() {
        let contact = Contact::try_from(fields()).unwrap();
        assert_eq!(
            contact.display_string(),
            "Samridhi Singh | 123 Street, Orai, Uttar Pradesh - 250002 | Phone: 9876543210 | Email: samridhi@example.com"
        );
        assert_eq!(contact.to_string(), contact.display_string());
    }

    #[test]
    fn test_first_failure_wins() {
        // zip and phone are both bad; zip is validated first
        let mut input = fields();
        input.zip = "12345".to_string();
        input.phone = "1234567890".to_string();
        let err = Contact::try_from(input).unwrap_err();
        assert_eq!(err.field, ContactField::Zip);
    }

    fn failing_field(break_it: impl FnOnce(&mut ContactFields)) -> ContactField {
        let mut input = fields();
        break_it(&mut input);
        Contact::try_from(input).unwrap_err().field
    }

    #[test]
    fn test_each_field_reports_itself() {
        assert_eq!(failing_field(|f| f.first_name = "sam".into()), ContactField::FirstName);
        assert_eq!(failing_field(|f| f.last_name = "Si".into()), ContactField::LastName);
        assert_eq!(failing_field(|f| f.address = "1 A".into()), ContactField::Address);
        assert_eq!(failing_field(|f| f.city = "Ora".into()), ContactField::City);
        assert_eq!(failing_field(|f| f.state = "UP".into()), ContactField::State);
        assert_eq!(failing_field(|f| f.zip = "012345".into()), ContactField::Zip);
        assert_eq!(failing_field(|f| f.phone = "5876543210".into()), ContactField::Phone);
        assert_eq!(
            failing_field(|f| f.email = "samridhi.example.com".into()),
            ContactField::Email
        );
    }

    #[test]
    fn test_is_same_person_ignores_case() {
        let a = Contact::try_from(fields()).unwrap();
        let mut other = fields();
        other.first_name = "SAMRIDHI".to_string();
        other.last_name = "SINGH".to_string();
        other.city = "Delhi".to_string();
        let b = Contact::try_from(other).unwrap();
        assert!(a.is_same_person(&b));
    }

    #[test]
    fn test_answers_to_first_or_last() {
        let contact = Contact::try_from(fields()).unwrap();
        assert!(contact.answers_to("samridhi"));
        assert!(contact.answers_to("SINGH"));
        assert!(!contact.answers_to("Samridhi Singh"));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let contact = Contact::try_from(fields()).unwrap();
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["firstName"], "Samridhi");
        assert_eq!(json["zip"], "250002");
    }

    #[test]
    fn test_deserialization_validates() {
        let contact = Contact::try_from(fields()).unwrap();
        let json = serde_json::to_string(&contact).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);

        let bad = json.replace("250002", "25000");
        let result: Result<Contact, _> = serde_json::from_str(&bad);
        assert!(result.is_err());
    }
}
