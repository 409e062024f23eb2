use std::fmt;

use crate::errors::AppError;
use serde::Serialize;

/// A single address book entry.
///
/// Fields are private so a `Contact` cannot change once built. Phone and email
/// are free-form text; only the name is checked (it must not be blank).
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, AppError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "Contact name must not be empty".to_string(),
            ));
        }

        Ok(Contact {
            name,
            phone: phone.into(),
            email: email.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// ASCII case-insensitive comparison against the contact name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}

// TEST
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        assert!(matches!(
            Contact::new("", "555-1234", "a@example.com"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            Contact::new("   ", "555-1234", "a@example.com"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn phone_and_email_are_free_form() -> Result<(), AppError> {
        let contact = Contact::new("Alice", "call me maybe", "")?;

        assert_eq!(contact.phone(), "call me maybe");
        assert_eq!(contact.email(), "");
        Ok(())
    }

    #[test]
    fn name_matching_ignores_ascii_case() -> Result<(), AppError> {
        let contact = Contact::new("Bob Jones", "555-5678", "bob@example.com")?;

        assert!(contact.name_matches("bob jones"));
        assert!(contact.name_matches("BOB JONES"));
        assert!(!contact.name_matches("bob"));
        Ok(())
    }

    #[test]
    fn display_lists_every_field() -> Result<(), AppError> {
        let contact = Contact::new("Alice Smith", "555-1234", "alice@example.com")?;

        assert_eq!(
            contact.to_string(),
            "Name: Alice Smith, Phone: 555-1234, Email: alice@example.com"
        );
        Ok(())
    }
}
