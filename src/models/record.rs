//! Record model: one contact and its phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name plus an ordered list of phone numbers.
///
/// Duplicate numbers are allowed. Every stored number has passed
/// [`Phone::new`] validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `number` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the record
    /// untouched if `number` is not a valid phone.
    pub fn add_phone(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(index) = self.position(number) {
            self.phones.remove(index);
        }
    }

    /// Replace the phone equal to `old` with `new`.
    ///
    /// The old entry is dropped and the new one goes to the end of the list.
    /// `old` is matched verbatim and never validated. When `old` is not on
    /// the record nothing happens, even if `new` is malformed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `old` was found but `new`
    /// is not a valid phone. The old entry is already gone at that point.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> Result<(), ValidationError> {
        let Some(index) = self.position(old) else {
            return Ok(());
        };

        self.phones.remove(index);
        self.phones.push(Phone::new(new)?);
        Ok(())
    }

    /// Find the phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == number)
    }

    /// Phones joined with `separator`, in insertion order.
    pub fn join_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn position(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.join_phones("; ")
        )
    }
}
