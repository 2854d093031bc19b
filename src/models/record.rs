//! Record model representing one contact in the address book.

use crate::domain::{Name, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How [`Record::edit_phone_with`] treats the replacement number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPolicy {
    /// Replace the payload as given, like [`Record::edit_phone`].
    #[default]
    Unchecked,

    /// Validate the replacement first, like [`Record::edit_phone_validated`].
    Validated,
}

/// A contact: one name and an ordered list of phone numbers.
///
/// Phones keep insertion order and may repeat. The name is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not ten digits.
    /// The phone list is left untouched in that case.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone).map_err(|e| {
            tracing::warn!(contact = %self.name, error = %e, "Rejected phone number");
            e
        })?;

        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`.
    ///
    /// Returns how many entries were removed; zero is not an error.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();

        if removed > 0 {
            tracing::debug!(contact = %self.name, phone = %phone, removed, "Phone removed");
        }
        removed
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is stored as given, without the ten-digit check that
    /// [`add_phone`](Self::add_phone) applies. Use
    /// [`edit_phone_validated`](Self::edit_phone_validated) for the strict
    /// behavior.
    ///
    /// Returns `true` if an entry was replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> bool {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                phone.replace_unchecked(new);
                tracing::debug!(contact = %self.name, old = %old, new = %new, "Phone edited");
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with a validated `new`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is not ten digits,
    /// whether or not `old` is present. The record is unchanged on error.
    pub fn edit_phone_validated(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let new = PhoneNumber::new(new)?;
        Ok(self.edit_phone(old, new.as_str()))
    }

    /// Edit a phone using the given policy.
    pub fn edit_phone_with(
        &mut self,
        policy: EditPolicy,
        old: &str,
        new: &str,
    ) -> Result<bool, ValidationError> {
        match policy {
            EditPolicy::Unchecked => Ok(self.edit_phone(old, new)),
            EditPolicy::Validated => self.edit_phone_validated(old, new),
        }
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
