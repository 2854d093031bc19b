//! PhoneNumber value object.

use super::errors::ValidationError;
use super::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ASCII digits only; `\d` would also admit other Unicode digit classes.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// A valid number is exactly ten ASCII decimal digits with no separators,
/// spaces or leading `+`. Input is never trimmed or reformatted.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(PhoneNumber::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(Value);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(Value::new(phone)))
    }

    /// Check whether a raw string would be accepted by [`PhoneNumber::new`].
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Borrow the underlying field value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }

    /// Overwrite the stored number without validation.
    ///
    /// Only [`Record::edit_phone`](crate::models::Record::edit_phone) reaches
    /// this; it is the one place where a stored number may stop matching the
    /// ten-digit rule.
    pub(crate) fn replace_unchecked(&mut self, phone: impl Into<String>) -> String {
        self.0.replace(phone)
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
        assert!(PhoneNumber::new("123456789a").is_err());
        assert!(PhoneNumber::new("123-456-78").is_err());
        assert!(PhoneNumber::new(" 1234567890").is_err());
        assert!(PhoneNumber::new("1234567890\n").is_err());
        assert!(PhoneNumber::new("+123456789").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
        assert!(PhoneNumber::new("9876543210").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are decimal digits in Unicode but not accepted.
        assert!(PhoneNumber::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        let err = PhoneNumber::new("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
    }

    #[test]
    fn test_phone_from_str() {
        let phone: PhoneNumber = "5555555555".parse().unwrap();
        assert_eq!(phone.to_string(), "5555555555");
        assert!("555".parse::<PhoneNumber>().is_err());
    }

    #[test]
    fn test_phone_replace_unchecked() {
        let mut phone = PhoneNumber::new("1234567890").unwrap();
        let previous = phone.replace_unchecked("not a phone");
        assert_eq!(previous, "1234567890");
        assert_eq!(phone.as_str(), "not a phone");
    }

    #[test]
    fn test_phone_value_matches_payload() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.value(), &Value::new("1234567890"));
        assert_eq!(phone.value().as_str(), phone.as_str());
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("1112223333").unwrap();
        assert_eq!(format!("{}", phone), "1112223333");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"9876543210\"").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
