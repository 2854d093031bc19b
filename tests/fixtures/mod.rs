//! Shared fixtures for the integration tests.

use address_book::{AddressBook, Record};

/// Build a record with the given phones, panicking on invalid input.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone(phone)
            .unwrap_or_else(|e| panic!("fixture phone {:?} rejected: {}", phone, e));
    }
    record
}

/// The two-contact book used throughout: John and Jane.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));
    book
}

/// Phone payloads of a record as plain strings.
pub fn phone_strs(record: &Record) -> Vec<String> {
    record.phones().iter().map(|p| p.to_string()).collect()
}
