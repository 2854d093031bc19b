//! The demonstration scenario run by the `address-book` binary.
//!
//! Builds a two-contact book, edits one phone, looks one up, deletes a
//! contact and writes each intermediate state to `out`.

use crate::error::{DemoError, DemoResult};
use crate::models::{AddressBook, EditPolicy, Record};
use std::io::Write;

/// Run the scenario, writing the report to `out`.
///
/// Returns the final state of the book.
pub fn run<W: Write>(out: &mut W, policy: EditPolicy) -> DemoResult<AddressBook> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    writeln!(out, "Initial state of the address book:")?;
    write_book(out, &book)?;

    let john = book
        .find_mut("John")
        .ok_or_else(|| DemoError::MissingContact("John".to_string()))?;
    john.edit_phone_with(policy, "1234567890", "1112223333")?;

    writeln!(out, "\nAfter editing John's phone:")?;
    writeln!(out, "{}", john)?;

    if let Some(phone) = john.find_phone("5555555555") {
        writeln!(out, "\nFound phone for John: {}", phone)?;
    }

    book.delete("Jane");

    writeln!(out, "\nAddress book after deleting Jane:")?;
    write_book(out, &book)?;

    tracing::info!(records = book.len(), "Demonstration finished");
    Ok(book)
}

fn write_book<W: Write>(out: &mut W, book: &AddressBook) -> DemoResult<()> {
    for record in book {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
