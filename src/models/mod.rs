//! Data models for the address book.
//!
//! - [`Record`]: one contact, a name plus its phone numbers
//! - [`AddressBook`]: records keyed by name

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::{EditPolicy, Record};
