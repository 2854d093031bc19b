//! Address Book - an in-memory contact book with validated phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Field value objects (`Value`, `Name`, `PhoneNumber`) and validation errors
//! - **models**: `Record` (one contact) and `AddressBook` (records keyed by name)
//! - **error**: Application-level error types
//! - **config**: Configuration from environment variables
//! - **demo**: The scenario run by the binary
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut john = Record::new("John");
//! john.add_phone("1234567890").unwrap();
//! john.add_phone("5555555555").unwrap();
//! book.add_record(john);
//!
//! let john = book.find_mut("John").unwrap();
//! john.edit_phone("1234567890", "1112223333");
//! assert_eq!(
//!     john.to_string(),
//!     "Contact name: John, phones: 1112223333; 5555555555"
//! );
//! ```

pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Name, PhoneNumber, ValidationError, Value};
pub use error::{ConfigError, DemoError};
pub use models::{AddressBook, EditPolicy, Record};
