//! Domain value objects and types.
//!
//! This module contains the field types a contact is built from: a generic
//! [`Value`] holder and the [`Name`] and [`PhoneNumber`] value objects
//! composed over it. Phone numbers are validated at construction time so an
//! invalid number cannot be added to a record.

pub mod errors;
pub mod name;
pub mod phone;
pub mod value;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
pub use value::Value;
