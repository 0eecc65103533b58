//! Domain value objects and types.
//!
//! This module contains the string-backed fields a contact record is built
//! from. Phone numbers are validated at construction time so an invalid
//! number can never be stored.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
