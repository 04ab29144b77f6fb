//! A [`TypeSchema`] lists, in a fixed order, the fields of one type that get persisted,
//! together with each field's adapter and [`ValidityWindow`].
//!
//! The stream carries no field identifiers, so this order *is* the format:
//! the code that writes and the code that reads must declare the same fields in the same order.
//! Fields that are not declared are not persisted.

mod access;
mod field;
mod type_schema;
mod window;

pub use field::*;
pub use type_schema::*;
pub use window::*;
