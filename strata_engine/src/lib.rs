//! Encodes and decodes objects whose persisted layout evolves across versions.
//!
//! See [`strata_types::header`] for the framing,
//! and [`strata_types::schema`] for how a type declares what gets persisted.

mod deser;
mod registry;
mod ser;
mod versioned;

pub use deser::*;
pub use registry::*;
pub use ser::*;
pub use versioned::*;

pub use strata_types;
