//! Adapters convert one field's value to and from bytes.
//!
//! The engines never look inside a value; whatever an adapter writes is appended
//! verbatim, and an adapter's `read` must consume exactly what its `write` produced,
//! because nothing in the stream delimits one field from the next.

mod binding;
mod contract;
mod element_type;

pub use binding::*;
pub use contract::*;
pub use element_type::*;
