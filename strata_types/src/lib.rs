pub mod adapter;
pub mod error;
pub mod header;
pub mod io_utils;
pub mod schema;

pub use error::*;
pub use header::*;
