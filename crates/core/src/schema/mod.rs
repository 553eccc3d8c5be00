//! Schema module for ordstore.
//!
//! A schema is a fixed, ordered list of named columns, decided once when the
//! table is built.

mod column;
mod table;

pub use column::Column;
pub use table::{Table, TableBuilder};
