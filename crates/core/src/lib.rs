//! ordstore Core - Core types and schema definitions for the ordstore row store.
//!
//! This crate provides the foundational types shared by every layer:
//!
//! - `DataType`: Supported column types (Boolean, Int32, Int64, Float64, String, DateTime, Bytes)
//! - `Value`: Totally ordered runtime values that can be stored and indexed
//! - `Row`: A tuple of values with a unique, immutable identifier
//! - `schema`: Fixed column-list schemas (`Column`, `Table`, `TableBuilder`)
//! - `Error`: Error types, classified into schema and not-found kinds
//!
//! # Example
//!
//! ```rust
//! use ordstore_core::{DataType, Value, Row};
//! use ordstore_core::schema::TableBuilder;
//!
//! let table = TableBuilder::new("people")
//!     .unwrap()
//!     .add_column("id", DataType::Int64)
//!     .unwrap()
//!     .add_column("name", DataType::String)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let row = Row::new(1, vec![
//!     Value::Int64(1),
//!     Value::String("Alice".into()),
//! ]);
//!
//! assert!(table.check_row(row.values()).is_ok());
//! assert_eq!(row.get(1), Some(&Value::String("Alice".into())));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;
pub mod schema;
mod types;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use row::{Row, RowId, FIRST_ROW_ID};
pub use types::DataType;
pub use value::Value;
