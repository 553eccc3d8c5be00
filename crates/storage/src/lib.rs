//! ordstore Storage - Row storage layer for the ordstore row store.
//!
//! This crate provides the leaf of the store:
//!
//! - `RowStore`: append-only, row-id-keyed table of positional tuples
//! - `Predicate`: equality conjunction over named columns
//!
//! The row store knows nothing about ordering; per-column indexes live in
//! `ordstore-index` and are maintained by the store that owns both.
//!
//! # Example
//!
//! ```rust
//! use ordstore_core::schema::Table;
//! use ordstore_core::Value;
//! use ordstore_storage::{Predicate, RowStore};
//!
//! let table = Table::from_names("people", &["id", "name", "age"]).unwrap();
//! let mut store = RowStore::new(table);
//!
//! store.insert(vec![Value::from(1i64), Value::from("Alice"), Value::from(30i64)]).unwrap();
//! store.insert(vec![Value::from(2i64), Value::from("Bob"), Value::from(25i64)]).unwrap();
//!
//! let thirty = Predicate::new().and("age", 30i64);
//! assert_eq!(store.filter(&thirty).unwrap(), vec![1]);
//! ```

#![no_std]

extern crate alloc;

pub mod predicate;
pub mod row_store;

pub use predicate::Predicate;
pub use row_store::RowStore;
