//! ordstore - An in-memory single-table row store with ordered indexes.
//!
//! A [`Store`] keeps its rows in an append-only row store plus one ordered
//! index per column. Inserts splice the new row id into every index; queries
//! filter by column equality and order by any list of columns without
//! re-sorting the table.
//!
//! # Core Components
//!
//! - `Store`: construction, inserts, queries and index inspection
//! - `SharedStore`: `RwLock`-guarded handle for concurrent readers and writers
//! - `StoreConfig`: index structure, B+Tree order and table name
//! - `ResultRow`: one materialized result row
//! - `Query` / `Predicate`: query description, re-exported from the lower crates
//!
//! # Example
//!
//! ```rust
//! use ordstore_database::{Query, Store};
//! use ordstore_core::Value;
//!
//! let mut store = Store::new(&["id", "name", "age"]).unwrap();
//! store
//!     .insert_many(vec![
//!         vec![Value::from(1i64), Value::from("Alice"), Value::from(30i64)],
//!         vec![Value::from(2i64), Value::from("Bob"), Value::from(25i64)],
//!         vec![Value::from(3i64), Value::from("Charlie"), Value::from(30i64)],
//!         vec![Value::from(4i64), Value::from("Alice"), Value::from(25i64)],
//!     ])
//!     .unwrap();
//!
//! let ids: Vec<u64> = store
//!     .query(&Query::new().order_by("age").order_by("name"))
//!     .unwrap()
//!     .iter()
//!     .map(|row| row.id())
//!     .collect();
//! assert_eq!(ids, vec![4, 2, 1, 3]);
//! ```

pub mod config;
pub mod result;
pub mod shared;
pub mod store;

pub use config::StoreConfig;
pub use ordstore_core::{Error, ErrorKind, Result, RowId, Value};
pub use ordstore_index::{IndexKind, IndexStats};
pub use ordstore_query::Query;
pub use ordstore_storage::Predicate;
pub use result::ResultRow;
pub use shared::SharedStore;
pub use store::Store;
