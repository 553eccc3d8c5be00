//! ordstore Index - Per-column ordered indexes.
//!
//! Every column of a store keeps one ordered index: the column's row ids
//! sorted by value, equal values ordered by ascending row id. This crate
//! provides:
//!
//! - `OrderedIndex`: the incremental insert / ordered read contract
//! - `BTreeIndex`: arena B+Tree, logarithmic search and splice
//! - `SortedVecIndex`: single sorted vector, logarithmic search, linear splice
//! - `ColumnIndex`: runtime choice between the two over `Value` keys
//! - `projection`: filtered projection and rank tables for tie-break merges
//!
//! # Example
//!
//! ```rust
//! use ordstore_index::{BTreeIndex, OrderedIndex};
//!
//! let mut ages: BTreeIndex<i64> = BTreeIndex::new(64);
//! ages.insert_sorted(1, 30).unwrap();
//! ages.insert_sorted(2, 25).unwrap();
//! ages.insert_sorted(3, 30).unwrap();
//! ages.insert_sorted(4, 25).unwrap();
//!
//! assert_eq!(ages.ordered_row_ids(), vec![2, 4, 1, 3]);
//! assert_eq!(ages.get(&30), vec![1, 3]);
//! ```

#![no_std]

extern crate alloc;

pub mod btree;
pub mod column;
pub mod projection;
pub mod sorted;
pub mod stats;
pub mod traits;

pub use btree::{BTreeIndex, DEFAULT_ORDER};
pub use column::{ColumnIndex, IndexKind};
pub use projection::{project, RankTable, RowIdSet};
pub use sorted::SortedVecIndex;
pub use stats::IndexStats;
pub use traits::{IndexError, OrderedIndex};
