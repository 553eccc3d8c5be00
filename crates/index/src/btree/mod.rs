//! B+Tree ordered index for ordstore.
//!
//! This module provides an arena-allocated B+Tree whose leaf chain is the
//! maintained order of a column.

mod iter;
mod node;
mod tree;

pub use iter::BTreeIterator;
pub use node::{Node, NodeId};
pub use tree::{BTreeIndex, DEFAULT_ORDER};
