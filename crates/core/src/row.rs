//! Row structure for ordstore.
//!
//! This module defines the `Row` struct which represents a single stored row.
//! Row ids are assigned by the owning row store and never reused.

use crate::value::Value;
use alloc::vec::Vec;

/// Identifier of a stored row, unique within one store.
pub type RowId = u64;

/// The id handed to the first row inserted into a store.
pub const FIRST_ROW_ID: RowId = 1;

/// One stored tuple: positional values plus the id the store assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    id: RowId,
    values: Vec<Value>,
}

impl Row {
    /// Creates a row. Ids are normally assigned by `RowStore::insert`.
    pub fn new(id: RowId, values: Vec<Value>) -> Self {
        Self { id, values }
    }

    /// Returns the row ID.
    #[inline]
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Returns the values in column order.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the row and returns its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Gets the value at a column position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
