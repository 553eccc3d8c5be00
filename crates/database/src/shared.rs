//! Thread-safe store handle.
//!
//! One `RwLock` guards the whole store. An insert holds the write lock while
//! the row is appended and every column index is updated, so a reader never
//! sees a row that is missing from any index. Queries share the read lock.

use crate::result::ResultRow;
use crate::store::Store;
use ordstore_core::{Result, RowId, Value};
use ordstore_query::Query;
use ordstore_storage::Predicate;
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// A cloneable, thread-safe handle to a [`Store`].
///
/// Clones share the same underlying store.
#[derive(Clone, Debug)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    /// Wraps a store.
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Inserts a tuple under the write lock.
    pub fn insert(&self, values: Vec<Value>) -> Result<RowId> {
        self.inner.write().insert(values)
    }

    /// Inserts several tuples under one write lock, all or nothing.
    pub fn insert_many<I>(&self, rows: I) -> Result<Vec<RowId>>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        self.inner.write().insert_many(rows)
    }

    /// Gets a row under the read lock.
    pub fn get(&self, row_id: RowId) -> Result<ResultRow> {
        self.inner.read().get(row_id)
    }

    /// Runs a query under the read lock.
    pub fn query(&self, query: &Query) -> Result<Vec<ResultRow>> {
        self.inner.read().query(query)
    }

    /// Runs a query built from parts under the read lock.
    pub fn query_with<S: AsRef<str>>(
        &self,
        filter: Option<Predicate>,
        order_by: &[S],
    ) -> Result<Vec<ResultRow>> {
        self.inner.read().query_with(filter, order_by)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Locks the store for reading.
    ///
    /// Inserts block until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read()
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self::new(store)
    }
}
