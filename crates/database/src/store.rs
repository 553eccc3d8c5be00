//! Store - the single-table row store.
//!
//! This module provides the `Store` struct, which owns one row store and one
//! ordered index per column. Every insert appends the row, then places its id
//! into every column index; every query filters the row store and orders the
//! candidates through the indexes.

use crate::config::StoreConfig;
use crate::result::ResultRow;
use ordstore_core::schema::Table;
use ordstore_core::{Error, Result, RowId, Value};
use ordstore_index::{ColumnIndex, IndexError, IndexStats, OrderedIndex};
use ordstore_query::{Query, QueryPlan, QueryRunner};
use ordstore_storage::{Predicate, RowStore};
use std::sync::Arc;
use tracing::{debug, trace};

/// An in-memory single-table row store with per-column ordered indexes.
///
/// # Example
///
/// ```rust
/// use ordstore_database::{Query, Store};
/// use ordstore_core::Value;
///
/// let mut store = Store::new(&["id", "name", "age"]).unwrap();
/// store.insert(vec![1i64.into(), "Alice".into(), 30i64.into()]).unwrap();
/// store.insert(vec![2i64.into(), "Bob".into(), 25i64.into()]).unwrap();
///
/// let rows = store.query(&Query::new().order_by("age")).unwrap();
/// assert_eq!(rows[0].get("name"), Some(&Value::from("Bob")));
/// ```
#[derive(Debug)]
pub struct Store {
    rows: RowStore,
    indexes: Vec<ColumnIndex>,
    columns: Arc<[String]>,
    config: StoreConfig,
}

impl Store {
    /// Creates a store over untyped columns with the default configuration.
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Result<Self> {
        Self::with_columns(columns, StoreConfig::default())
    }

    /// Creates a store over untyped columns, named by `config.table_name()`.
    pub fn with_columns<S: AsRef<str>>(columns: &[S], config: StoreConfig) -> Result<Self> {
        let table = Table::from_names(config.table_name(), columns)?;
        Ok(Self::with_config(table, config))
    }

    /// Creates a store for a full table schema.
    ///
    /// Typed columns in the schema reject values of another type on insert.
    pub fn with_config(schema: Table, config: StoreConfig) -> Self {
        let columns: Arc<[String]> = schema.column_names().map(String::from).collect();
        let indexes = (0..schema.column_count())
            .map(|_| ColumnIndex::new(config.index_kind()))
            .collect();

        debug!(
            table = schema.name(),
            columns = schema.column_count(),
            index_kind = ?config.index_kind(),
            "store created"
        );

        Self {
            rows: RowStore::new(schema),
            indexes,
            columns,
            config,
        }
    }

    /// Returns the table schema.
    pub fn schema(&self) -> &Table {
        self.rows.schema()
    }

    /// Returns the column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inserts a positional tuple and returns its row id.
    ///
    /// Fails with a schema error, leaving the store unchanged, when the tuple
    /// does not fit the schema.
    pub fn insert(&mut self, values: Vec<Value>) -> Result<RowId> {
        let row_id = self.rows.insert(values)?;
        self.index_row(row_id)?;
        trace!(row_id, "row inserted");
        Ok(row_id)
    }

    /// Inserts several tuples, all or nothing.
    ///
    /// Every tuple is validated before the first one is stored, so a schema
    /// error leaves the store unchanged.
    pub fn insert_many<I>(&mut self, rows: I) -> Result<Vec<RowId>>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        let rows: Vec<Vec<Value>> = rows.into_iter().collect();
        for values in &rows {
            self.rows.validate(values)?;
        }
        rows.into_iter().map(|values| self.insert(values)).collect()
    }

    /// Places a stored row's id into every column index.
    fn index_row(&mut self, row_id: RowId) -> Result<()> {
        let row = self.rows.get(row_id)?;
        for (column, (index, value)) in self.indexes.iter_mut().zip(row.values()).enumerate() {
            index
                .insert_sorted(row_id, value.clone())
                .map_err(|e| index_error(&self.columns[column], e))?;
        }
        Ok(())
    }

    /// Gets a row by id.
    pub fn get(&self, row_id: RowId) -> Result<ResultRow> {
        let row = self.rows.get(row_id)?;
        Ok(ResultRow::new(
            row.id(),
            Arc::clone(&self.columns),
            row.values().to_vec(),
        ))
    }

    /// Runs a query and materializes the result rows.
    pub fn query(&self, query: &Query) -> Result<Vec<ResultRow>> {
        self.query_ids(query)?
            .into_iter()
            .map(|row_id| self.get(row_id))
            .collect()
    }

    /// Runs a query built from an optional filter and an order-by list.
    pub fn query_with<S: AsRef<str>>(
        &self,
        filter: Option<Predicate>,
        order_by: &[S],
    ) -> Result<Vec<ResultRow>> {
        self.query(&Query::from_parts(filter, order_by))
    }

    /// Runs a query and returns only the row ids, in result order.
    pub fn query_ids(&self, query: &Query) -> Result<Vec<RowId>> {
        let plan = QueryPlan::resolve(query, self.rows.schema())?;
        QueryRunner::new(&self.rows, &self.indexes).run(&plan)
    }

    /// Returns a column's maintained order of row ids.
    pub fn ordered_row_ids(&self, column: &str) -> Result<Vec<RowId>> {
        Ok(self.column_index(column)?.ordered_row_ids())
    }

    /// Returns the statistics of a column's index.
    pub fn index_stats(&self, column: &str) -> Result<IndexStats> {
        Ok(*self.column_index(column)?.stats())
    }

    fn column_index(&self, column: &str) -> Result<&ColumnIndex> {
        let position = self.rows.schema().resolve_column(column)?;
        self.indexes
            .get(position)
            .ok_or_else(|| Error::index_corrupted(column, "column has no index"))
    }

    /// Checks every column index against the stored rows.
    ///
    /// Each index must hold every row id exactly once, under the row's current
    /// value, sorted by `(value, row_id)`.
    pub fn verify_indexes(&self) -> Result<()> {
        for (position, name) in self.columns.iter().enumerate() {
            let index = self
                .indexes
                .get(position)
                .ok_or_else(|| Error::index_corrupted(name.as_str(), "column has no index"))?;
            self.verify_index(position, name, index)?;
        }
        Ok(())
    }

    fn verify_index(&self, position: usize, name: &str, index: &ColumnIndex) -> Result<()> {
        let corrupted = |message: String| Error::index_corrupted(name, message);

        if index.len() != self.rows.len() {
            return Err(corrupted(format!(
                "index holds {} row ids, store holds {}",
                index.len(),
                self.rows.len()
            )));
        }

        let mut seen = vec![false; self.rows.len()];
        let mut previous: Option<(&Value, RowId)> = None;
        for (key, row_id) in index.iter() {
            let stored = self
                .rows
                .value(row_id, position)
                .map_err(|_| corrupted(format!("unknown row id {}", row_id)))?;
            if stored != key {
                return Err(corrupted(format!("stale key for row {}", row_id)));
            }

            let slot = (row_id - ordstore_core::FIRST_ROW_ID) as usize;
            if std::mem::replace(&mut seen[slot], true) {
                return Err(corrupted(format!("row {} indexed twice", row_id)));
            }

            if let Some(prev) = previous {
                if prev >= (key, row_id) {
                    return Err(corrupted(format!("row {} out of order", row_id)));
                }
            }
            previous = Some((key, row_id));
        }
        Ok(())
    }
}

fn index_error(column: &str, err: IndexError) -> Error {
    Error::index_corrupted(column, err.to_string())
}
