//! Row storage for ordstore.
//!
//! This module provides the `RowStore` struct, the append-only table that maps
//! row ids to positional tuples and answers equality filters by scanning.

use crate::predicate::Predicate;
use alloc::vec::Vec;
use ordstore_core::schema::Table;
use ordstore_core::{Error, Result, Row, RowId, Value, FIRST_ROW_ID};

/// Row storage for a single table.
///
/// Row ids are assigned from `FIRST_ROW_ID` upwards without gaps, so the row
/// with id `n` lives at position `n - FIRST_ROW_ID`.
#[derive(Clone, Debug)]
pub struct RowStore {
    schema: Table,
    rows: Vec<Row>,
}

impl RowStore {
    /// Creates an empty row store for the given table schema.
    pub fn new(schema: Table) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    /// Returns the table schema.
    pub fn schema(&self) -> &Table {
        &self.schema
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the id the next inserted row will receive.
    pub fn next_row_id(&self) -> RowId {
        FIRST_ROW_ID + self.rows.len() as RowId
    }

    /// Checks a tuple against the schema without storing it.
    pub fn validate(&self, values: &[Value]) -> Result<()> {
        self.schema.check_row(values)
    }

    /// Inserts a tuple and returns its newly assigned row id.
    pub fn insert(&mut self, values: Vec<Value>) -> Result<RowId> {
        self.validate(&values)?;
        let row_id = self.next_row_id();
        self.rows.push(Row::new(row_id, values));
        Ok(row_id)
    }

    /// Gets a row by id.
    pub fn get(&self, row_id: RowId) -> Result<&Row> {
        row_id
            .checked_sub(FIRST_ROW_ID)
            .and_then(|offset| self.rows.get(offset as usize))
            .ok_or_else(|| Error::not_found(self.schema.name(), row_id))
    }

    /// Gets one value of a row by column position.
    pub fn value(&self, row_id: RowId, column: usize) -> Result<&Value> {
        let row = self.get(row_id)?;
        row.get(column).ok_or_else(|| {
            Error::arity_mismatch(self.schema.column_count(), row.len())
        })
    }

    /// Returns an iterator over all rows in row-id order.
    pub fn scan(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    /// Returns all row ids in ascending order.
    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(Row::id).collect()
    }

    /// Returns the ids of rows matching every term of the predicate, ascending.
    ///
    /// Unknown columns fail before any row is examined.
    pub fn filter(&self, predicate: &Predicate) -> Result<Vec<RowId>> {
        let bound = predicate.bind(&self.schema)?;
        if bound.is_empty() {
            return Ok(self.row_ids());
        }
        Ok(self
            .rows
            .iter()
            .filter(|row| bound.matches(row))
            .map(Row::id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use ordstore_core::schema::TableBuilder;
    use ordstore_core::DataType;

    fn people() -> RowStore {
        let mut store = RowStore::new(Table::from_names("people", &["id", "name", "age"]).unwrap());
        for (id, name, age) in [(1i64, "Alice", 30i64), (2, "Bob", 25), (3, "Charlie", 30), (4, "Alice", 25)] {
            store.insert(vec![id.into(), name.into(), age.into()]).unwrap();
        }
        store
    }

    #[test]
    fn test_row_store_insert_assigns_ids() {
        let mut store = RowStore::new(Table::from_names("t", &["a"]).unwrap());
        assert!(store.is_empty());
        assert_eq!(store.next_row_id(), FIRST_ROW_ID);
        assert_eq!(store.insert(vec![Value::Int64(7)]).unwrap(), 1);
        assert_eq!(store.insert(vec![Value::Int64(7)]).unwrap(), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_row_id(), 3);
    }

    #[test]
    fn test_row_store_arity_mismatch() {
        let mut store = people();
        let err = store.insert(vec![Value::Int64(5)]).unwrap_err();
        assert_eq!(err, Error::arity_mismatch(3, 1));
        assert_eq!(store.len(), 4);
        assert_eq!(store.next_row_id(), 5);
    }

    #[test]
    fn test_row_store_type_mismatch() {
        let schema = TableBuilder::new("typed")
            .unwrap()
            .add_column("age", DataType::Int64)
            .unwrap()
            .build()
            .unwrap();
        let mut store = RowStore::new(schema);
        assert!(store.insert(vec![Value::from("thirty")]).unwrap_err().is_schema_error());
        assert!(store.insert(vec![Value::Null]).is_ok());
    }

    #[test]
    fn test_row_store_get() {
        let store = people();
        let row = store.get(2).unwrap();
        assert_eq!(row.id(), 2);
        assert_eq!(row.get(1), Some(&Value::from("Bob")));
        assert_eq!(store.value(3, 2).unwrap(), &Value::Int64(30));
    }

    #[test]
    fn test_row_store_get_missing() {
        let store = people();
        assert!(store.get(0).unwrap_err().is_not_found());
        assert!(store.get(5).unwrap_err().is_not_found());
        assert_eq!(store.get(99).unwrap_err(), Error::not_found("people", 99));
    }

    #[test]
    fn test_row_store_scan_in_insertion_order() {
        let store = people();
        let ids: Vec<RowId> = store.scan().map(Row::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(store.row_ids(), ids);
    }

    #[test]
    fn test_row_store_filter() {
        let store = people();
        assert_eq!(store.filter(&Predicate::new()).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(
            store.filter(&Predicate::new().and("age", 30i64)).unwrap(),
            vec![1, 3]
        );
        assert_eq!(
            store
                .filter(&Predicate::new().and("age", 30i64).and("name", "Alice"))
                .unwrap(),
            vec![1]
        );
        assert!(store
            .filter(&Predicate::new().and("name", "Zed"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_row_store_filter_unknown_column() {
        let store = people();
        let err = store
            .filter(&Predicate::new().and("salary", 1i64))
            .unwrap_err();
        assert_eq!(err, Error::column_not_found("people", "salary"));
    }

    #[test]
    fn test_row_store_filter_is_type_strict() {
        let store = people();
        assert!(store
            .filter(&Predicate::new().and("age", 25i32))
            .unwrap()
            .is_empty());
    }
}
