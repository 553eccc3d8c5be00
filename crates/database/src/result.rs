//! Materialized query results.

use ordstore_core::{RowId, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One returned row: its id plus its values, addressable by column name.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    id: RowId,
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl ResultRow {
    pub(crate) fn new(id: RowId, columns: Arc<[String]>, values: Vec<Value>) -> Self {
        Self {
            id,
            columns,
            values,
        }
    }

    /// Returns the row id.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Returns the values in schema order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the row and returns its values in schema order.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.values.get(index)
    }

    /// Iterates `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(String::as_str).zip(self.values.iter())
    }

    /// Copies the row into a column-to-value map.
    ///
    /// The row id is not part of the map; read it with [`ResultRow::id`].
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.iter()
            .map(|(column, value)| (column.to_string(), value.clone()))
            .collect()
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {{", self.id)?;
        for (i, (column, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", column, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> ResultRow {
        let columns: Arc<[String]> = vec!["id".to_string(), "name".to_string()].into();
        ResultRow::new(1, columns, vec![Value::Int64(1), Value::from("Alice")])
    }

    #[test]
    fn test_get_by_name() {
        let row = alice();
        assert_eq!(row.id(), 1);
        assert_eq!(row.get("name"), Some(&Value::from("Alice")));
        assert_eq!(row.get("age"), None);
    }

    #[test]
    fn test_iter_and_map() {
        let row = alice();
        let pairs: Vec<(&str, &Value)> = row.iter().collect();
        assert_eq!(pairs[0], ("id", &Value::Int64(1)));

        let map = row.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["name"], Value::from("Alice"));
    }

    #[test]
    fn test_display() {
        assert_eq!(alice().to_string(), r#"#1 {id: 1, name: "Alice"}"#);
    }
}
