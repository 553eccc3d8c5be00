//! Column definition for ordstore schemas.

use crate::error::{Error, Result};
use crate::types::DataType;
use crate::value::Value;
use alloc::string::String;

/// A column definition in a table schema.
#[derive(Clone, Debug)]
pub struct Column {
    /// Column name.
    name: String,
    /// Declared data type, if any. Untyped columns accept every value.
    data_type: Option<DataType>,
    /// Column position in the table (0-based).
    index: usize,
}

impl Column {
    /// Creates a typed column definition.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type: Some(data_type),
            index: 0,
        }
    }

    /// Creates a column without a declared type.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
            index: 0,
        }
    }

    /// Sets the column position.
    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared data type.
    #[inline]
    pub fn data_type(&self) -> Option<DataType> {
        self.data_type
    }

    /// Returns the column position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Checks that a value may be stored in this column.
    ///
    /// Null fits every column.
    pub fn check_value(&self, value: &Value) -> Result<()> {
        match (self.data_type, value.data_type()) {
            (Some(expected), Some(got)) if expected != got => {
                Err(Error::type_mismatch(self.name.clone(), expected, got))
            }
            _ => Ok(()),
        }
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.data_type == other.data_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = Column::new("id", DataType::Int64);
        assert_eq!(col.name(), "id");
        assert_eq!(col.data_type(), Some(DataType::Int64));
        assert_eq!(col.index(), 0);
    }

    #[test]
    fn test_untyped_column_accepts_anything() {
        let col = Column::untyped("misc");
        assert!(col.check_value(&Value::Int64(1)).is_ok());
        assert!(col.check_value(&Value::String("x".into())).is_ok());
        assert!(col.check_value(&Value::Null).is_ok());
    }

    #[test]
    fn test_typed_column_check() {
        let col = Column::new("age", DataType::Int64);
        assert!(col.check_value(&Value::Int64(30)).is_ok());
        assert!(col.check_value(&Value::Null).is_ok());

        let err = col.check_value(&Value::String("thirty".into())).unwrap_err();
        assert_eq!(
            err,
            Error::type_mismatch("age", DataType::Int64, DataType::String)
        );
    }
}
