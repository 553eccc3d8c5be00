//! Error types for ordstore.

use crate::row::RowId;
use crate::types::DataType;
use alloc::string::String;

/// Result type alias for ordstore operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call referenced columns or shapes the schema does not have.
    Schema,
    /// The call referenced a row id that is not stored.
    NotFound,
    /// An internal invariant no longer holds.
    Internal,
}

/// Error types for ordstore operations.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Inserted tuple length differs from the column count.
    #[error("Arity mismatch: expected {expected} values, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    /// Column not found.
    #[error("Column {column} not found in table {table}")]
    ColumnNotFound { table: String, column: String },
    /// Value does not match the declared column type.
    #[error("Type mismatch on column {column}: expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        got: DataType,
    },
    /// Invalid schema definition.
    #[error("Invalid schema: {message}")]
    InvalidSchema { message: String },
    /// Row not found.
    #[error("Row {row_id} not found in table {table}")]
    NotFound { table: String, row_id: RowId },
    /// A column's ordered index no longer matches the stored rows.
    #[error("Index on column {column} is corrupted: {message}")]
    IndexCorrupted { column: String, message: String },
}

impl Error {
    /// Creates an arity mismatch error.
    pub fn arity_mismatch(expected: usize, got: usize) -> Self {
        Error::ArityMismatch { expected, got }
    }

    /// Creates a column not found error.
    pub fn column_not_found(table: impl Into<String>, column: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(column: impl Into<String>, expected: DataType, got: DataType) -> Self {
        Error::TypeMismatch {
            column: column.into(),
            expected,
            got,
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(table: impl Into<String>, row_id: RowId) -> Self {
        Error::NotFound {
            table: table.into(),
            row_id,
        }
    }

    /// Creates an index corruption error.
    pub fn index_corrupted(column: impl Into<String>, message: impl Into<String>) -> Self {
        Error::IndexCorrupted {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ArityMismatch { .. }
            | Error::ColumnNotFound { .. }
            | Error::TypeMismatch { .. }
            | Error::InvalidSchema { .. } => ErrorKind::Schema,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::IndexCorrupted { .. } => ErrorKind::Internal,
        }
    }

    /// Returns true if this is a schema error.
    #[inline]
    pub fn is_schema_error(&self) -> bool {
        self.kind() == ErrorKind::Schema
    }

    /// Returns true if this is a not found error.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::arity_mismatch(3, 2);
        assert_eq!(err.to_string(), "Arity mismatch: expected 3 values, got 2");

        let err = Error::column_not_found("people", "salary");
        assert!(err.to_string().contains("salary"));
        assert!(err.to_string().contains("people"));

        let err = Error::type_mismatch("age", DataType::Int64, DataType::String);
        assert!(err.to_string().contains("expected int64, got string"));

        let err = Error::not_found("people", 9);
        assert!(err.to_string().contains("Row 9"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::arity_mismatch(1, 2).kind(), ErrorKind::Schema);
        assert!(Error::column_not_found("t", "c").is_schema_error());
        assert!(Error::invalid_schema("empty").is_schema_error());
        assert!(Error::not_found("t", 1).is_not_found());
        assert!(!Error::not_found("t", 1).is_schema_error());
        assert_eq!(Error::index_corrupted("c", "gap").kind(), ErrorKind::Internal);
    }
}
