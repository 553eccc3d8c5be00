//! Value type definitions for ordstore.
//!
//! This module defines the `Value` enum which represents any value that can be stored
//! in a row cell. `Value` is totally ordered so that every column can be indexed.

use crate::types::DataType;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A value that can be stored in a row cell.
#[derive(Clone, Debug)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Float64(f64),
    /// UTF-8 string
    String(String),
    /// DateTime stored as Unix timestamp in milliseconds
    DateTime(i64),
    /// Binary data
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns the data type of this value, or None if it's Null.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::Int32(_) => Some(DataType::Int32),
            Value::Int64(_) => Some(DataType::Int64),
            Value::Float64(_) => Some(DataType::Float64),
            Value::String(_) => Some(DataType::String),
            Value::DateTime(_) => Some(DataType::DateTime),
            Value::Bytes(_) => Some(DataType::Bytes),
        }
    }

    /// Returns true if this value is Null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a Boolean, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i32 value if this is an Int32, None otherwise.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i64 value if this is an Int64, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f64 value if this is a Float64, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns the datetime timestamp if this is a DateTime, None otherwise.
    pub fn as_datetime(&self) -> Option<i64> {
        match self {
            Value::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the bytes if this is Bytes, None otherwise.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Returns a type ordering value for comparing different types.
    fn type_order(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Boolean(_) => 1,
            Value::Int32(_) => 2,
            Value::Int64(_) => 3,
            Value::Float64(_) => 4,
            Value::String(_) => 5,
            Value::DateTime(_) => 6,
            Value::Bytes(_) => 7,
        }
    }

    /// Numeric comparison across Int32, Int64 and Float64.
    ///
    /// Returns None when either side is not numeric.
    fn numeric_cmp(&self, other: &Self) -> Option<Ordering> {
        let ord = match (self, other) {
            (Value::Int32(a), Value::Int32(b)) => a.cmp(b),
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Int32(a), Value::Int64(b)) => (*a as i64).cmp(b),
            (Value::Int64(a), Value::Int32(b)) => a.cmp(&(*b as i64)),
            (Value::Int32(a), Value::Float64(b)) => float_cmp(*a as f64, *b),
            (Value::Float64(a), Value::Int32(b)) => float_cmp(*a, *b as f64),
            (Value::Int64(a), Value::Float64(b)) => float_cmp(*a as f64, *b),
            (Value::Float64(a), Value::Int64(b)) => float_cmp(*a, *b as f64),
            (Value::Float64(a), Value::Float64(b)) => float_cmp(*a, *b),
            _ => return None,
        };
        Some(ord)
    }
}

/// Compares two floats, treating NaN as greater than all other values.
fn float_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Equality is defined by the total order, so `a == b` exactly when
/// `a.cmp(b)` is `Equal`: `-0.0` equals `0.0`, NaN equals NaN, and values of
/// different types are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Int32(i) => i.hash(state),
            Value::Int64(i) => i.hash(state),
            Value::Float64(f) => {
                // 0.0 == -0.0 and NaN == NaN, so they must hash alike.
                let bits = if f.is_nan() {
                    f64::NAN.to_bits()
                } else if *f == 0.0 {
                    0.0f64.to_bits()
                } else {
                    f.to_bits()
                };
                bits.hash(state)
            }
            Value::String(s) => s.hash(state),
            Value::DateTime(d) => d.hash(state),
            Value::Bytes(b) => b.hash(state),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        if let Some(ord) = self.numeric_cmp(other) {
            // Numerically equal values of different types still differ, so
            // fall back to the type order to stay consistent with `Eq`.
            return ord.then_with(|| self.type_order().cmp(&other.type_order()));
        }
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            // Different types: order by type discriminant
            _ => self.type_order().cmp(&other.type_order()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{:?}", v),
            Value::DateTime(v) => write!(f, "@{}", v),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_data_type_of_cells() {
        let cells = [Value::from(30i64), Value::from("Alice"), Value::Null];
        let types: Vec<Option<DataType>> = cells.iter().map(Value::data_type).collect();
        assert_eq!(types, vec![Some(DataType::Int64), Some(DataType::String), None]);
        assert!(cells[2].is_null());
    }

    #[test]
    fn test_accessors_reject_other_types() {
        let age = Value::Int64(30);
        assert_eq!(age.as_i64(), Some(30));
        assert_eq!(age.as_i32(), None);
        assert_eq!(age.as_str(), None);
        assert_eq!(Value::Float64(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::DateTime(86_400_000).as_datetime(), Some(86_400_000));
        assert_eq!(Value::from(vec![0xde, 0xad]).as_bytes(), Some(&[0xde, 0xad][..]));
        assert_eq!(Value::from(false).as_bool(), Some(false));
    }

    #[test]
    fn test_equality_is_type_strict() {
        assert_ne!(Value::Int32(25), Value::Int64(25));
        assert_ne!(Value::Int64(25), Value::Float64(25.0));
        assert_eq!(Value::Float64(-0.0), Value::Float64(0.0));
        assert_eq!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
    }

    #[test]
    fn test_sort_order_of_a_column() {
        let mut cells = vec![
            Value::from("Charlie"),
            Value::Null,
            Value::from("Alice"),
            Value::from("Bob"),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![Value::Null, "Alice".into(), "Bob".into(), "Charlie".into()]
        );
    }

    #[test]
    fn test_float_order_puts_nan_last() {
        let mut cells = vec![
            Value::Float64(f64::NAN),
            Value::Float64(f64::INFINITY),
            Value::Float64(-1.0),
        ];
        cells.sort();
        assert_eq!(cells[0], Value::Float64(-1.0));
        assert_eq!(cells[1], Value::Float64(f64::INFINITY));
        assert!(cells[2].as_f64().is_some_and(f64::is_nan));
    }

    #[test]
    fn test_cross_type_numeric_ordering() {
        assert!(Value::Int32(1) < Value::Int64(2));
        assert!(Value::Int64(3) > Value::Float64(2.5));
        // Equal magnitude, different types: never Equal, ordered by type.
        assert_eq!(Value::Int32(1).cmp(&Value::Int64(1)), Ordering::Less);
        assert_ne!(Value::Int64(1).cmp(&Value::Float64(1.0)), Ordering::Equal);
    }

    #[test]
    fn test_ord_consistent_with_eq() {
        let values = vec![
            Value::Null,
            Value::Boolean(false),
            Value::Int32(7),
            Value::Int64(7),
            Value::Float64(7.0),
            Value::Float64(-0.0),
            Value::Float64(0.0),
            Value::String("7".into()),
            Value::DateTime(7),
            Value::Bytes(vec![7]),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(a == b, a.cmp(b) == Ordering::Equal, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_optional_cells() {
        let present: Value = Some(25i64).into();
        let missing: Value = None::<i64>.into();
        assert_eq!(present, Value::Int64(25));
        assert!(missing.is_null());
        assert_eq!(Value::from(String::from("Dana")).as_str(), Some("Dana"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int64(30).to_string(), "30");
        assert_eq!(Value::String("Alice".into()).to_string(), "\"Alice\"");
        assert_eq!(Value::Null.to_string(), "NULL");
    }
}
