//! Equality-conjunction predicates.

use alloc::string::String;
use alloc::vec::Vec;
use ordstore_core::schema::Table;
use ordstore_core::{Result, Row, Value};

/// A conjunction of `column = value` terms.
///
/// An empty predicate matches every row. A column may appear more than once;
/// all of its terms must hold.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predicate {
    terms: Vec<(String, Value)>,
}

impl Predicate {
    /// Creates an empty predicate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `column = value` term.
    pub fn and(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.terms.push((column.into(), value.into()));
        self
    }

    /// Returns the terms in the order they were added.
    pub fn terms(&self) -> &[(String, Value)] {
        &self.terms
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the predicate has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Binds every term to a column position of the schema.
    ///
    /// Fails with `ColumnNotFound` on the first unknown column.
    pub fn bind<'a>(&'a self, schema: &Table) -> Result<BoundPredicate<'a>> {
        let terms = self
            .terms
            .iter()
            .map(|(column, value)| Ok((schema.resolve_column(column)?, value)))
            .collect::<Result<Vec<_>>>()?;
        Ok(BoundPredicate { terms })
    }
}

impl<S, V> FromIterator<(S, V)> for Predicate
where
    S: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Self {
            terms: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

/// A predicate whose columns have been resolved to positions.
#[derive(Clone, Debug)]
pub struct BoundPredicate<'a> {
    terms: Vec<(usize, &'a Value)>,
}

impl BoundPredicate<'_> {
    /// Returns true if the row satisfies every term.
    #[inline]
    pub fn matches(&self, row: &Row) -> bool {
        self.terms
            .iter()
            .all(|&(index, value)| row.get(index) == Some(value))
    }

    /// Returns true if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn people() -> Table {
        Table::from_names("people", &["id", "name", "age"]).unwrap()
    }

    #[test]
    fn test_predicate_builder() {
        let pred = Predicate::new().and("age", 30i64).and("name", "Alice");
        assert_eq!(pred.len(), 2);
        assert_eq!(pred.terms()[0], (String::from("age"), Value::Int64(30)));
        assert!(Predicate::new().is_empty());
    }

    #[test]
    fn test_predicate_from_iter() {
        let pred: Predicate = vec![("age", 30i64)].into_iter().collect();
        assert_eq!(pred, Predicate::new().and("age", 30i64));
    }

    #[test]
    fn test_bind_and_match() {
        let schema = people();
        let pred = Predicate::new().and("age", 30i64).and("name", "Alice");
        let bound = pred.bind(&schema).unwrap();

        let alice = Row::new(1, vec![Value::Int64(1), "Alice".into(), Value::Int64(30)]);
        let bob = Row::new(2, vec![Value::Int64(2), "Bob".into(), Value::Int64(30)]);
        assert!(bound.matches(&alice));
        assert!(!bound.matches(&bob));
    }

    #[test]
    fn test_bind_unknown_column() {
        let pred = Predicate::new().and("salary", 10i64);
        let err = pred.bind(&people()).unwrap_err();
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_contradictory_terms_match_nothing() {
        let schema = people();
        let pred = Predicate::new().and("age", 30i64).and("age", 25i64);
        let bound = pred.bind(&schema).unwrap();
        let row = Row::new(1, vec![Value::Int64(1), "Alice".into(), Value::Int64(30)]);
        assert!(!bound.matches(&row));
    }

    #[test]
    fn test_empty_predicate_matches_all() {
        let schema = people();
        let pred = Predicate::new();
        let bound = pred.bind(&schema).unwrap();
        assert!(bound.is_empty());
        assert!(bound.matches(&Row::new(1, vec![Value::Null, Value::Null, Value::Null])));
    }
}
