//! Query planning.
//!
//! Planning binds every column name in a query to a schema position. All
//! lookups happen here, so an unknown column fails before any row is read.

use crate::query::Query;
use ordstore_core::schema::Table;
use ordstore_core::Result;
use ordstore_storage::Predicate;

/// A query whose columns have been resolved against a schema.
#[derive(Clone, Debug)]
pub struct QueryPlan<'a> {
    predicate: &'a Predicate,
    order_by: Vec<usize>,
    limit: Option<usize>,
    offset: usize,
}

impl<'a> QueryPlan<'a> {
    /// Resolves a query against a schema.
    ///
    /// Fails with `ColumnNotFound` if any filter or order-by column is unknown.
    pub fn resolve(query: &'a Query, schema: &Table) -> Result<Self> {
        query.predicate().bind(schema)?;
        let order_by = query
            .order_columns()
            .iter()
            .map(|column| schema.resolve_column(column))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            predicate: query.predicate(),
            order_by,
            limit: query.limit_count(),
            offset: query.offset_count(),
        })
    }

    /// Returns the filter.
    pub fn predicate(&self) -> &'a Predicate {
        self.predicate
    }

    /// Returns the order-by column positions.
    pub fn order_by(&self) -> &[usize] {
        &self.order_by
    }

    /// Returns true if the result needs the tie-break merge.
    pub fn is_ordered(&self) -> bool {
        !self.order_by.is_empty()
    }

    /// Returns the limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the offset.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordstore_core::Error;

    fn people() -> Table {
        Table::from_names("people", &["id", "name", "age"]).unwrap()
    }

    #[test]
    fn test_resolve_order_columns() {
        let query = Query::new().order_by("age").order_by("name").limit(3);
        let plan = QueryPlan::resolve(&query, &people()).unwrap();
        assert_eq!(plan.order_by(), &[2, 1]);
        assert!(plan.is_ordered());
        assert_eq!(plan.limit(), Some(3));
        assert_eq!(plan.offset(), 0);
    }

    #[test]
    fn test_resolve_unordered() {
        let query = Query::new().filter("age", 30i64);
        let plan = QueryPlan::resolve(&query, &people()).unwrap();
        assert!(!plan.is_ordered());
        assert_eq!(plan.predicate().len(), 1);
    }

    #[test]
    fn test_unknown_order_column() {
        let query = Query::new().order_by("age").order_by("salary");
        let err = QueryPlan::resolve(&query, &people()).unwrap_err();
        assert_eq!(err, Error::column_not_found("people", "salary"));
    }

    #[test]
    fn test_unknown_filter_column() {
        let query = Query::new().filter("salary", 1i64).order_by("age");
        let err = QueryPlan::resolve(&query, &people()).unwrap_err();
        assert!(err.is_schema_error());
    }
}
