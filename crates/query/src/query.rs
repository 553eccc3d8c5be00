//! Query description.

use ordstore_core::Value;
use ordstore_storage::Predicate;

/// A read request: which rows, in which order, and how many.
///
/// # Example
///
/// ```rust
/// use ordstore_query::Query;
///
/// let query = Query::new()
///     .filter("age", 30i64)
///     .order_by("name")
///     .limit(10);
///
/// assert_eq!(query.order_columns(), &["name".to_string()]);
/// assert_eq!(query.limit_count(), Some(10));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    predicate: Predicate,
    order_by: Vec<String>,
    limit: Option<usize>,
    offset: usize,
}

impl Query {
    /// Creates a query that returns every row in insertion order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query from an optional predicate and order-by list.
    pub fn from_parts<S: AsRef<str>>(predicate: Option<Predicate>, order_by: &[S]) -> Self {
        Self {
            predicate: predicate.unwrap_or_default(),
            order_by: order_by.iter().map(|c| c.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }

    /// Adds an equality term to the filter.
    pub fn filter(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicate = self.predicate.and(column, value);
        self
    }

    /// Replaces the filter.
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Appends an order-by column. Earlier columns take precedence.
    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.order_by.push(column.into());
        self
    }

    /// Caps the number of returned rows.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` rows of the ordered result.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the filter.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Returns the order-by columns.
    pub fn order_columns(&self) -> &[String] {
        &self.order_by
    }

    /// Returns the limit, if any.
    pub fn limit_count(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the offset.
    pub fn offset_count(&self) -> usize {
        self.offset
    }
}
