use std::fmt::Display;
use std::sync::Arc;

use crate::errors::StoreResult;
use crate::record::Record;

use super::{AndFilter, OrFilter};

/// Trait for implementing filter conditions over records.
///
/// A `FilterProvider` decides whether a single record matches a condition.
/// Implementations must be displayable so that misuse can be logged with the
/// offending filter spelled out.
pub trait FilterProvider: Send + Sync + Display {
    /// Applies the filter to a record and returns whether it matches.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to evaluate
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the record matches the filter, `Ok(false)` otherwise
    fn apply(&self, record: &Record) -> StoreResult<bool>;
}

/// A query filter for selecting records from an entity collection.
///
/// `Filter` encapsulates filter logic through a provider pattern. Filters are
/// passed to the fetch and count operations of the record store and can be
/// combined with logical operators.
///
/// # Filter Composition
///
/// - `and(other)` - combines with another filter using logical AND
/// - `or(other)` - combines with another filter using logical OR
///
/// # Examples
///
/// ```rust,ignore
/// use rolodex::filter::{all, field};
///
/// let match_all = all();
/// let by_name = field("first_name").contains("an");
/// let either = field("first_name").contains("an")
///     .or(field("last_name").contains("an"));
/// ```
#[derive(Clone)]
pub struct Filter {
    inner: Arc<dyn FilterProvider>,
}

impl Filter {
    /// Creates a new filter from a filter provider implementation.
    pub fn new<T: FilterProvider + 'static>(inner: T) -> Self {
        Filter {
            inner: Arc::new(inner),
        }
    }

    /// Applies the filter to a record.
    pub fn apply(&self, record: &Record) -> StoreResult<bool> {
        self.inner.apply(record)
    }

    /// Combines this filter with another using logical AND.
    pub fn and(&self, filter: Filter) -> Self {
        Filter::new(AndFilter::new(vec![self.clone(), filter]))
    }

    /// Combines this filter with another using logical OR.
    pub fn or(&self, filter: Filter) -> Self {
        Filter::new(OrFilter::new(vec![self.clone(), filter]))
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Combines multiple filters with logical AND.
///
/// # Arguments
///
/// * `filters` - Filters that must all match
pub fn and(filters: Vec<Filter>) -> Filter {
    Filter::new(AndFilter::new(filters))
}

/// Combines multiple filters with logical OR.
///
/// # Arguments
///
/// * `filters` - Filters of which at least one must match
pub fn or(filters: Vec<Filter>) -> Filter {
    Filter::new(OrFilter::new(filters))
}
