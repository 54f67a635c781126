use std::fmt::Display;

use crate::errors::StoreResult;
use crate::record::Record;

use super::{Filter, FilterProvider};

/// A filter that applies logical AND over multiple filters.
///
/// Matches records that satisfy all of the provided filters. Evaluation
/// short-circuits: the first non-matching filter stops the scan. Filters are
/// evaluated in the order they were provided.
pub(crate) struct AndFilter {
    filters: Vec<Filter>,
}

impl AndFilter {
    /// Creates a new AND filter combining multiple filters.
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        AndFilter { filters }
    }
}

impl Display for AndFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rendered = String::with_capacity(self.filters.len() * 16);
        for (i, filter) in self.filters.iter().enumerate() {
            rendered.push_str(&format!("{}", filter));
            if i < self.filters.len() - 1 {
                rendered.push_str(" && ");
            }
        }
        write!(f, "({})", rendered)
    }
}

impl FilterProvider for AndFilter {
    #[inline]
    fn apply(&self, record: &Record) -> StoreResult<bool> {
        for filter in &self.filters {
            if !filter.apply(record)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// A filter that applies logical OR over multiple filters.
///
/// Matches records that satisfy at least one of the provided filters.
/// Evaluation short-circuits: the first matching filter stops the scan. This
/// is the shape of the contact search predicate (first name OR last name).
pub(crate) struct OrFilter {
    filters: Vec<Filter>,
}

impl OrFilter {
    /// Creates a new OR filter combining multiple filters.
    pub(crate) fn new(filters: Vec<Filter>) -> Self {
        OrFilter { filters }
    }
}

impl Display for OrFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rendered = String::with_capacity(self.filters.len() * 16);
        for (i, filter) in self.filters.iter().enumerate() {
            rendered.push_str(&format!("{}", filter));
            if i < self.filters.len() - 1 {
                rendered.push_str(" || ");
            }
        }
        write!(f, "({})", rendered)
    }
}

impl FilterProvider for OrFilter {
    #[inline]
    fn apply(&self, record: &Record) -> StoreResult<bool> {
        for filter in &self.filters {
            if filter.apply(record)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
