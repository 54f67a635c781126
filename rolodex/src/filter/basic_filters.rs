use std::fmt::Display;

use crate::common::Value;
use crate::errors::StoreResult;
use crate::record::Record;

use super::{Filter, FilterProvider};

/// A filter that matches every record.
///
/// This is the default filter of all fetch operations: with no predicate
/// supplied, every record of the entity collection is returned.
pub(crate) struct AllFilter;

impl FilterProvider for AllFilter {
    #[inline]
    fn apply(&self, _record: &Record) -> StoreResult<bool> {
        Ok(true)
    }
}

impl Display for AllFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllFilter")
    }
}

/// Creates a filter that matches all records.
pub fn all() -> Filter {
    Filter::new(AllFilter)
}

/// A filter that matches records where a field equals a value.
///
/// Absent fields read as [`Value::Null`], so `field(name).eq(Value::Null)`
/// matches records that never stored the field at all.
pub(crate) struct EqualsFilter {
    field_name: String,
    field_value: Value,
}

impl EqualsFilter {
    /// Creates a new equality filter for the specified field and value.
    pub(crate) fn new(field_name: String, field_value: Value) -> Self {
        EqualsFilter {
            field_name,
            field_value,
        }
    }
}

impl Display for EqualsFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} == {})", self.field_name, self.field_value)
    }
}

impl FilterProvider for EqualsFilter {
    #[inline]
    fn apply(&self, record: &Record) -> StoreResult<bool> {
        Ok(record.get(&self.field_name) == self.field_value)
    }
}
