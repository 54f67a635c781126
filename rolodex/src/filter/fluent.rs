use crate::common::Value;

use super::{ContainsFilter, EqualsFilter, Filter};

/// Creates a fluent filter builder for the specified field name.
///
/// The returned [`FluentFilter`] provides methods for building the filters
/// this query model supports: equality and folded substring containment.
///
/// # Arguments
///
/// * `field_name` - The name of the field to filter on
///
/// # Examples
///
/// ```rust,ignore
/// use rolodex::filter::field;
///
/// let by_first = field("first_name").contains("an");
/// let by_last = field("last_name").eq("Lee");
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// A fluent builder for constructing filters on a specific field.
///
/// Each method consumes the builder and returns a [`Filter`] that can be used
/// directly with the record store's fetch and count operations or combined
/// with other filters.
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    /// Creates a filter that matches records where the field equals the
    /// specified value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to match against
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        Filter::new(EqualsFilter::new(self.field_name, value.into()))
    }

    /// Creates a filter that matches records where the text field contains
    /// the term as a case-insensitive, diacritic-insensitive substring.
    ///
    /// # Arguments
    ///
    /// * `term` - The substring to search for
    #[inline]
    pub fn contains(self, term: &str) -> Filter {
        Filter::new(ContainsFilter::new(self.field_name, term.to_string()))
    }
}
