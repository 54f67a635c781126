use std::fmt::Display;

use crate::common::fold_for_search;
use crate::errors::StoreResult;
use crate::record::Record;

use super::FilterProvider;

/// A filter that matches text fields containing a search term.
///
/// The match is a case-insensitive, diacritic-insensitive substring test:
/// both the stored field value and the search term are folded through
/// [`fold_for_search`] before comparison, so `"ander"` finds `"Andérson"`
/// and `"ANDER"` alike. Null and non-text fields never match.
///
/// The term is folded once at construction; only the haystack is folded per
/// record during a scan.
pub(crate) struct ContainsFilter {
    field_name: String,
    term: String,
    folded_term: String,
}

impl ContainsFilter {
    /// Creates a new contains filter for the specified field and term.
    ///
    /// # Arguments
    ///
    /// * `field_name` - The name of the text field to search
    /// * `term` - The substring to search for
    pub(crate) fn new(field_name: String, term: String) -> Self {
        let folded_term = fold_for_search(&term);
        ContainsFilter {
            field_name,
            term,
            folded_term,
        }
    }
}

impl Display for ContainsFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} contains[cd] {})", self.field_name, self.term)
    }
}

impl FilterProvider for ContainsFilter {
    #[inline]
    fn apply(&self, record: &Record) -> StoreResult<bool> {
        let value = record.get(&self.field_name);
        match value.as_string() {
            Some(text) => Ok(fold_for_search(text).contains(&self.folded_term)),
            None => Ok(false),
        }
    }
}
