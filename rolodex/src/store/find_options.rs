use icu_collator::options::CollatorOptions;
use icu_collator::CollatorPreferences;

use crate::common::SortOrder;

/// Options controlling how a fetch materializes its results.
///
/// `FindOptions` carries the sort specification and, optionally, the
/// collation settings used to compare text fields. With no sort fields the
/// fetch returns records in the unspecified insertion order of the backing
/// collection. There is no pagination in this query model.
///
/// # Examples
///
/// ```rust,ignore
/// use rolodex::common::SortOrder;
/// use rolodex::store::{order_by, FindOptions};
///
/// let options = order_by("first_name", SortOrder::Ascending);
/// let options = FindOptions::new().sort_by("last_name", SortOrder::Descending);
/// ```
pub struct FindOptions {
    pub(crate) sort_by: Vec<(String, SortOrder)>,
    pub(crate) collator_options: Option<CollatorOptions>,
    pub(crate) collator_preferences: Option<CollatorPreferences>,
}

/// Creates `FindOptions` sorted by a single field.
///
/// # Arguments
///
/// * `field_name` - The field to sort by
/// * `sort_order` - The sort order (ascending or descending)
pub fn order_by(field_name: &str, sort_order: SortOrder) -> FindOptions {
    FindOptions::new().sort_by(field_name, sort_order)
}

impl FindOptions {
    /// Creates `FindOptions` with no sorting and default collation.
    pub fn new() -> FindOptions {
        FindOptions {
            sort_by: Vec::new(),
            collator_options: None,
            collator_preferences: None,
        }
    }

    /// Appends a field to the sort specification.
    ///
    /// Earlier fields take precedence; later fields break ties.
    pub fn sort_by(mut self, field_name: &str, sort_order: SortOrder) -> FindOptions {
        self.sort_by.push((field_name.to_string(), sort_order));
        self
    }

    /// Overrides the collator options used for text comparison.
    pub fn collator_options(mut self, options: CollatorOptions) -> FindOptions {
        self.collator_options = Some(options);
        self
    }

    /// Overrides the collator preferences (e.g. locale) used for text
    /// comparison.
    pub fn collator_preferences(mut self, preferences: CollatorPreferences) -> FindOptions {
        self.collator_preferences = Some(preferences);
        self
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        FindOptions::new()
    }
}
