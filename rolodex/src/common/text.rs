use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu_normalizer::DecomposingNormalizer;
use icu_properties::props::GeneralCategory;
use icu_properties::CodePointMapData;

use crate::errors::{ErrorKind, StoreError, StoreResult};

/// Folds text for case-insensitive, diacritic-insensitive substring search.
///
/// The input is decomposed (NFD), nonspacing marks are stripped, and the
/// remainder is lowercased. Both the haystack and the needle of a contains
/// match must go through the same fold so that `"Andérson"` and `"anderson"`
/// land on the same form.
pub fn fold_for_search(text: &str) -> String {
    let decomposed = DecomposingNormalizer::new_nfd().normalize(text);
    let category = CodePointMapData::<GeneralCategory>::new();

    decomposed
        .chars()
        .filter(|c| category.get(*c) != GeneralCategory::NonspacingMark)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Builds the collator used to order records by a text field.
///
/// Strength defaults to secondary, so case differences do not separate
/// otherwise-equal names while accented characters still order near their
/// base letter. Callers may override options or preferences per query.
pub fn name_collator(
    preferences: Option<CollatorPreferences>,
    options: Option<CollatorOptions>,
) -> StoreResult<CollatorBorrowed<'static>> {
    let preferences = preferences.unwrap_or_default();
    let options = options.unwrap_or_else(|| {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Secondary);
        options
    });

    Collator::try_new(preferences, options).map_err(|_| {
        StoreError::new(
            "Failed to create collator for sorting - check collator preferences and options",
            ErrorKind::InternalError,
        )
    })
}
