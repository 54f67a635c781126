/// Direction for sorting fetched records.
///
/// # Purpose
/// Controls whether a sorted fetch returns records from smallest to largest
/// field value or the reverse. Used with
/// [`order_by`](crate::store::order_by) when querying the record store.
///
/// # Characteristics
/// - **Copy**: can be copied instead of cloned
/// - **Comparable**: can be compared for equality
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z).
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A).
    Descending,
}
