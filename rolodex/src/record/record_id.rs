use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a record inside the persistence context.
///
/// # Purpose
/// Identifies one staged or committed record within its entity collection.
/// Ids are handed out by the context when a record is first inserted and stay
/// stable across staging and commit.
///
/// # Characteristics
/// - **Opaque**: the numeric content carries no meaning beyond identity
/// - **Copy**: cheap to pass around and store inside entities
/// - **Not a uniqueness constraint**: two records with identical field values
///   still get distinct ids; duplicates are permitted by design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        RecordId(raw)
    }

    /// Returns the raw numeric form, mainly for logging.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-wide generator for [`RecordId`]s.
///
/// A single shared instance lives behind the `ID_GENERATOR` static so every
/// context in the process draws from one monotonic sequence. The sequence
/// starts at 1; 0 is never handed out.
pub struct RecordIdGenerator {
    next: AtomicU64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        RecordIdGenerator {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the next id in the sequence.
    pub fn next_id(&self) -> RecordId {
        RecordId(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        RecordIdGenerator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let generator = RecordIdGenerator::new();
        let a = generator.next_id();
        let b = generator.next_id();
        let c = generator.next_id();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_ids_start_above_zero() {
        let generator = RecordIdGenerator::new();
        assert!(generator.next_id().as_u64() > 0);
    }

    #[test]
    fn test_display() {
        let id = RecordId::from_raw(42);
        assert_eq!(format!("{}", id), "42");
    }
}
