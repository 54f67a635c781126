use crate::errors::StoreResult;
use crate::record::{Record, RecordId};

/// Capability contract a type must declare to live in the record store.
///
/// # Purpose
/// Gives the store everything it needs to handle a type generically: the name
/// of the entity collection the type belongs to, conversion to and from the
/// untyped [`Record`] shape, and plumbing for the context-assigned identity.
/// The store has exactly one method family per CRUD verb regardless of how
/// many storable shapes exist.
///
/// # Characteristics
/// - Must implement `Default` so the store can allocate a blank instance
/// - `entity_name` is an associated function: the collection a type belongs
///   to is a property of the type, not of any instance
/// - Conversion failures should use
///   [`ErrorKind::ObjectMappingError`](crate::errors::ErrorKind)
///
/// # Usage
/// ```text
/// impl Storable for Contact {
///     fn entity_name() -> String {
///         "Contact".to_string()
///     }
///     // ...
/// }
/// ```
pub trait Storable: Default + Clone {
    /// Returns the name of the entity collection this type is stored under.
    fn entity_name() -> String;

    /// Converts this instance into its stored record shape.
    ///
    /// The returned record must carry the instance's current
    /// [`record_id`](Storable::record_id) so staged updates land on the right
    /// record.
    fn to_record(&self) -> StoreResult<Record>;

    /// Rebuilds an instance from its stored record shape.
    fn from_record(record: &Record) -> StoreResult<Self>;

    /// Returns the context-assigned identity, if this instance has been
    /// through [`create`](crate::store::RecordStore::create).
    fn record_id(&self) -> Option<RecordId>;

    /// Binds this instance to a context-assigned identity.
    fn set_record_id(&mut self, id: RecordId);
}
