//! The untyped record shape, record identity, and the [`Storable`] contract
//! typed entities implement to live in the store.

mod record;
mod record_id;
mod storable;

pub use record::*;
pub use record_id::*;
pub use storable::*;
