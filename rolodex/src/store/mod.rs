//! The persistence context and the generic record store facade over it.

mod find_options;
mod persistence_context;
mod record_store;

pub use find_options::*;
pub use persistence_context::*;
pub use record_store::*;
