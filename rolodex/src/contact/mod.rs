//! The contact entity and its repository.

mod contact;
mod repository;

pub use contact::*;
pub use repository::*;
