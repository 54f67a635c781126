//! The headless contact list screen model.

mod contact_list;

pub use contact_list::*;
