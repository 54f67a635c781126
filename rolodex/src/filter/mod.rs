//! Query filters for selecting records from entity collections.
//!
//! Filters are created through the fluent API and combined with logical
//! operators:
//!
//! - `all()` - match every record
//! - `field("first_name").eq("Anna")` - equality
//! - `field("last_name").contains("an")` - case/diacritic-insensitive
//!   substring match
//! - `and(filters)` / `or(filters)` / `Filter::and` / `Filter::or` - logical
//!   composition with short-circuit evaluation
//!
//! # Examples
//!
//! ```rust,ignore
//! use rolodex::filter::{all, field};
//!
//! // the contact search predicate
//! let term = "an";
//! let filter = field("first_name")
//!     .contains(term)
//!     .or(field("last_name").contains(term));
//!
//! // match-all for unfiltered fetches
//! let everything = all();
//! ```

mod basic_filters;
mod filter;
mod fluent;
mod logical_filters;
mod pattern_filters;

pub use basic_filters::*;
pub use filter::*;
pub use fluent::*;
pub use logical_filters::*;
pub use pattern_filters::*;
