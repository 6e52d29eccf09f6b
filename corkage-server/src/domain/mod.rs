//! Domain types for the restaurant finder.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod error;
mod geo;
mod month;

pub use error::DomainError;
pub use geo::{GeoBounds, GeoPoint};
pub use month::CalendarMonth;
