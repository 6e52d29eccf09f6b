//! Public holiday lookup.
//!
//! Holidays come from the Nager.Date public holiday API, keyed by year and
//! country. A file-backed source is available for offline development.

mod client;
mod error;
mod fixture;

use async_trait::async_trait;

pub use client::{HolidayClient, HolidayClientConfig, HolidayEntry};
pub use error::HolidayError;
pub use fixture::StaticHolidays;

/// Anything that can list the public holidays of a year.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// All public holidays of `year`, in any order.
    async fn public_holidays(&self, year: i32) -> Result<Vec<HolidayEntry>, HolidayError>;
}
