//! Month availability: weekly closures merged with public holidays.
//!
//! Holiday lookups are fail-open. Any failure, including a timeout, is
//! logged and treated as "no holidays" so the calendar still renders.
//! Nothing is cached; each call asks the source again.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::domain::CalendarMonth;
use crate::holidays::{HolidayEntry, HolidayError, HolidaySource};

use super::closures::recurring_closures;
use super::grid::{MonthGrid, build_month_grid};

/// Default bound on a holiday lookup.
pub const DEFAULT_HOLIDAY_TIMEOUT: Duration = Duration::from_secs(5);

/// Holidays of one month, plus whether the lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayLookup {
    pub entries: Vec<HolidayEntry>,
    /// True when the source failed and `entries` is the empty fallback
    pub degraded: bool,
}

/// Ask `source` for the holidays of `month`, failing open.
///
/// Returns an empty list on any failure. Entries are filtered to `month`.
pub async fn fetch_holidays(
    source: &dyn HolidaySource,
    month: CalendarMonth,
    timeout: Duration,
) -> Vec<HolidayEntry> {
    lookup_holidays(source, month, timeout).await.entries
}

/// Like [`fetch_holidays`] but reports whether the fallback was used.
pub async fn lookup_holidays(
    source: &dyn HolidaySource,
    month: CalendarMonth,
    timeout: Duration,
) -> HolidayLookup {
    let result = match tokio::time::timeout(timeout, source.public_holidays(month.year())).await {
        Ok(result) => result,
        Err(_) => Err(HolidayError::Timeout(timeout)),
    };

    match result {
        Ok(entries) => {
            let entries: Vec<HolidayEntry> = entries
                .into_iter()
                .filter(|h| month.contains(h.date))
                .collect();
            debug!(%month, count = entries.len(), "loaded public holidays");
            HolidayLookup {
                entries,
                degraded: false,
            }
        }
        Err(e) => {
            warn!(%month, error = %e, "holiday lookup failed, continuing without holidays");
            HolidayLookup {
                entries: Vec::new(),
                degraded: true,
            }
        }
    }
}

/// Everything the reservation calendar needs for one month.
#[derive(Debug, Clone)]
pub struct MonthAvailability {
    pub month: CalendarMonth,
    pub holidays: Vec<HolidayEntry>,
    pub holidays_degraded: bool,
    pub unavailable: BTreeSet<NaiveDate>,
    pub grid: MonthGrid,
}

impl MonthAvailability {
    /// Combine weekly closures with already-fetched holidays.
    pub fn new(month: CalendarMonth, lookup: HolidayLookup) -> Self {
        let mut unavailable = recurring_closures(month);
        unavailable.extend(lookup.entries.iter().map(|h| h.date));
        let grid = build_month_grid(month, &lookup.entries);

        Self {
            month,
            holidays: lookup.entries,
            holidays_degraded: lookup.degraded,
            unavailable,
            grid,
        }
    }

    pub fn is_available(&self, date: NaiveDate) -> bool {
        self.month.contains(date) && !self.unavailable.contains(&date)
    }
}

/// Reservation calendar backed by a holiday source.
#[derive(Clone)]
pub struct AvailabilityCalendar {
    source: Arc<dyn HolidaySource>,
    timeout: Duration,
}

impl AvailabilityCalendar {
    pub fn new(source: Arc<dyn HolidaySource>) -> Self {
        Self {
            source,
            timeout: DEFAULT_HOLIDAY_TIMEOUT,
        }
    }

    /// Set the bound on each holiday lookup.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Holidays of `month`; empty if the source fails.
    pub async fn fetch_holidays(&self, month: CalendarMonth) -> Vec<HolidayEntry> {
        fetch_holidays(self.source.as_ref(), month, self.timeout).await
    }

    /// Closures, holidays and grid for `month`.
    pub async fn month(&self, month: CalendarMonth) -> MonthAvailability {
        let lookup = lookup_holidays(self.source.as_ref(), month, self.timeout).await;
        MonthAvailability::new(month, lookup)
    }
}
