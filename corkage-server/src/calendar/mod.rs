//! Reservation calendar.
//!
//! Computes which dates of a month can be booked. Two rules close a date:
//! the weekly closing day (Monday) and public holidays fetched from an
//! external service. The holiday lookup fails open.

mod availability;
mod closures;
mod grid;
mod selection;

pub use availability::{
    AvailabilityCalendar, DEFAULT_HOLIDAY_TIMEOUT, HolidayLookup, MonthAvailability,
    fetch_holidays, lookup_holidays,
};
pub use closures::{CLOSED_WEEKDAY, recurring_closures};
pub use grid::{CellState, DAYS_PER_WEEK, DayCell, GridCell, MonthGrid, build_month_grid};
pub use selection::Selection;
