//! Calendar month type.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::DomainError;

/// A validated year and 0-based month (0 = January, 11 = December).
///
/// The 0-based month matches what browser date APIs hand to the calendar
/// widget, so values flow through the HTTP API unchanged.
///
/// # Examples
///
/// ```
/// use corkage_server::domain::CalendarMonth;
///
/// let october = CalendarMonth::new(2024, 9).unwrap();
/// assert_eq!(october.days_in_month(), 31);
/// assert_eq!(october.first_weekday_offset(), 2); // Tuesday
///
/// assert!(CalendarMonth::new(2024, 12).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    first_day: NaiveDate,
}

impl CalendarMonth {
    /// Create a month from a year and 0-based month index.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if month > 11 {
            return Err(DomainError::invalid(
                "month",
                format!("must be within [0, 11], got {month}"),
            ));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or_else(|| {
            DomainError::invalid("year", format!("{year} is outside the supported range"))
        })?;
        Ok(Self {
            year,
            month,
            first_day,
        })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month index.
    pub fn month0(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last date of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .iter_days()
            .take_while(|d| d.month0() == self.month)
            .last()
            .unwrap_or(self.first_day)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Number of blank cells before day 1 in a Sunday-first week row.
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    /// Date of the given day of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        self.first_day.with_day(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    /// Every date in the month, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first_day
            .iter_days()
            .take_while(move |d| d.month0() == self.month)
    }

    /// The previous month, or `None` at the start of the supported range.
    pub fn previous(&self) -> Option<Self> {
        if self.month == 0 {
            Self::new(self.year.checked_sub(1)?, 11).ok()
        } else {
            Self::new(self.year, self.month - 1).ok()
        }
    }

    /// The following month, or `None` at the end of the supported range.
    pub fn next(&self) -> Option<Self> {
        if self.month == 11 {
            Self::new(self.year.checked_add(1)?, 0).ok()
        } else {
            Self::new(self.year, self.month + 1).ok()
        }
    }

    /// Display title used above the calendar, e.g. "2024년 10월".
    pub fn title(&self) -> String {
        format!("{}년 {}월", self.year, self.month + 1)
    }
}

impl fmt::Debug for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarMonth({}-{:02})", self.year, self.month + 1)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month + 1)
    }
}
