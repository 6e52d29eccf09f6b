//! Recurring weekly closures.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::CalendarMonth;

/// The restaurant is closed every week on this day.
pub const CLOSED_WEEKDAY: Weekday = Weekday::Mon;

/// Every date in `month` that falls on the weekly closing day.
pub fn recurring_closures(month: CalendarMonth) -> BTreeSet<NaiveDate> {
    month
        .dates()
        .filter(|d| d.weekday() == CLOSED_WEEKDAY)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(y: i32, m: u32) -> CalendarMonth {
        CalendarMonth::new(y, m).unwrap()
    }

    fn days(set: &BTreeSet<NaiveDate>) -> Vec<u32> {
        set.iter().map(|d| d.day()).collect()
    }

    #[test]
    fn october_2024_mondays() {
        let closures = recurring_closures(month(2024, 9));
        assert_eq!(days(&closures), vec![7, 14, 21, 28]);
    }

    #[test]
    fn month_starting_on_monday() {
        // 2024-07-01 is a Monday
        let closures = recurring_closures(month(2024, 6));
        assert_eq!(days(&closures), vec![1, 8, 15, 22, 29]);
    }

    #[test]
    fn leap_february_ending_on_thursday() {
        let closures = recurring_closures(month(2024, 1));
        assert_eq!(days(&closures), vec![5, 12, 19, 26]);
    }

    #[test]
    fn never_leaks_into_next_month() {
        // 2024-09-30 is a Monday; 2024-10-07 must not appear.
        let closures = recurring_closures(month(2024, 8));
        assert_eq!(days(&closures), vec![2, 9, 16, 23, 30]);
        assert!(closures.iter().all(|d| d.month0() == 8));
    }
}
