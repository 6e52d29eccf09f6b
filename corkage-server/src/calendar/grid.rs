//! Month grid layout for the reservation calendar.
//!
//! The grid is row-major with seven Sunday-first columns. The first row
//! starts with one blank per weekday before the 1st; the last row is not
//! padded.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::CalendarMonth;
use crate::holidays::HolidayEntry;

use super::closures::recurring_closures;
use super::selection::Selection;

/// Columns per week row.
pub const DAYS_PER_WEEK: u32 = 7;

/// Whether a day can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Selectable,
    Disabled,
}

/// A day of the month in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    /// Local name of the public holiday on this day, if any
    pub holiday: Option<String>,
    pub state: CellState,
    pub selected: bool,
}

impl DayCell {
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }
}

/// One slot in a week row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(day) => Some(day),
        }
    }
}

/// A laid-out calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub rows: Vec<Vec<GridCell>>,
    #[serde(rename = "selected")]
    selection: Selection<NaiveDate>,
}

impl MonthGrid {
    /// All day cells in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flatten().filter_map(GridCell::as_day)
    }

    /// The cell for a date, if it is in this grid.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|d| d.date == date)
    }

    /// Mark `date` as the only selected cell.
    ///
    /// Any previously selected cell is cleared first, so at most one cell is
    /// selected afterwards. A date outside the grid just clears the selection.
    pub fn with_selection(mut self, date: Option<NaiveDate>) -> Self {
        let previous = std::mem::take(&mut self.selection);
        self.selection = match date.filter(|d| self.day(*d).is_some()) {
            Some(date) => previous.select(date),
            None => previous.clear(),
        };

        for cell in self.rows.iter_mut().flatten() {
            if let GridCell::Day(day) = cell {
                day.selected = self.selection.is_selected(&day.date);
            }
        }
        self
    }

    /// The selected date, if any.
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selection.get().copied()
    }
}

/// Lay out `month` with its holidays and weekly closures.
///
/// Holidays outside `month` are ignored. Days that are weekly closures or
/// holidays are `Disabled`.
pub fn build_month_grid(month: CalendarMonth, holidays: &[HolidayEntry]) -> MonthGrid {
    let closures = recurring_closures(month);
    let holiday_dates: BTreeSet<NaiveDate> = holidays.iter().map(|h| h.date).collect();

    let offset = month.first_weekday_offset();
    let last_day = month.days_in_month();

    let mut rows = Vec::new();
    let mut row: Vec<GridCell> = (0..offset).map(|_| GridCell::Blank).collect();

    for (day, date) in (1..=last_day).zip(month.dates()) {
        let holiday = holidays
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.local_name.clone());

        let state = if closures.contains(&date) || holiday_dates.contains(&date) {
            CellState::Disabled
        } else {
            CellState::Selectable
        };

        row.push(GridCell::Day(DayCell {
            day,
            date,
            holiday,
            state,
            selected: false,
        }));

        if (offset + day) % DAYS_PER_WEEK == 0 || day == last_day {
            rows.push(std::mem::take(&mut row));
        }
    }

    MonthGrid {
        rows,
        selection: Selection::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(y: i32, m: u32) -> CalendarMonth {
        CalendarMonth::new(y, m).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holiday(y: i32, m: u32, d: u32, name: &str) -> HolidayEntry {
        HolidayEntry {
            date: date(y, m, d),
            local_name: name.to_string(),
            name: None,
        }
    }

    fn leading_blanks(row: &[GridCell]) -> usize {
        row.iter().take_while(|c| **c == GridCell::Blank).count()
    }

    #[test]
    fn wednesday_start_31_days() {
        // 2025-01-01 is a Wednesday
        let grid = build_month_grid(month(2025, 0), &[]);
        assert_eq!(grid.rows.len(), 5); // ceil((3 + 31) / 7)
        assert_eq!(leading_blanks(&grid.rows[0]), 3);
        assert_eq!(grid.rows[0].len(), 7);
        assert_eq!(grid.rows[4].len(), 6); // 26..=31, unpadded
    }

    #[test]
    fn every_full_row_has_seven_cells() {
        let grid = build_month_grid(month(2024, 9), &[]);
        let (last, full) = grid.rows.split_last().unwrap();
        assert!(full.iter().all(|r| r.len() == 7));
        assert!(!last.is_empty() && last.len() <= 7);
    }

    #[test]
    fn sunday_start_february_fills_four_rows() {
        // 2015-02-01 is a Sunday and February 2015 has 28 days
        let grid = build_month_grid(month(2015, 1), &[]);
        assert_eq!(grid.rows.len(), 4);
        assert!(grid.rows.iter().all(|r| r.len() == 7));
        assert_eq!(leading_blanks(&grid.rows[0]), 0);
    }

    #[test]
    fn six_row_month() {
        // 2024-03-01 is a Friday: offset 5 + 31 days = 36 cells
        let grid = build_month_grid(month(2024, 2), &[]);
        assert_eq!(grid.rows.len(), 6);
        assert_eq!(grid.rows[5].len(), 1);
    }

    #[test]
    fn days_are_in_order_and_complete() {
        let grid = build_month_grid(month(2024, 9), &[]);
        let days: Vec<u32> = grid.days().map(|d| d.day).collect();
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn mondays_disabled() {
        let grid = build_month_grid(month(2024, 9), &[]);
        assert_eq!(grid.day(date(2024, 10, 7)).unwrap().state, CellState::Disabled);
        assert_eq!(grid.day(date(2024, 10, 8)).unwrap().state, CellState::Selectable);
        // Mondays always fall in column 1
        for row in &grid.rows {
            if let Some(GridCell::Day(d)) = row.get(1) {
                assert_eq!(d.state, CellState::Disabled, "day {}", d.day);
            }
        }
    }

    #[test]
    fn holidays_tagged_and_disabled() {
        let holidays = vec![
            holiday(2024, 10, 3, "개천절"),
            holiday(2024, 10, 9, "한글날"),
        ];
        let grid = build_month_grid(month(2024, 9), &holidays);

        let cell = grid.day(date(2024, 10, 3)).unwrap();
        assert_eq!(cell.holiday.as_deref(), Some("개천절"));
        assert!(cell.is_holiday());
        assert_eq!(cell.state, CellState::Disabled);

        let cell = grid.day(date(2024, 10, 4)).unwrap();
        assert!(!cell.is_holiday());
        assert_eq!(cell.state, CellState::Selectable);
    }

    #[test]
    fn holidays_of_other_months_ignored() {
        let holidays = vec![holiday(2024, 11, 3, "다른 달")];
        let grid = build_month_grid(month(2024, 9), &holidays);
        assert!(grid.days().all(|d| d.holiday.is_none()));
    }

    #[test]
    fn single_selection() {
        let grid = build_month_grid(month(2024, 9), &[])
            .with_selection(Some(date(2024, 10, 8)))
            .with_selection(Some(date(2024, 10, 15)));

        assert_eq!(grid.selected(), Some(date(2024, 10, 15)));
        assert_eq!(grid.days().filter(|d| d.selected).count(), 1);
        assert!(!grid.day(date(2024, 10, 8)).unwrap().selected);
    }

    #[test]
    fn selection_outside_month_clears() {
        let grid = build_month_grid(month(2024, 9), &[])
            .with_selection(Some(date(2024, 10, 8)))
            .with_selection(Some(date(2024, 11, 8)));
        assert_eq!(grid.selected(), None);
        assert!(grid.days().all(|d| !d.selected));
    }

    #[test]
    fn selection_serialized() {
        let grid = build_month_grid(month(2024, 9), &[]);
        assert_eq!(serde_json::to_value(&grid).unwrap()["selected"], serde_json::Value::Null);

        let grid = grid.with_selection(Some(date(2024, 10, 8)));
        assert_eq!(serde_json::to_value(&grid).unwrap()["selected"], "2024-10-08");
    }
}
