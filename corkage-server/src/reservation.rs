//! Reservation requests.
//!
//! A draft collects the date, time slot and party size chosen in the
//! calendar widget. Validation turns it into a normalized reservation or
//! explains what is missing.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::Selection;

/// Errors from validating a reservation draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("no date selected")]
    MissingDate,

    #[error("no time selected")]
    MissingTime,

    /// Time is not in "HH:mm" form
    #[error("invalid time {0:?}: expected HH:mm")]
    InvalidTime(String),

    #[error("party size must be at least 1, got {0}")]
    InvalidPeopleCount(i64),

    /// Date is a weekly closure or a public holiday
    #[error("{0} is not available for booking")]
    DateUnavailable(NaiveDate),
}

/// Convert a "HH:mm" time slot to "HH:mm:ss".
///
/// # Examples
///
/// ```
/// use corkage_server::reservation::to_hms;
///
/// assert_eq!(to_hms("18:30").unwrap(), "18:30:00");
/// assert!(to_hms("6:30").is_err());
/// ```
pub fn to_hms(time: &str) -> Result<String, ReservationError> {
    parse_slot(time).map(|t| t.format("%H:%M:%S").to_string())
}

fn parse_slot(time: &str) -> Result<NaiveTime, ReservationError> {
    let well_formed = time.len() == 5
        && time
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 2 { b == b':' } else { b.is_ascii_digit() });
    if !well_formed {
        return Err(ReservationError::InvalidTime(time.to_string()));
    }
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ReservationError::InvalidTime(time.to_string()))
}

/// What the user has picked so far.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationDraft {
    #[serde(default)]
    pub date: Selection<NaiveDate>,
    /// Time slot label, "HH:mm"
    #[serde(default)]
    pub time: Selection<String>,
    #[serde(default)]
    pub people: i64,
}

/// A validated reservation, shaped like the backend's reservations row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub reservation_date: NaiveDate,
    #[serde(serialize_with = "serialize_hms")]
    pub reservation_time: NaiveTime,
    pub people_count: u32,
}

fn serialize_hms<S: serde::Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&time.format("%H:%M:%S"))
}

impl ReservationDraft {
    /// Pick a date, replacing any earlier pick.
    pub fn select_date(self, date: NaiveDate) -> Self {
        Self {
            date: self.date.select(date),
            ..self
        }
    }

    /// Pick a time slot, replacing any earlier pick.
    pub fn select_time(self, slot: impl Into<String>) -> Self {
        Self {
            time: self.time.select(slot.into()),
            ..self
        }
    }

    pub fn with_people(self, people: i64) -> Self {
        Self { people, ..self }
    }

    /// Check the draft against the dates that cannot be booked.
    pub fn validate(&self, unavailable: &BTreeSet<NaiveDate>) -> Result<Reservation, ReservationError> {
        let date = self.date.get().copied().ok_or(ReservationError::MissingDate)?;
        let time = self.time.get().ok_or(ReservationError::MissingTime)?;
        let time = parse_slot(time)?;

        let people_count = u32::try_from(self.people)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ReservationError::InvalidPeopleCount(self.people))?;

        if unavailable.contains(&date) {
            return Err(ReservationError::DateUnavailable(date));
        }

        Ok(Reservation {
            reservation_date: date,
            reservation_time: time,
            people_count,
        })
    }
}
