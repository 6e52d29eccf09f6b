//! Human-readable travel durations.

/// Output language for formatted durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationLocale {
    /// "1시간 5분" / "5분"
    #[default]
    Korean,
    /// "1h 5m" / "5m"
    English,
}

/// Format a minute count as hours and minutes.
///
/// Minutes are rounded to the nearest whole minute before splitting, so a
/// remainder that rounds to 60 carries into the hour (59.6 → "1시간 0분").
/// Negative or non-finite input renders as zero minutes.
///
/// # Examples
///
/// ```
/// use corkage_server::proximity::{DurationLocale, format_duration};
///
/// assert_eq!(format_duration(5.0, DurationLocale::Korean), "5분");
/// assert_eq!(format_duration(95.0, DurationLocale::Korean), "1시간 35분");
/// assert_eq!(format_duration(95.0, DurationLocale::English), "1h 35m");
/// ```
pub fn format_duration(minutes: f64, locale: DurationLocale) -> String {
    let total = if minutes.is_finite() && minutes > 0.0 {
        minutes.round().min(u64::MAX as f64) as u64
    } else {
        0
    };
    let hours = total / 60;
    let mins = total % 60;

    match (locale, hours) {
        (DurationLocale::Korean, 0) => format!("{mins}분"),
        (DurationLocale::Korean, h) => format!("{h}시간 {mins}분"),
        (DurationLocale::English, 0) => format!("{mins}m"),
        (DurationLocale::English, h) => format!("{h}h {mins}m"),
    }
}
