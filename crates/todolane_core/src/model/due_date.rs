//! Due-date calendar instant.
//!
//! # Responsibility
//! - Wrap a naive local calendar instant with minute precision.
//! - Provide the relative constructors the metadata mini-language needs.
//!
//! # Invariants
//! - A `DueDate` always holds a real calendar date; impossible dates are
//!   rejected at construction.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use std::fmt::{Display, Formatter};

/// Calendar due date with minute precision, compared structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DueDate(NaiveDateTime);

impl DueDate {
    /// Due at the end of today (23:59 local time).
    pub fn today() -> Self {
        Self::end_of_day(Local::now().date_naive())
    }

    /// Due at the end of tomorrow (23:59 local time).
    pub fn tomorrow() -> Self {
        Self::end_of_day(Local::now().date_naive() + Duration::days(1))
    }

    /// Builds a due date from calendar fields. Month is 1..=12.
    ///
    /// Returns `None` when the fields do not name a real instant
    /// (e.g. February 30th, hour 25).
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self(date.and_hms_opt(hour, minute, 0)?))
    }

    fn end_of_day(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(23, 59, 0).expect("23:59 is a valid wall-clock time"))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl Display for DueDate {
    /// Renders e.g. `Sun Aug 23 2026 11:59 PM`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%a %b %-d %Y %-I:%M %p"))
    }
}

#[cfg(test)]
mod tests {
    use super::DueDate;

    #[test]
    fn relative_constructors_end_at_2359() {
        let today = DueDate::today();
        assert_eq!(today.hour(), 23);
        assert_eq!(today.minute(), 59);

        let tomorrow = DueDate::tomorrow();
        assert_eq!(tomorrow.hour(), 23);
        assert_eq!(tomorrow.minute(), 59);
        assert!(today < tomorrow);
    }

    #[test]
    fn from_ymd_hm_roundtrips_fields() {
        let due = DueDate::from_ymd_hm(2026, 8, 23, 14, 5).expect("valid calendar fields");
        assert_eq!(due.year(), 2026);
        assert_eq!(due.month(), 8);
        assert_eq!(due.day(), 23);
        assert_eq!(due.hour(), 14);
        assert_eq!(due.minute(), 5);
    }

    #[test]
    fn from_ymd_hm_rejects_impossible_dates() {
        assert!(DueDate::from_ymd_hm(2026, 2, 30, 0, 0).is_none());
        assert!(DueDate::from_ymd_hm(2026, 13, 1, 0, 0).is_none());
        assert!(DueDate::from_ymd_hm(2026, 8, 23, 25, 0).is_none());
        assert!(DueDate::from_ymd_hm(2026, 8, 23, 12, 61).is_none());
    }

    #[test]
    fn display_names_weekday_and_meridiem() {
        let due = DueDate::from_ymd_hm(2026, 8, 23, 23, 59).expect("valid calendar fields");
        assert_eq!(due.to_string(), "Sun Aug 23 2026 11:59 PM");
    }
}
