//! Validated civil date-time at the API boundary.

use crate::error::CalendarError;
use crate::jd::{cal_to_jd, days_in_month, hms_to_fday};

/// A Gregorian calendar date with clock time, validated on construction.
///
/// The numeric pipeline works in raw Julian days; this type is the checked
/// entry point that turns user-supplied fields into one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: f64,
}

impl CivilDateTime {
    /// Creates a new `CivilDateTime` from date and clock fields.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month (leap years included). Returns
    /// [`CalendarError::InvalidClockTime`] if the hour, minute, or second
    /// is out of range.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month, true);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(CalendarError::InvalidClockTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a `CivilDateTime` at midnight.
    ///
    /// # Errors
    ///
    /// Same as [`CivilDateTime::new`] for the date fields.
    pub fn from_date(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second in [0, 60).
    pub fn second(self) -> f64 {
        self.second
    }

    /// Converts this date-time to a Julian day.
    pub fn to_jd(self) -> f64 {
        let fday = f64::from(self.day) + hms_to_fday(self.hour, self.minute, self.second);
        cal_to_jd(self.year, self.month, fday, true)
    }
}
