//! Error types for the poseidon-calendar crate.

/// Error type for all fallible operations in the poseidon-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values, and clock times at the civil date-time boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a clock time has an out-of-range hour, minute, or second.
    #[error("invalid clock time: {hour:02}:{minute:02}:{second:04.1}")]
    InvalidClockTime {
        /// The hour that was provided.
        hour: u8,
        /// The minute that was provided.
        minute: u8,
        /// The second that was provided.
        second: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month 2 (max 28)");
    }

    #[test]
    fn error_invalid_clock_time() {
        let err = CalendarError::InvalidClockTime {
            hour: 24,
            minute: 0,
            second: 0.0,
        };
        assert_eq!(err.to_string(), "invalid clock time: 24:00:00.0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::InvalidMonth { month: 0 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
