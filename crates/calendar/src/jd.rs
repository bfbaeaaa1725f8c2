//! Julian day conversions and day-fraction helpers.
//!
//! The algorithms follow Meeus, *Astronomical Algorithms*, chapter 7. A
//! Julian day is carried as a plain `f64`: whole days since noon UT on
//! 4713 BCE January 1, with the fractional part encoding the time of day.

/// Julian day of the standard epoch J2000.0 (2000 January 1.5 TD).
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Number of days in each month (index 0 unused, index 1 = January, ..., index 12 = December).
///
/// February holds the common-year value; [`days_in_month`] applies the leap rule.
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Converts a calendar date to a Julian day (Meeus 7.1).
///
/// `day` may carry a fractional part for the time of day. January and
/// February are counted as months 13 and 14 of the previous year. With
/// `gregorian` false the proleptic Julian calendar is used instead, which
/// matters for dates before the 1582 changeover.
pub fn cal_to_jd(year: i32, month: u8, day: f64, gregorian: bool) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Converts a Julian day back to `(year, month, day)` with a fractional day.
///
/// Exact inverse of [`cal_to_jd`] over the supported range. A 1e-9 day
/// nudge is applied before the integer/fraction split so that values which
/// should land exactly on a calendar boundary are not split on the wrong
/// side by floating-point noise.
pub fn jd_to_cal(jd: f64, gregorian: bool) -> (i32, u8, f64) {
    let jd = jd + 1e-9;
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if gregorian {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u8, day)
}

/// Splits a fractional day into `(hour, minute, second)`.
///
/// Only the fractional part of `fday` is used, reduced into [0, 1) first,
/// so whole Julian days and negative inputs are handled uniformly.
pub fn fday_to_hms(fday: f64) -> (u8, u8, f64) {
    let dfrac = fday.rem_euclid(1.0);
    let hours = dfrac * 24.0;
    let h = hours.floor();
    let minutes = (hours - h) * 60.0;
    let m = minutes.floor();
    let seconds = (minutes - m) * 60.0;
    (h as u8, m as u8, seconds)
}

/// Converts a clock time to a day fraction in [0, 1).
pub fn hms_to_fday(hour: u8, minute: u8, second: f64) -> f64 {
    f64::from(hour) / 24.0 + f64::from(minute) / 1440.0 + second / 86_400.0
}

/// Returns the day of the week for a Julian day, 0 = Sunday .. 6 = Saturday.
pub fn jd_to_day_of_week(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

/// Reports whether `year` is a leap year.
///
/// The Gregorian rule exempts century years unless divisible by 400; the
/// Julian rule is a plain divisible-by-four test.
pub fn is_leap_year(year: i32, gregorian: bool) -> bool {
    if gregorian {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    } else {
        year % 4 == 0
    }
}

/// Returns the number of days in `month` of `year`.
///
/// `month` must already be validated to 1..=12.
pub(crate) fn days_in_month(year: i32, month: u8, gregorian: bool) -> u8 {
    debug_assert!((1..=12).contains(&month));
    if month == 2 && is_leap_year(year, gregorian) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Converts a calendar date to its day-of-year number (Meeus 7.1).
pub fn cal_to_day_of_year(year: i32, month: u8, day: u8, gregorian: bool) -> u16 {
    let k = if is_leap_year(year, gregorian) { 1 } else { 2 };
    let m = i32::from(month);
    (275 * m / 9 - k * ((m + 9) / 12) + i32::from(day) - 30) as u16
}

/// Converts a day-of-year number back to `(month, day)` (Meeus 7.1).
pub fn day_of_year_to_cal(year: i32, doy: u16, gregorian: bool) -> (u8, u8) {
    let k = if is_leap_year(year, gregorian) { 1 } else { 2 };
    let n = i32::from(doy);
    let month = if n < 32 {
        1
    } else {
        (9.0 * f64::from(k + n) / 275.0 + 0.98) as i32
    };
    let day = n - 275 * month / 9 + k * ((month + 9) / 12) + 30;
    (month as u8, day as u8)
}

/// Converts a Julian day to Julian centuries from J2000.0.
pub fn jd_to_jcent(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn cal_to_jd_meeus_examples() {
        // Meeus 7.a: launch of Sputnik 1, 1957 October 4.81.
        assert_abs_diff_eq!(
            cal_to_jd(1957, 10, 4.81, true),
            2_436_116.31,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(cal_to_jd(2000, 1, 1.5, true), 2_451_545.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cal_to_jd(1999, 1, 1.0, true), 2_451_179.5, epsilon = 1e-6);
        assert_abs_diff_eq!(cal_to_jd(1987, 1, 27.0, true), 2_446_822.5, epsilon = 1e-6);
        assert_abs_diff_eq!(cal_to_jd(1988, 6, 19.5, true), 2_447_332.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cal_to_jd(1600, 1, 1.0, true), 2_305_447.5, epsilon = 1e-6);
        assert_abs_diff_eq!(cal_to_jd(1600, 12, 31.0, true), 2_305_812.5, epsilon = 1e-6);
    }

    #[test]
    fn cal_to_jd_julian_calendar() {
        // Meeus 7.b: 837 April 10.3 in the Julian calendar.
        assert_abs_diff_eq!(
            cal_to_jd(837, 4, 10.3, false),
            2_026_871.8,
            epsilon = 1e-6
        );
    }

    #[test]
    fn jd_to_cal_inverts_meeus_examples() {
        let (year, month, day) = jd_to_cal(2_436_116.31, true);
        assert_eq!((year, month), (1957, 10));
        assert_abs_diff_eq!(day, 4.81, epsilon = 1e-6);

        let (year, month, day) = jd_to_cal(2_451_545.0, true);
        assert_eq!((year, month), (2000, 1));
        assert_abs_diff_eq!(day, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn jd_to_cal_julian_calendar() {
        // Meeus 7.c: JD 1842713.0 is 333 January 27.5 in the Julian calendar.
        let (year, month, day) = jd_to_cal(1_842_713.0, false);
        assert_eq!((year, month), (333, 1));
        assert_abs_diff_eq!(day, 27.5, epsilon = 1e-6);
    }

    #[test]
    fn jd_to_cal_handles_midnight_boundary() {
        // A JD landing exactly on midnight must not report the prior day.
        let jd = cal_to_jd(2004, 10, 16.0, true);
        let (year, month, day) = jd_to_cal(jd, true);
        assert_eq!((year, month), (2004, 10));
        assert_abs_diff_eq!(day, 16.0, epsilon = 1e-6);
    }

    #[test]
    fn fday_to_hms_splits() {
        let (h, m, s) = fday_to_hms(0.5);
        assert_eq!((h, m), (12, 0));
        assert_abs_diff_eq!(s, 0.0, epsilon = 1e-6);

        let (h, m, s) = fday_to_hms(0.75);
        assert_eq!((h, m), (18, 0));
        assert_abs_diff_eq!(s, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn fday_to_hms_uses_fraction_only() {
        // Whole days and negative inputs reduce into [0, 1) first.
        let (h, m, _) = fday_to_hms(16.25);
        assert_eq!((h, m), (6, 0));
        let (h, m, _) = fday_to_hms(-0.25);
        assert_eq!((h, m), (18, 0));
    }

    #[test]
    fn hms_roundtrip() {
        let fday = hms_to_fday(6, 30, 15.0);
        let (h, m, s) = fday_to_hms(fday);
        assert_eq!((h, m), (6, 30));
        assert_abs_diff_eq!(s, 15.0, epsilon = 1e-6);
    }

    #[test]
    fn day_of_week_known_date() {
        // Meeus 7.e: 1954 June 30 was a Wednesday.
        let jd = cal_to_jd(1954, 6, 30.0, true);
        assert_abs_diff_eq!(jd, 2_434_923.5, epsilon = 1e-9);
        assert_eq!(jd_to_day_of_week(jd), 3);
    }

    #[test]
    fn leap_years_gregorian() {
        assert!(is_leap_year(2000, true));
        assert!(is_leap_year(2004, true));
        assert!(!is_leap_year(1900, true));
        assert!(!is_leap_year(1999, true));
    }

    #[test]
    fn leap_years_julian() {
        // 1900 is a leap year under the Julian rule only.
        assert!(is_leap_year(1900, false));
        assert!(is_leap_year(2000, false));
        assert!(!is_leap_year(1999, false));
    }

    #[test]
    fn days_in_month_leap_rule() {
        assert_eq!(days_in_month(2004, 2, true), 29);
        assert_eq!(days_in_month(2003, 2, true), 28);
        assert_eq!(days_in_month(1900, 2, true), 28);
        assert_eq!(days_in_month(2004, 1, true), 31);
        assert_eq!(days_in_month(2004, 4, true), 30);
    }

    #[test]
    fn day_of_year_meeus_examples() {
        // Meeus 7.f and 7.g.
        assert_eq!(cal_to_day_of_year(1978, 11, 14, true), 318);
        assert_eq!(cal_to_day_of_year(1988, 4, 22, true), 113);
    }

    #[test]
    fn day_of_year_to_cal_inverts() {
        assert_eq!(day_of_year_to_cal(1978, 318, true), (11, 14));
        assert_eq!(day_of_year_to_cal(1988, 113, true), (4, 22));
        assert_eq!(day_of_year_to_cal(2004, 1, true), (1, 1));
        assert_eq!(day_of_year_to_cal(2004, 366, true), (12, 31));
    }

    #[test]
    fn jcent_known_value() {
        // Meeus 12.a: 1987 April 10.0 TD.
        assert_relative_eq!(
            jd_to_jcent(2_446_895.5),
            -0.127_296_372_348,
            epsilon = 1e-9
        );
    }
}
