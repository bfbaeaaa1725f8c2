//! Pacific time zone offsets and the legacy United States DST rule.

use crate::jd::{cal_to_jd, jd_to_cal, jd_to_day_of_week};

/// Pacific standard time offset from UT, in days (UTC-8).
pub const PST_OFFSET_DAYS: f64 = 8.0 / 24.0;

/// Pacific daylight time offset from UT, in days (UTC-7).
pub const PDT_OFFSET_DAYS: f64 = 7.0 / 24.0;

/// Reports whether `jd` falls inside the daylight-saving window.
///
/// Implements the pre-2007 United States rule: daylight time runs from the
/// first Sunday of April at 02:00 local to the last Sunday of October at
/// 02:00 local. The window bounds are shifted to UT with the supplied
/// offsets, so passing zeros evaluates the rule directly against a
/// local-time instant. The United States moved to a March/November window
/// in 2007; this module keeps the historical rule on purpose.
pub fn is_dst(jd: f64, standard_offset: f64, daylight_offset: f64) -> bool {
    let (year, _, _) = jd_to_cal(jd, true);

    // First Sunday in April, 02:00, expressed in UT via the standard offset.
    let mut start = cal_to_jd(year, 4, 1.0, true);
    let dow = jd_to_day_of_week(start);
    if dow != 0 {
        start += f64::from(7 - dow);
    }
    start += 2.0 / 24.0 + standard_offset;
    if jd < start {
        return false;
    }

    // Last Sunday in October, 02:00, expressed in UT via the daylight offset.
    let mut stop = cal_to_jd(year, 10, 31.0, true);
    let dow = jd_to_day_of_week(stop);
    stop -= f64::from(dow);
    stop += 2.0 / 24.0 + daylight_offset;
    jd < stop
}

/// Converts a Pacific local instant to UT.
///
/// The daylight test runs on the local instant itself with zero offsets,
/// so wall-clock times inside the one-hour changeover carry the usual
/// spring-forward/fall-back ambiguity.
pub fn lt_to_ut(jd: f64) -> f64 {
    if is_dst(jd, 0.0, 0.0) {
        jd + PDT_OFFSET_DAYS
    } else {
        jd + PST_OFFSET_DAYS
    }
}

/// Converts a UT instant to Pacific local time with its zone label.
pub fn ut_to_lt(jd: f64) -> (f64, &'static str) {
    if is_dst(jd, PST_OFFSET_DAYS, PDT_OFFSET_DAYS) {
        (jd - PDT_OFFSET_DAYS, "PDT")
    } else {
        (jd - PST_OFFSET_DAYS, "PST")
    }
}
