//! ISO-like date-time rendering at selectable precision.

use crate::jd::{fday_to_hms, jd_to_cal};

/// Three-letter English month abbreviations (index 0 unused, index 1 = January).
pub(crate) const MONTH_ABBREV: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Truncation level for [`jd_to_iso`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoPrecision {
    /// `YYYY-Mon-DD`
    Day,
    /// `YYYY-Mon-DD HH ZONE`
    Hour,
    /// `YYYY-Mon-DD HH:MM ZONE`
    Minute,
    /// `YYYY-Mon-DD HH:MM:SS ZONE`
    Second,
}

/// Formats a Julian day as `YYYY-Mon-DD HH:MM:SS ZONE`, truncated at `precision`.
///
/// The zone label is caller-supplied display text; no conversion is applied
/// here. Seconds are truncated, not rounded.
pub fn jd_to_iso(jd: f64, zone: &str, precision: IsoPrecision) -> String {
    let (year, month, day) = jd_to_cal(jd, true);
    let (hour, minute, second) = fday_to_hms(day);
    let day = day as u32;
    let mon = MONTH_ABBREV[month as usize];
    match precision {
        IsoPrecision::Day => format!("{year}-{mon}-{day:02}"),
        IsoPrecision::Hour => format!("{year}-{mon}-{day:02} {hour:02} {zone}"),
        IsoPrecision::Minute => format!("{year}-{mon}-{day:02} {hour:02}:{minute:02} {zone}"),
        IsoPrecision::Second => {
            let second = second as u32;
            format!("{year}-{mon}-{day:02} {hour:02}:{minute:02}:{second:02} {zone}")
        }
    }
}
