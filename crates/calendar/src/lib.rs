//! # poseidon-calendar
//!
//! Calendar and time arithmetic for tide prediction: Julian day
//! conversions after Meeus, Pacific zone handling with the legacy US
//! daylight-saving rule, and date-time rendering.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDateTime"] -->|".to_jd()"| B["Julian day (f64)"]
//!     B -->|"jd_to_cal()"| C["(year, month, day.frac)"]
//!     B -->|"lt_to_ut() / ut_to_lt()"| B
//!     B -->|"jd_to_iso()"| D["display string"]
//!     B -->|"sidereal_time_greenwich()"| E["radians"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use poseidon_calendar::{IsoPrecision, cal_to_jd, jd_to_cal, jd_to_iso, ut_to_lt};
//!
//! // Meeus 7.a: 1957 October 4.81 (launch of Sputnik 1)
//! let jd = cal_to_jd(1957, 10, 4.81, true);
//! assert!((jd - 2_436_116.31).abs() < 1e-6);
//!
//! // Back to the calendar
//! let (year, month, day) = jd_to_cal(jd, true);
//!
//! // Pacific wall clock with zone label
//! let (local, zone) = ut_to_lt(jd);
//! let text = jd_to_iso(local, zone, IsoPrecision::Minute);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `jd` | Julian day conversions and day-fraction helpers |
//! | `date` | Validated civil date-time entry point |
//! | `zone` | Pacific offsets and the legacy US DST window |
//! | `format` | ISO-like rendering at selectable precision |
//! | `sidereal` | Greenwich mean sidereal time |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod jd;
mod sidereal;
mod zone;

pub use date::CivilDateTime;
pub use error::CalendarError;
pub use format::{IsoPrecision, jd_to_iso};
pub use jd::{
    DAYS_PER_CENTURY, J2000, cal_to_day_of_year, cal_to_jd, day_of_year_to_cal, fday_to_hms,
    hms_to_fday, is_leap_year, jd_to_cal, jd_to_day_of_week, jd_to_jcent,
};
pub use sidereal::sidereal_time_greenwich;
pub use zone::{PDT_OFFSET_DAYS, PST_OFFSET_DAYS, is_dst, lt_to_ut, ut_to_lt};
