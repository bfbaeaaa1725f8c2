//! Greenwich mean sidereal time.

use crate::jd::{J2000, jd_to_jcent};

/// Mean sidereal time at Greenwich in radians (Meeus 12.4).
///
/// Valid for any instant, not just 0h UT.
pub fn sidereal_time_greenwich(jd: f64) -> f64 {
    let t = jd_to_jcent(jd);
    let theta0 = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta0.rem_euclid(360.0).to_radians()
}
