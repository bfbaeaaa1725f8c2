//! Astronomical arguments of the equilibrium tide (Schureman, 1976).

use crate::constituent::{CATALOG, NUM_CONSTITUENTS};

/// Degrees to radians, truncated to the precision Schureman's tables carry.
pub(crate) const RAD: f64 = 0.017_453_292_519_943;

/// Mean longitudes of the slow orbital elements, in degrees [0, 360).
#[derive(Debug, Clone, Copy)]
pub(crate) struct MeanLongitudes {
    /// Moon.
    pub s: f64,
    /// Sun.
    pub h: f64,
    /// Lunar perigee.
    pub p: f64,
    /// Solar perigee.
    pub p1: f64,
}

/// Evaluates the mean-longitude polynomials at `days_since_epoch`.
///
/// The polynomials are Schureman's, in Julian centuries from the 1900.0
/// epoch (JD 2415020.0); `days_since_epoch` counts from 2000 January 1,
/// 00:00 UT, hence the 36524.5-day shift.
pub(crate) fn mean_longitudes(days_since_epoch: f64) -> MeanLongitudes {
    let t = (days_since_epoch + 36_524.5) / 36_525.0;
    MeanLongitudes {
        s: (270.437 + 481_267.892 * t + 0.0025 * t * t).rem_euclid(360.0),
        h: (279.697 + 36_000.769 * t + 0.0003 * t * t).rem_euclid(360.0),
        p: (334.328 + 4_069.040 * t - 0.0103 * t * t).rem_euclid(360.0),
        p1: (281.221 + 1.719 * t + 0.0005 * t * t).rem_euclid(360.0),
    }
}

/// Equilibrium phase V0 for each catalog constituent, in radians.
///
/// `days_since_epoch` counts from 2000 January 1, 00:00 UT. The daily
/// rotation enters as `species x 360 deg x frac(days)`; the slow part is
/// the catalog's combination of mean longitudes plus its constant offset.
/// The result is not reduced modulo 2π; callers feed it straight into
/// `cos`.
pub fn equilibrium_phases(days_since_epoch: f64) -> [f64; NUM_CONSTITUENTS] {
    let dphase = 360.0 * days_since_epoch.rem_euclid(1.0);
    let ml = mean_longitudes(days_since_epoch);

    let mut v0 = [0.0; NUM_CONSTITUENTS];
    for (slot, def) in v0.iter_mut().zip(CATALOG.iter()) {
        let slow = f64::from(def.s) * ml.s
            + f64::from(def.h) * ml.h
            + f64::from(def.p) * ml.p
            + f64::from(def.p1) * ml.p1
            + def.offset_deg;
        *slot = RAD * (f64::from(def.species) * dphase + slow);
    }
    v0
}
