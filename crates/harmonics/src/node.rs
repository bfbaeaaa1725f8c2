//! Lunar node corrections f and u (Schureman tables).

use crate::astro::RAD;
use crate::constituent::NUM_CONSTITUENTS;

/// Per-constituent node corrections for one 30.5-day window.
///
/// `f` scales each amplitude and `u` shifts each phase (radians). Both
/// arrays are positionally aligned with [`CATALOG`](crate::CATALOG). The
/// corrections track the 18.6-year regression of the Moon's ascending
/// node and are treated as constant within a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeFactors {
    f: [f64; NUM_CONSTITUENTS],
    u: [f64; NUM_CONSTITUENTS],
}

impl NodeFactors {
    /// Identity corrections: unit amplitude factors and zero phase shifts.
    pub fn unity() -> Self {
        Self {
            f: [1.0; NUM_CONSTITUENTS],
            u: [0.0; NUM_CONSTITUENTS],
        }
    }

    /// Amplitude factors, aligned with the catalog.
    pub fn f(&self) -> &[f64; NUM_CONSTITUENTS] {
        &self.f
    }

    /// Phase corrections in radians, aligned with the catalog.
    pub fn u(&self) -> &[f64; NUM_CONSTITUENTS] {
        &self.u
    }
}

/// Computes the node corrections at `days_since_epoch` (from 2000-01-01
/// 00:00 UT).
///
/// Uses Schureman's closed forms: the lunisolar inclination I stays in
/// roughly 18.3 to 28.6 degrees over the nodal cycle, so none of the trig
/// quotients below can degenerate for real dates. Synthesis evaluates
/// this at the midpoint of each 30.5-day window.
pub fn node_factors(days_since_epoch: f64) -> NodeFactors {
    let t = (days_since_epoch + 36_524.5) / 36_525.0;
    let n = RAD * (259.183 - 1_934.142 * t + 0.0021 * t * t).rem_euclid(360.0);
    let p = RAD * (334.328 + 4_069.040 * t - 0.0103 * t * t).rem_euclid(360.0);

    // Inclination of the Moon's orbit to the equator and the auxiliary
    // angles nu, eta (Schureman's xi), nu', and 2nu''.
    let inc = (0.913_694_9 - 0.035_696 * n.cos()).acos();
    let nu = (0.089_705_6 * n.sin() / inc.sin()).asin();
    let eta = (inc.cos() * nu.tan()).atan();
    let nup = ((nu.sin() * (2.0 * inc).sin()) / (nu.cos() * (2.0 * inc).sin() + 0.3347)).atan();
    let nupp2 = (((2.0 * nu).sin() * inc.sin().powi(2))
        / ((2.0 * nu).cos() * inc.sin().powi(2) + 0.0727))
        .atan();
    let pp = p - eta;

    // Factors shared across table rows.
    let f_m2 = (inc / 2.0).cos().powi(4) / 0.9154;
    let f_o1 = inc.sin() * (inc / 2.0).cos().powi(2) / 0.379_88;
    let f_k1 = (0.8965 * (2.0 * inc).sin().powi(2) + 0.6001 * (2.0 * inc).sin() * nu.cos()
        + 0.1006)
        .sqrt();
    let f_k2 = (19.0444 * inc.sin().powi(4) + 2.7702 * (2.0 * nu).cos() * inc.sin().powi(2)
        + 0.0981)
        .sqrt();
    // M1 and L2 also swing with the perigee, through Q_a and R_a.
    let q_a = (0.25 + 1.5 * inc.cos() * (2.0 * pp).cos() / (inc / 2.0).cos().powi(2)
        + 2.25 * inc.cos().powi(2) / (inc / 2.0).cos().powi(4))
        .sqrt();
    let r_a = (1.0 - 12.0 * (inc / 2.0).tan().powi(2) * (2.0 * pp).cos()
        + 36.0 * (inc / 2.0).tan().powi(4))
        .sqrt();

    #[rustfmt::skip]
    let f = [
        1.0,                                                 // SA
        1.0,                                                 // SSA
        (2.0 / 3.0 - inc.sin().powi(2)) / 0.5021,            // MM
        f_m2,                                                // MSF
        inc.sin().powi(2) / 0.1578,                          // MF
        f_o1,                                                // 2Q1
        f_o1,                                                // Q1
        f_o1,                                                // RHO
        f_o1,                                                // O1
        f_o1 * q_a,                                          // M1
        1.0,                                                 // P1
        1.0,                                                 // S1
        f_k1,                                                // K1
        (2.0 * inc).sin() / 0.721_37,                        // J1
        inc.sin() * (inc / 2.0).sin().powi(2) / 0.016_358,   // OO1
        f_m2,                                                // 2N2
        f_m2,                                                // MU2
        f_m2,                                                // N2
        f_m2,                                                // NU2
        f_m2,                                                // M2
        f_m2,                                                // LAM2
        f_m2 * r_a,                                          // L2
        1.0,                                                 // T2
        1.0,                                                 // S2
        1.0,                                                 // R2
        f_k2,                                                // K2
        f_m2,                                                // 2SM2
        f_m2 * f_m2 * f_k1,                                  // 2MK3
        (inc / 2.0).cos().powi(6) / 0.8758,                  // M3
        f_m2 * f_k1,                                         // MK3
        f_m2 * f_m2,                                         // MN4
        f_m2 * f_m2,                                         // M4
        f_m2 * f_m2,                                         // MS4
        1.0,                                                 // S4
        f_m2.powi(3),                                        // M6
        1.0,                                                 // S6
        f_m2.powi(4),                                        // M8
    ];

    let q = (0.483 * pp.tan()).atan();
    let r = ((2.0 * pp).sin() / (1.0 / (6.0 * (inc / 2.0).tan().powi(2)) - (2.0 * pp).cos())).atan();

    #[rustfmt::skip]
    let u = [
        0.0,                            // SA
        0.0,                            // SSA
        0.0,                            // MM
        0.0,                            // MSF
        -2.0 * eta,                     // MF
        2.0 * eta - nu,                 // 2Q1
        2.0 * eta - nu,                 // Q1
        2.0 * eta - nu,                 // RHO
        2.0 * eta - nu,                 // O1
        eta - nu + q,                   // M1
        0.0,                            // P1
        0.0,                            // S1
        -nup,                           // K1
        -nu,                            // J1
        -2.0 * eta - nu,                // OO1
        2.0 * eta - 2.0 * nu,           // 2N2
        2.0 * eta - 2.0 * nu,           // MU2
        2.0 * eta - 2.0 * nu,           // N2
        2.0 * eta - 2.0 * nu,           // NU2
        2.0 * eta - 2.0 * nu,           // M2
        2.0 * eta - 2.0 * nu,           // LAM2
        2.0 * eta - 2.0 * nu - r,       // L2
        0.0,                            // T2
        0.0,                            // S2
        0.0,                            // R2
        -nupp2,                         // K2
        -2.0 * eta + 2.0 * nu,          // 2SM2
        4.0 * eta - 4.0 * nu + nup,     // 2MK3
        3.0 * eta - 3.0 * nu,           // M3
        2.0 * eta - 2.0 * nu - nup,     // MK3
        4.0 * eta - 4.0 * nu,           // MN4
        4.0 * eta - 4.0 * nu,           // M4
        2.0 * eta - 2.0 * nu,           // MS4
        0.0,                            // S4
        6.0 * eta - 6.0 * nu,           // M6
        0.0,                            // S6
        8.0 * eta - 8.0 * nu,           // M8
    ];

    NodeFactors { f, u }
}
