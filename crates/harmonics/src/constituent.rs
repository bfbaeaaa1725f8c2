//! The harmonic constituent catalog and validated constituent sets.

use std::collections::BTreeMap;

use crate::astro::RAD;
use crate::error::HarmonicsError;

/// Number of harmonic constituents in the catalog.
pub const NUM_CONSTITUENTS: usize = 37;

/// Static definition of one tidal constituent.
///
/// `species` is the multiplier of the daily rotation phase (0 for
/// long-period terms through 8 for the eighth-diurnal M8). The remaining
/// fields are the Schureman equilibrium-argument coefficients: integer
/// multiples of the mean longitudes of the Moon (`s`), the Sun (`h`), the
/// lunar perigee (`p`), and the solar perigee (`p1`), plus a constant
/// offset in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstituentDef {
    /// Conventional constituent name, upper case.
    pub name: &'static str,
    /// Species: cycles per day contributed by the Earth's rotation.
    pub species: u8,
    /// Coefficient of the Moon's mean longitude.
    pub s: i8,
    /// Coefficient of the Sun's mean longitude.
    pub h: i8,
    /// Coefficient of the lunar perigee longitude.
    pub p: i8,
    /// Coefficient of the solar perigee longitude.
    pub p1: i8,
    /// Constant phase offset in degrees.
    pub offset_deg: f64,
}

const fn def(
    name: &'static str,
    species: u8,
    s: i8,
    h: i8,
    p: i8,
    p1: i8,
    offset_deg: f64,
) -> ConstituentDef {
    ConstituentDef {
        name,
        species,
        s,
        h,
        p,
        p1,
        offset_deg,
    }
}

/// The 37-constituent catalog, in the fixed order every positional array
/// in this crate is aligned with.
///
/// Order and coefficients follow Schureman (1976) as used by the Puget
/// Sound channel model. The order is load-bearing: amplitudes, phase
/// lags, equilibrium phases, and node corrections are all indexed by
/// position in this table.
#[rustfmt::skip]
pub const CATALOG: [ConstituentDef; NUM_CONSTITUENTS] = [
    def("SA",   0,  0, 1,  0,  0,   0.0),
    def("SSA",  0,  0, 2,  0,  0,   0.0),
    def("MM",   0,  1, 0, -1,  0,   0.0),
    def("MSF",  0,  2, 0, -2,  0,   0.0),
    def("MF",   0,  2, 0,  0,  0,   0.0),
    def("2Q1",  1, -4, 1,  2,  0, -90.0),
    def("Q1",   1, -3, 1,  1,  0, -90.0),
    def("RHO",  1, -3, 3, -1,  0, -90.0),
    def("O1",   1, -2, 1,  0,  0, -90.0),
    def("M1",   1, -1, 1,  0,  0, -90.0),
    def("P1",   1,  0, -1, 0,  0, -90.0),
    def("S1",   1,  0, 0,  0,  0, 180.0),
    def("K1",   1,  0, 1,  0,  0,  90.0),
    def("J1",   1,  1, 1, -1,  0,  90.0),
    def("OO1",  1,  2, 1,  0,  0,  90.0),
    def("2N2",  2, -4, 2,  2,  0,   0.0),
    def("MU2",  2, -4, 4,  0,  0,   0.0),
    def("N2",   2, -3, 2,  1,  0,   0.0),
    def("NU2",  2, -3, 4, -1,  0,   0.0),
    def("M2",   2, -2, 2,  0,  0,   0.0),
    def("LAM2", 2, -1, 0,  1,  0, 180.0),
    def("L2",   2, -1, 2, -1,  0, 180.0),
    def("T2",   2,  0, -1, 0,  1,   0.0),
    def("S2",   2,  0, 0,  0,  0,   0.0),
    def("R2",   2,  0, 1,  0, -1, 180.0),
    def("K2",   2,  0, 2,  0,  0,   0.0),
    def("2SM2", 2,  2, -2, 0,  0,   0.0),
    def("2MK3", 3, -4, 3,  0,  0, -90.0),
    def("M3",   3, -3, 3,  0,  0, 180.0),
    def("MK3",  3, -2, 3,  0,  0,  90.0),
    def("MN4",  4, -5, 4,  1,  0,   0.0),
    def("M4",   4, -4, 4,  0,  0,   0.0),
    def("MS4",  4, -2, 2,  0,  0,   0.0),
    def("S4",   4,  0, 0,  0,  0,   0.0),
    def("M6",   6, -6, 6,  0,  0,   0.0),
    def("S6",   6,  0, 0,  0,  0,   0.0),
    def("M8",   8, -8, 8,  0,  0,   0.0),
];

/// Returns the catalog position of `name`, if it is a known constituent.
pub fn constituent_index(name: &str) -> Option<usize> {
    CATALOG.iter().position(|def| def.name == name)
}

/// A station's harmonic constants, validated and flattened for synthesis.
///
/// Station files key amplitude/phase pairs by constituent name;
/// [`ConstituentSet::from_named`] is the single place where that named
/// form is checked against the catalog and flattened into positional
/// arrays. Amplitudes are in meters; phase lags are taken in degrees and
/// stored as radians reduced to [0, 2π).
#[derive(Debug, Clone)]
pub struct ConstituentSet {
    mean: f64,
    amplitudes: [f64; NUM_CONSTITUENTS],
    phase_lags: [f64; NUM_CONSTITUENTS],
}

impl ConstituentSet {
    /// Builds a set from a named map of `(amplitude_m, phase_deg)` pairs.
    ///
    /// All 37 catalog constituents must be present, each exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`HarmonicsError::UnknownConstituent`] if the map names a
    /// constituent outside the catalog,
    /// [`HarmonicsError::MissingConstituent`] if a catalog entry has no
    /// pair, [`HarmonicsError::InvalidAmplitude`] or
    /// [`HarmonicsError::InvalidPhase`] for non-finite or negative
    /// values, and [`HarmonicsError::InvalidMean`] if `mean` is not
    /// finite.
    pub fn from_named(
        mean: f64,
        named: &BTreeMap<String, (f64, f64)>,
    ) -> Result<Self, HarmonicsError> {
        if !mean.is_finite() {
            return Err(HarmonicsError::InvalidMean { value: mean });
        }
        for name in named.keys() {
            if constituent_index(name).is_none() {
                return Err(HarmonicsError::UnknownConstituent { name: name.clone() });
            }
        }

        let mut amplitudes = [0.0; NUM_CONSTITUENTS];
        let mut phase_lags = [0.0; NUM_CONSTITUENTS];
        for (i, def) in CATALOG.iter().enumerate() {
            let &(amplitude, phase_deg) =
                named
                    .get(def.name)
                    .ok_or_else(|| HarmonicsError::MissingConstituent {
                        name: def.name.to_string(),
                    })?;
            if !amplitude.is_finite() || amplitude < 0.0 {
                return Err(HarmonicsError::InvalidAmplitude {
                    name: def.name.to_string(),
                    value: amplitude,
                });
            }
            if !phase_deg.is_finite() {
                return Err(HarmonicsError::InvalidPhase {
                    name: def.name.to_string(),
                    value: phase_deg,
                });
            }
            amplitudes[i] = amplitude;
            phase_lags[i] = RAD * phase_deg.rem_euclid(360.0);
        }

        Ok(Self {
            mean,
            amplitudes,
            phase_lags,
        })
    }

    /// Returns the mean water level in meters above the station datum.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the amplitudes in meters, aligned with [`CATALOG`].
    pub fn amplitudes(&self) -> &[f64; NUM_CONSTITUENTS] {
        &self.amplitudes
    }

    /// Returns the phase lags in radians [0, 2π), aligned with [`CATALOG`].
    pub fn phase_lags(&self) -> &[f64; NUM_CONSTITUENTS] {
        &self.phase_lags
    }

    /// Returns the amplitude in meters for a named constituent.
    pub fn amplitude(&self, name: &str) -> Option<f64> {
        constituent_index(name).map(|i| self.amplitudes[i])
    }

    /// Returns the phase lag in radians for a named constituent.
    pub fn phase_lag(&self, name: &str) -> Option<f64> {
        constituent_index(name).map(|i| self.phase_lags[i])
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    /// A complete named map with all amplitudes and phases zero.
    fn zero_map() -> BTreeMap<String, (f64, f64)> {
        CATALOG
            .iter()
            .map(|def| (def.name.to_string(), (0.0, 0.0)))
            .collect()
    }

    #[test]
    fn catalog_has_37_unique_names() {
        assert_eq!(CATALOG.len(), NUM_CONSTITUENTS);
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate constituent name {}", a.name);
            }
        }
    }

    #[test]
    fn catalog_species_ladder() {
        let count = |species: u8| CATALOG.iter().filter(|d| d.species == species).count();
        assert_eq!(count(0), 5);
        assert_eq!(count(1), 10);
        assert_eq!(count(2), 12);
        assert_eq!(count(3), 3);
        assert_eq!(count(4), 4);
        assert_eq!(count(6), 2);
        assert_eq!(count(8), 1);
    }

    #[test]
    fn catalog_species_blocks_are_contiguous() {
        // Long-period terms first, then ascending species.
        let mut prev = 0;
        for def in &CATALOG {
            assert!(
                def.species >= prev,
                "species out of order at {}: {} after {prev}",
                def.name,
                def.species
            );
            prev = def.species;
        }
    }

    #[test]
    fn index_lookup() {
        assert_eq!(constituent_index("SA"), Some(0));
        assert_eq!(constituent_index("M2"), Some(19));
        assert_eq!(constituent_index("S2"), Some(23));
        assert_eq!(constituent_index("M8"), Some(36));
        assert_eq!(constituent_index("XX"), None);
        // Names are case sensitive.
        assert_eq!(constituent_index("m2"), None);
    }

    #[test]
    fn from_named_valid() {
        let mut named = zero_map();
        named.insert("M2".to_string(), (1.07, 10.0));
        named.insert("K1".to_string(), (0.83, 280.5));
        let set = ConstituentSet::from_named(2.01, &named).unwrap();

        assert_abs_diff_eq!(set.mean(), 2.01);
        assert_abs_diff_eq!(set.amplitude("M2").unwrap(), 1.07);
        assert_abs_diff_eq!(set.amplitude("K1").unwrap(), 0.83);
        assert_abs_diff_eq!(set.amplitude("S2").unwrap(), 0.0);
        assert_abs_diff_eq!(set.phase_lag("M2").unwrap(), RAD * 10.0, epsilon = 1e-12);
        assert_eq!(set.amplitudes()[19], 1.07);
    }

    #[test]
    fn from_named_missing_constituent() {
        let mut named = zero_map();
        named.remove("NU2");
        assert_eq!(
            ConstituentSet::from_named(0.0, &named).unwrap_err(),
            HarmonicsError::MissingConstituent {
                name: "NU2".to_string(),
            }
        );
    }

    #[test]
    fn from_named_unknown_constituent() {
        let mut named = zero_map();
        named.insert("Z9".to_string(), (0.1, 0.0));
        assert_eq!(
            ConstituentSet::from_named(0.0, &named).unwrap_err(),
            HarmonicsError::UnknownConstituent {
                name: "Z9".to_string(),
            }
        );
    }

    #[test]
    fn from_named_negative_amplitude() {
        let mut named = zero_map();
        named.insert("O1".to_string(), (-0.2, 0.0));
        assert_eq!(
            ConstituentSet::from_named(0.0, &named).unwrap_err(),
            HarmonicsError::InvalidAmplitude {
                name: "O1".to_string(),
                value: -0.2,
            }
        );
    }

    #[test]
    fn from_named_non_finite_values() {
        let mut named = zero_map();
        named.insert("M2".to_string(), (f64::NAN, 0.0));
        assert!(matches!(
            ConstituentSet::from_named(0.0, &named).unwrap_err(),
            HarmonicsError::InvalidAmplitude { .. }
        ));

        let mut named = zero_map();
        named.insert("M2".to_string(), (0.5, f64::INFINITY));
        assert!(matches!(
            ConstituentSet::from_named(0.0, &named).unwrap_err(),
            HarmonicsError::InvalidPhase { .. }
        ));

        assert!(matches!(
            ConstituentSet::from_named(f64::NAN, &zero_map()).unwrap_err(),
            HarmonicsError::InvalidMean { .. }
        ));
    }

    #[test]
    fn phase_lags_normalize_to_principal_range() {
        let mut wrapped = zero_map();
        wrapped.insert("M2".to_string(), (1.0, 370.0));
        let mut plain = zero_map();
        plain.insert("M2".to_string(), (1.0, 10.0));

        let a = ConstituentSet::from_named(0.0, &wrapped).unwrap();
        let b = ConstituentSet::from_named(0.0, &plain).unwrap();
        assert_abs_diff_eq!(
            a.phase_lag("M2").unwrap(),
            b.phase_lag("M2").unwrap(),
            epsilon = 1e-12
        );

        let mut negative = zero_map();
        negative.insert("K1".to_string(), (1.0, -10.0));
        let set = ConstituentSet::from_named(0.0, &negative).unwrap();
        assert_abs_diff_eq!(
            set.phase_lag("K1").unwrap(),
            RAD * 350.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_amplitude_is_valid() {
        let set = ConstituentSet::from_named(1.5, &zero_map()).unwrap();
        assert!(set.amplitudes().iter().all(|&a| a == 0.0));
    }
}
