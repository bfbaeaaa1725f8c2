//! Error types for the poseidon-harmonics crate.

/// Error type for all fallible operations in the poseidon-harmonics crate.
///
/// Every variant is raised while building a
/// [`ConstituentSet`](crate::ConstituentSet); once a set exists, synthesis
/// itself cannot fail. A station record with a gap or a typo is rejected
/// outright, never patched with a default amplitude.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HarmonicsError {
    /// Returned when a catalog constituent has no entry in the input map.
    #[error("missing constituent: {name}")]
    MissingConstituent {
        /// The catalog name with no supplied amplitude/phase pair.
        name: String,
    },

    /// Returned when the input map names a constituent not in the catalog.
    #[error("unknown constituent: {name:?}")]
    UnknownConstituent {
        /// The unrecognized name as supplied.
        name: String,
    },

    /// Returned when an amplitude is negative or not finite.
    #[error("invalid amplitude for {name}: {value} (must be finite and >= 0)")]
    InvalidAmplitude {
        /// The constituent whose amplitude is invalid.
        name: String,
        /// The invalid amplitude in meters.
        value: f64,
    },

    /// Returned when a phase lag is not finite.
    #[error("invalid phase lag for {name}: {value} (must be finite)")]
    InvalidPhase {
        /// The constituent whose phase lag is invalid.
        name: String,
        /// The invalid phase lag in degrees.
        value: f64,
    },

    /// Returned when the mean water level is not finite.
    #[error("invalid mean water level: {value} (must be finite)")]
    InvalidMean {
        /// The invalid mean in meters.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_constituent() {
        let err = HarmonicsError::MissingConstituent {
            name: "M2".to_string(),
        };
        assert_eq!(err.to_string(), "missing constituent: M2");
    }

    #[test]
    fn error_unknown_constituent() {
        let err = HarmonicsError::UnknownConstituent {
            name: "M99".to_string(),
        };
        assert_eq!(err.to_string(), "unknown constituent: \"M99\"");
    }

    #[test]
    fn error_invalid_amplitude() {
        let err = HarmonicsError::InvalidAmplitude {
            name: "K1".to_string(),
            value: -0.5,
        };
        assert_eq!(
            err.to_string(),
            "invalid amplitude for K1: -0.5 (must be finite and >= 0)"
        );
    }

    #[test]
    fn error_invalid_phase() {
        let err = HarmonicsError::InvalidPhase {
            name: "O1".to_string(),
            value: f64::NAN,
        };
        assert_eq!(
            err.to_string(),
            "invalid phase lag for O1: NaN (must be finite)"
        );
    }

    #[test]
    fn error_invalid_mean() {
        let err = HarmonicsError::InvalidMean { value: f64::INFINITY };
        assert_eq!(
            err.to_string(),
            "invalid mean water level: inf (must be finite)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<HarmonicsError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<HarmonicsError>();
    }
}
