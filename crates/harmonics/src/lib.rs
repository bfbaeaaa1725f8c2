//! # poseidon-harmonics
//!
//! Harmonic tide prediction from the classical 37-constituent set:
//! equilibrium phases and lunar node corrections after Schureman, and
//! the synthesis loop that turns station constants into water levels.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["named amplitudes and lags"] -->|"ConstituentSet::from_named()"| B["ConstituentSet"]
//!     B -->|"tide_steps() / predict_tides()"| C["TidePoint stream"]
//!     D["equilibrium_phases(days)"] --> C
//!     E["node_factors(days)"] -->|"every 30.5 days"| C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use poseidon_harmonics::{ConstituentSet, predict_tides};
//!
//! let set = ConstituentSet::from_named(station.mean, &station.constituents)?;
//!
//! // Hourly heights for two weeks from a UT Julian Date.
//! for point in predict_tides(&set, 2_453_294.5, 60.0, 14.0) {
//!     println!("{:.4} {:.2}", point.jd, point.height);
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `constituent` | The fixed catalog and validated per-station constants |
//! | `astro` | Mean longitudes and equilibrium phases V0 |
//! | `node` | Node factors f and phase corrections u |
//! | `synthesis` | The prediction grid and summation loop |
//! | `error` | Error types |

mod astro;
mod constituent;
mod error;
mod node;
mod synthesis;

pub use astro::equilibrium_phases;
pub use constituent::{
    CATALOG, ConstituentDef, ConstituentSet, NUM_CONSTITUENTS, constituent_index,
};
pub use error::HarmonicsError;
pub use node::{NodeFactors, node_factors};
pub use synthesis::{
    EPOCH_2000_JD, NODE_UPDATE_DAYS, TidePoint, TideSteps, predict_tides, tide_steps,
};
