//! # poseidon-io
//!
//! Load per-segment station records from JSON and render prediction runs
//! as delimited text. Bridges the on-disk formats into the numeric crates'
//! validated types.

mod error;
mod station;
mod validate;
mod writer;

pub use error::IoError;
pub use station::{Station, StationTable, read_stations};
pub use writer::{
    METERS_TO_FEET, RunInfo, TimeDisplay, WriterConfig, write_predictions,
    write_predictions_to_path,
};
