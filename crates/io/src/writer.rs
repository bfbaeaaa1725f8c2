//! Prediction rendering in the model's classic text layout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use poseidon_calendar::{IsoPrecision, fday_to_hms, jd_to_cal, jd_to_iso, ut_to_lt};
use poseidon_harmonics::TidePoint;
use tracing::info;

use crate::error::IoError;
use crate::station::Station;

/// Conversion factor applied when heights are rendered in feet.
///
/// Unit conversion is a rendering concern only; synthesis always works in
/// the units of the stored amplitudes.
pub const METERS_TO_FEET: f64 = 3.2808;

// ---------------------------------------------------------------------------
// WriterConfig
// ---------------------------------------------------------------------------

/// How each row's timestamp is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeDisplay {
    /// Pacific wall clock with a PST or PDT suffix.
    #[default]
    Pacific,
    /// Universal Time, numeric month.
    Utc,
    /// Raw Julian Dates.
    Julian,
}

/// Configuration for rendering a prediction run.
///
/// Height decimals follow the unit: feet are rendered with one decimal,
/// meters with two, matching the precision the model is good for.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Timestamp style for data rows.
    time_display: TimeDisplay,
    /// Render heights in feet instead of meters.
    feet: bool,
    /// Column separator between timestamp and height.
    delimiter: String,
    /// Emit the station title block before the rows.
    include_title: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            time_display: TimeDisplay::default(),
            feet: false,
            delimiter: ",".to_string(),
            include_title: true,
        }
    }
}

impl WriterConfig {
    /// Sets the timestamp style.
    pub fn with_time_display(mut self, display: TimeDisplay) -> Self {
        self.time_display = display;
        self
    }

    /// Renders heights in feet instead of meters.
    pub fn with_feet(mut self, feet: bool) -> Self {
        self.feet = feet;
        self
    }

    /// Sets the column separator.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enables or disables the title block.
    pub fn with_include_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }
}

// ---------------------------------------------------------------------------
// RunInfo
// ---------------------------------------------------------------------------

/// Labels describing one prediction run, echoed into the title block.
#[derive(Debug, Clone)]
pub struct RunInfo {
    /// Segment identifier the run was made for.
    pub segment: String,
    /// Starting time exactly as the user gave it.
    pub start_label: String,
    /// Wall-clock label for when the run was generated.
    pub generated: String,
    /// Prediction interval in minutes.
    pub interval_minutes: f64,
    /// Series length in days.
    pub series_days: f64,
}

// ---------------------------------------------------------------------------
// write_predictions
// ---------------------------------------------------------------------------

/// Render one prediction run: optional title block, then one row per
/// sample as `{timestamp}{delimiter}{height}`.
///
/// # Errors
///
/// Returns [`IoError::Io`] when the underlying writer fails.
pub fn write_predictions(
    out: &mut impl Write,
    station: &Station,
    run: &RunInfo,
    points: &[TidePoint],
    config: &WriterConfig,
) -> Result<(), IoError> {
    if config.include_title {
        write_title(out, station, run, config)?;
    }

    for point in points {
        let datetext = render_datetext(point.jd, config.time_display);
        let height = render_height(point.height, config.feet);
        writeln!(out, "{datetext}{}{height}", config.delimiter)?;
    }

    Ok(())
}

/// Render a run into a freshly created file.
pub fn write_predictions_to_path(
    path: &Path,
    station: &Station,
    run: &RunInfo,
    points: &[TidePoint],
    config: &WriterConfig,
) -> Result<(), IoError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_predictions(&mut out, station, run, points, config)?;
    out.flush()?;

    info!(path = %path.display(), rows = points.len(), "predictions written");
    Ok(())
}

fn write_title(
    out: &mut impl Write,
    station: &Station,
    run: &RunInfo,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let mean = if config.feet {
        station.mean() * METERS_TO_FEET
    } else {
        station.mean()
    };
    let unit = if config.feet { "ft" } else { "m" };
    let unit_word = if config.feet { "feet" } else { "meters" };

    writeln!(out, "Puget Sound Tide Model: Tide Predictions")?;
    writeln!(out, "Segment Index: {} ({})", run.segment, station.name())?;
    writeln!(
        out,
        "Longitude: {:.6}  Latitude: {:.6}",
        station.longitude(),
        station.latitude()
    )?;
    writeln!(
        out,
        "Minor constituents inferred from {}",
        station.refstation()
    )?;
    writeln!(out, "Starting time: {}", run.start_label)?;
    writeln!(
        out,
        "Time step: {:.2} min  Length: {:.2} days",
        run.interval_minutes, run.series_days
    )?;
    writeln!(out, "Mean water level: {mean:.2} {unit}")?;
    writeln!(out)?;
    writeln!(out, "Predictions generated: {} (System)", run.generated)?;
    writeln!(out, "Heights in {unit_word} above MLLW")?;

    let (zone_line, time_column) = match config.time_display {
        TimeDisplay::Pacific => (
            "Prediction date and time in Pacific Time (PST or PDT)",
            "Datetime",
        ),
        TimeDisplay::Utc => (
            "Prediction date and time in Universal Time (UTC)",
            "Datetime",
        ),
        TimeDisplay::Julian => ("Prediction date and time in Julian Days (JD)", "Day"),
    };
    writeln!(out, "{zone_line}")?;
    writeln!(out)?;
    writeln!(out, "{time_column}{}Height", config.delimiter)?;

    Ok(())
}

/// Timestamp for one row. Pacific labels carry the zone the instant falls
/// in; UTC labels use numeric months; Julian rows are the bare date.
fn render_datetext(jd: f64, display: TimeDisplay) -> String {
    match display {
        TimeDisplay::Pacific => {
            let (local, zone) = ut_to_lt(jd);
            jd_to_iso(local, zone, IsoPrecision::Minute)
        }
        TimeDisplay::Utc => {
            let (year, month, fday) = jd_to_cal(jd, true);
            let (hour, minute, _) = fday_to_hms(fday);
            format!(
                "{year:04}-{month:02}-{:02} {hour:02}:{minute:02} UTC",
                fday as u32
            )
        }
        TimeDisplay::Julian => format!("{jd:12.4}"),
    }
}

fn render_height(height_m: f64, feet: bool) -> String {
    if feet {
        format!("{:.1}", height_m * METERS_TO_FEET)
    } else {
        format!("{height_m:.2}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
