//! Predict command: synthesize a tide series for one segment and render it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike};
use tracing::{info, info_span, warn};

use poseidon_calendar::{CivilDateTime, lt_to_ut};
use poseidon_harmonics::predict_tides;
use poseidon_io::{
    RunInfo, TimeDisplay, read_stations, write_predictions, write_predictions_to_path,
};

use crate::cli::PredictArgs;
use crate::config::PoseidonConfig;
use crate::convert;

/// Run the prediction pipeline.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();

    // 1. Load project TOML; CLI flags override file values below.
    let config = PoseidonConfig::load(&args.config)?;

    let stations_path = args
        .stations
        .clone()
        .unwrap_or_else(|| config.stations.clone());
    let segment = args
        .segment
        .clone()
        .unwrap_or_else(|| config.predict.segment.clone());
    let interval = args.interval.unwrap_or(config.predict.interval);
    let length = args.length.unwrap_or(config.predict.length);
    let display = convert::resolve_time_display(&config.output, &args);
    let writer_cfg = convert::build_writer_config(display, &config.output, &args);

    // 2. Resolve the series start, defaulting to the current minute.
    let start_text = args.start.clone().or_else(|| config.predict.start.clone());
    let civil = match start_text {
        Some(ref text) => convert::parse_start(text)?,
        None => {
            let now = Local::now();
            CivilDateTime::new(
                now.year(),
                now.month() as u8,
                now.day() as u8,
                now.hour() as u8,
                now.minute() as u8,
                0.0,
            )
            .context("system clock out of calendar range")?
        }
    };
    let start_label = format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        civil.year(),
        civil.month(),
        civil.day(),
        civil.hour(),
        civil.minute()
    );

    // A Pacific start is wall-clock local; anything else is already UT.
    let jd = civil.to_jd();
    let jd_utc = if display == TimeDisplay::Pacific {
        lt_to_ut(jd)
    } else {
        jd
    };

    // 3. Load the station table and look up the segment.
    let table = read_stations(&stations_path)
        .with_context(|| format!("failed to load station table: {}", stations_path.display()))?;
    let station = table.get(&segment)?;

    // 4. Synthesize the series.
    info!(
        segment = %segment,
        start = %start_label,
        interval_minutes = interval,
        series_days = length,
        "predicting tides"
    );
    let points = predict_tides(station.constituents(), jd_utc, interval, length);
    if points.is_empty() {
        warn!(
            interval_minutes = interval,
            series_days = length,
            "empty prediction series, check interval and length"
        );
    } else {
        info!(rows = points.len(), "series synthesized");
    }

    // 5. Render to the output file or stdout.
    let run_info = RunInfo {
        segment: segment.clone(),
        start_label,
        generated: Local::now().format("%a %b %e %H:%M:%S %Y").to_string(),
        interval_minutes: interval,
        series_days: length,
    };
    match args.output {
        Some(ref path) => {
            write_predictions_to_path(path, station, &run_info, &points, &writer_cfg)
                .with_context(|| format!("failed to write predictions: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_predictions(&mut out, station, &run_info, &points, &writer_cfg)?;
            out.flush()?;
        }
    }

    Ok(())
}
