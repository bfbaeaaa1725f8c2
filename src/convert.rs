//! Pure conversion functions: TOML config structs + CLI flags -> crate API
//! config types.

use anyhow::{Result, bail};

use poseidon_calendar::CivilDateTime;
use poseidon_io::{TimeDisplay, WriterConfig};

use crate::cli::PredictArgs;
use crate::config::OutputToml;

/// Resolves the row time display from the TOML output table and CLI flags.
///
/// `--julian` and `--utc` both turn Pacific mode off. When the resolved
/// booleans still conflict, Pacific wins over Julian, and Julian over UTC.
pub fn resolve_time_display(output: &OutputToml, args: &PredictArgs) -> TimeDisplay {
    let pacific = if args.utc || args.julian {
        false
    } else {
        output.pacific
    };
    let julian = if args.julian {
        true
    } else if args.utc {
        false
    } else {
        output.julian
    };

    if pacific {
        TimeDisplay::Pacific
    } else if julian {
        TimeDisplay::Julian
    } else {
        TimeDisplay::Utc
    }
}

/// Builds a [`WriterConfig`] from the TOML output table plus CLI overrides.
pub fn build_writer_config(
    display: TimeDisplay,
    output: &OutputToml,
    args: &PredictArgs,
) -> WriterConfig {
    let delimiter = args
        .delimiter
        .clone()
        .unwrap_or_else(|| output.delimiter.clone());
    WriterConfig::default()
        .with_time_display(display)
        .with_feet(output.feet || args.feet)
        .with_delimiter(delimiter)
        .with_include_title(output.title && !args.no_title)
}

/// Parses a civil start time in `YYYY-MM-DD HH:MM` form.
///
/// A bare date means midnight. A `T` separator and trailing seconds are
/// accepted and the seconds dropped, so ISO 8601 strings also parse.
pub fn parse_start(text: &str) -> Result<CivilDateTime> {
    let trimmed = text.trim();
    let (date, clock) = trimmed.split_once([' ', 'T']).unwrap_or((trimmed, "00:00"));

    let date_fields: Vec<&str> = date.split('-').collect();
    let (year, month, day) = match date_fields.as_slice() {
        [y, m, d] => (*y, *m, *d),
        _ => bail!("invalid start {trimmed:?}, expected \"YYYY-MM-DD HH:MM\""),
    };
    let clock_fields: Vec<&str> = clock.split(':').collect();
    let (hour, minute) = match clock_fields.as_slice() {
        [h, m] | [h, m, _] => (*h, *m),
        _ => bail!("invalid start {trimmed:?}, expected \"YYYY-MM-DD HH:MM\""),
    };

    CivilDateTime::new(
        parse_field(year, "year", trimmed)?,
        parse_field(month, "month", trimmed)?,
        parse_field(day, "day", trimmed)?,
        parse_field(hour, "hour", trimmed)?,
        parse_field(minute, "minute", trimmed)?,
        0.0,
    )
    .map_err(|e| anyhow::anyhow!("invalid start {trimmed:?}: {e}"))
}

fn parse_field<T: std::str::FromStr>(field: &str, what: &str, full: &str) -> Result<T> {
    field
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid {what} {field:?} in start {full:?}"))
}
