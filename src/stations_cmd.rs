//! Stations command: list the station table or show one station record.

use anyhow::{Context, Result};
use tracing::info_span;

use poseidon_harmonics::CATALOG;
use poseidon_io::{Station, read_stations};

use crate::cli::StationsArgs;
use crate::config::PoseidonConfig;

/// Run the station listing.
pub fn run(args: StationsArgs) -> Result<()> {
    let _cmd = info_span!("stations").entered();

    let config = PoseidonConfig::load(&args.config)?;
    let stations_path = args
        .stations
        .clone()
        .unwrap_or_else(|| config.stations.clone());
    let table = read_stations(&stations_path)
        .with_context(|| format!("failed to load station table: {}", stations_path.display()))?;

    match args.segment {
        Some(ref segment) => print_record(segment, table.get(segment)?),
        None => {
            println!(
                "{} station(s) loaded from {}",
                table.len(),
                stations_path.display()
            );
            println!();
            println!("{:<8} {:>11} {:>10}  {}", "Segment", "Longitude", "Latitude", "Name");
            for (segment, station) in table.iter() {
                println!(
                    "{:<8} {:>11.6} {:>10.6}  {}",
                    segment,
                    station.longitude(),
                    station.latitude(),
                    station.name()
                );
            }
        }
    }

    Ok(())
}

/// Prints one station's full record, harmonic constants included.
fn print_record(segment: &str, station: &Station) {
    println!("Segment: {segment}");
    println!("Name: {}", station.name());
    println!("Reference station: {}", station.refstation());
    println!(
        "Longitude: {:.6}  Latitude: {:.6}",
        station.longitude(),
        station.latitude()
    );
    println!("Mean water level: {:.2} m", station.mean());
    println!();
    println!("{:<6} {:>10} {:>12}", "Name", "Amp (m)", "Phase (deg)");
    let set = station.constituents();
    for (i, def) in CATALOG.iter().enumerate() {
        println!(
            "{:<6} {:>10.4} {:>12.2}",
            def.name,
            set.amplitudes()[i],
            set.phase_lags()[i].to_degrees()
        );
    }
}
