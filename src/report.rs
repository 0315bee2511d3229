use log::{debug, info, warn};

use ap_results::*;
use snafu::{prelude::*, Snafu};

use std::fs;

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::report::config_reader::*;
use crate::report::summary::build_summary_js;

pub mod config_reader;
pub mod summary;

#[derive(Debug, Snafu)]
pub enum ReportError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error serializing the summary to JSON"))]
    SerializingJson { source: serde_json::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Race {race}: {source}"))]
    LoadingRace { source: LoadErrors, race: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;

pub fn read_snapshot(path: &str) -> ReportResult<Snapshot> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let snapshot: Snapshot = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    Ok(snapshot)
}

pub fn read_summary(path: &str) -> ReportResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read content: {:?}", contents);
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

/// Wires every race of the snapshot. Races are kept in the order of the snapshot.
pub fn load_races(snapshot: &Snapshot) -> ReportResult<Vec<Race>> {
    let mut races: Vec<Race> = Vec::new();
    for rs in snapshot.races.iter() {
        let race = build_race(rs).context(LoadingRaceSnafu {
            race: rs.ap_race_number.clone().unwrap_or_default(),
        })?;
        info!(
            "Loaded race {:?}: {} ({} candidates, {} reporting units)",
            race.ap_race_number,
            race.name(),
            race.candidates().len(),
            race.reporting_units().len()
        );
        races.push(race);
    }
    Ok(races)
}

fn write_summary(pretty_js: &str, out: Option<String>) -> ReportResult<()> {
    match out.as_deref() {
        None | Some("") | Some("stdout") => {
            println!("{}", pretty_js);
        }
        Some(path) => {
            info!("Writing summary to {:?}", path);
            fs::write(path, pretty_js).context(WritingSummarySnafu { path })?;
        }
    }
    Ok(())
}

pub fn run_report(
    config_path: &str,
    check_summary_path: Option<String>,
    out: Option<String>,
) -> ReportResult<()> {
    info!("Attempting to read snapshot {:?}", config_path);
    let snapshot = read_snapshot(config_path)?;

    if snapshot.races.is_empty() {
        warn!("No races found in snapshot {:?}", config_path);
    }

    let races = load_races(&snapshot)?;

    // Assemble the final json
    let result_js = build_summary_js(&snapshot.output_settings, &races);
    let pretty_js_stats =
        serde_json::to_string_pretty(&result_js).context(SerializingJsonSnafu {})?;

    // The reference is checked before anything is written, since --out may point to it.
    if let Some(summary_p) = check_summary_path {
        let summary_ref = read_summary(&summary_p)?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(SerializingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference summary");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            whatever!("Difference detected between generated summary and reference summary")
        }
        info!("Summary matches the reference {:?}", summary_p);
    }

    write_summary(&pretty_js_stats, out)?;

    Ok(())
}
