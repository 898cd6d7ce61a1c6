//! Report commands: load the tables, run the engine and print the
//! result as plain text or JSON.

/// Response data structure shared by both formatters.
pub(crate) mod data;
/// JSON output.
mod json;
/// Plain-text table output.
mod text;

use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

pub use data::DiffReport;

use crate::cli::CommonArgs;
use crate::config::EngineConfig;
use crate::engine::{DiffEngine, DiffRequest};
use crate::store::{self, RecordStore};

/// Which part of the response a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Metrics,
    Chart,
    Options,
}

/// Configuration, change table and request shared by every command.
struct Session {
    engine: DiffEngine,
    store: RecordStore,
    request: DiffRequest,
}

fn open_session(common: &CommonArgs) -> Result<Session, Box<dyn Error>> {
    let mut config = EngineConfig::load(common.config.as_deref())?;
    if common.seed.is_some() {
        config.seed = common.seed;
    }
    let request = common.filters.to_request()?;
    let store = store::load_changes(&common.changes)?;
    Ok(Session {
        engine: DiffEngine::new(config),
        store,
        request,
    })
}

/// Load the tables and build the full response.
pub fn build_report(common: &CommonArgs, details: &Path) -> Result<DiffReport, Box<dyn Error>> {
    let session = open_session(common)?;
    let details = store::load_details(details, &session.engine.config().join_key)?;
    Ok(session
        .engine
        .analyze(&session.store, &details, &session.request))
}

/// Full response: metrics, filter options, charts and the product sample.
pub fn run(common: &CommonArgs, details: &Path) -> Result<(), Box<dyn Error>> {
    write_report(&mut io::stdout().lock(), common, details)
}

pub fn write_report(
    out: &mut impl Write,
    common: &CommonArgs,
    details: &Path,
) -> Result<(), Box<dyn Error>> {
    let report = build_report(common, details)?;
    if common.json {
        json::write_json(out, &report)?;
    } else {
        text::write_report(out, &report)?;
    }
    Ok(())
}

/// One section of the response, without loading the detail table.
pub fn run_section(common: &CommonArgs, section: Section) -> Result<(), Box<dyn Error>> {
    write_section(&mut io::stdout().lock(), common, section)
}

pub fn write_section(
    out: &mut impl Write,
    common: &CommonArgs,
    section: Section,
) -> Result<(), Box<dyn Error>> {
    let session = open_session(common)?;
    let Session {
        engine,
        store,
        request,
    } = &session;

    match section {
        Section::Metrics => {
            let (baseline, metrics) = engine.metrics(store, request);
            if common.json {
                json::write_metrics_json(out, &baseline, &metrics)?;
            } else {
                text::write_baseline(out, &baseline)?;
                writeln!(out)?;
                text::write_metrics(out, &metrics)?;
            }
        }
        Section::Chart => {
            let chart = engine.charts(store, request);
            if common.json {
                json::write_chart_json(out, &chart)?;
            } else {
                text::write_charts(out, &chart)?;
            }
        }
        Section::Options => {
            let mut rng = engine.request_rng();
            let filters = engine.filter_options(store, request, &mut rng);
            if common.json {
                json::write_options_json(out, &filters)?;
            } else {
                text::write_options(out, &filters)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
