use std::error::Error;
use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use super::DiffReport;
use crate::chart::ChartSeries;
use crate::metrics::{BaselineCounts, Metrics};
use crate::report_helpers;

pub fn write_json(out: &mut impl Write, report: &DiffReport) -> Result<(), Box<dyn Error>> {
    report_helpers::write_json(out, report)
}

#[derive(Serialize)]
struct MetricsJson<'a> {
    baseline: &'a BaselineCounts,
    metrics: &'a Metrics,
}

pub fn write_metrics_json(
    out: &mut impl Write,
    baseline: &BaselineCounts,
    metrics: &Metrics,
) -> Result<(), Box<dyn Error>> {
    report_helpers::write_json(out, &MetricsJson { baseline, metrics })
}

pub fn write_chart_json(
    out: &mut impl Write,
    chart: &IndexMap<String, ChartSeries>,
) -> Result<(), Box<dyn Error>> {
    report_helpers::write_json(out, chart)
}

pub fn write_options_json(
    out: &mut impl Write,
    filters: &IndexMap<String, Vec<String>>,
) -> Result<(), Box<dyn Error>> {
    report_helpers::write_json(out, filters)
}
