//! Plain-text tables for terminal output.

use std::io::{self, Write};

use indexmap::IndexMap;

use super::DiffReport;
use crate::chart::ChartSeries;
use crate::metrics::{BaselineCounts, Metrics};
use crate::report_helpers::{format_percent, key_width, separator};

const LINE_WIDTH: usize = 60;

pub fn write_metrics(out: &mut impl Write, metrics: &Metrics) -> io::Result<()> {
    let sep = separator(LINE_WIDTH);
    writeln!(out, "Metrics")?;
    writeln!(out, "{sep}")?;
    writeln!(out, " {:<26} {:>12} {:>12}", "Metric", "Value", "Percent")?;
    writeln!(out, "{sep}")?;
    for (name, m) in metrics.entries() {
        writeln!(
            out,
            " {:<26} {:>12} {:>12}",
            name,
            m.value,
            format_percent(m.percent)
        )?;
    }
    writeln!(out, "{sep}")
}

pub fn write_baseline(out: &mut impl Write, baseline: &BaselineCounts) -> io::Result<()> {
    let sep = separator(LINE_WIDTH);
    writeln!(out, "Baseline (unfiltered)")?;
    writeln!(out, "{sep}")?;
    let rows = [
        ("Tag instances added", baseline.tag_instances_added),
        ("Tag instances removed", baseline.tag_instances_removed),
        ("Distinct tags added", baseline.tags_added),
        ("Distinct tags removed", baseline.tags_removed),
        ("Distinct products", baseline.products),
    ];
    for (label, value) in rows {
        writeln!(out, " {label:<26} {value:>12}")?;
    }
    writeln!(out, "{sep}")
}

pub fn write_series(out: &mut impl Write, name: &str, series: &ChartSeries) -> io::Result<()> {
    writeln!(out, "Chart: {name}")?;
    if series.keys.is_empty() {
        writeln!(out, " (no changes)")?;
        return writeln!(out);
    }

    let width = key_width(series.keys.iter().map(String::as_str), 4);
    let sep = separator((width + 21).max(30));
    writeln!(out, "{sep}")?;
    writeln!(out, " {:<width$} {:>9} {:>9}", "Key", "Added", "Deleted")?;
    writeln!(out, "{sep}")?;
    for ((key, added), deleted) in series.keys.iter().zip(&series.added).zip(&series.deleted) {
        writeln!(out, " {key:<width$} {added:>9} {deleted:>9}")?;
    }
    writeln!(out, "{sep}")?;
    writeln!(out)
}

pub fn write_charts(out: &mut impl Write, chart: &IndexMap<String, ChartSeries>) -> io::Result<()> {
    for (name, series) in chart {
        write_series(out, name, series)?;
    }
    Ok(())
}

pub fn write_options(
    out: &mut impl Write,
    filters: &IndexMap<String, Vec<String>>,
) -> io::Result<()> {
    let sep = separator(LINE_WIDTH);
    writeln!(out, "Filter options (sampled)")?;
    writeln!(out, "{sep}")?;
    for (name, values) in filters {
        let preview: Vec<&str> = values.iter().take(5).map(String::as_str).collect();
        let more = if values.len() > preview.len() { ", ..." } else { "" };
        writeln!(
            out,
            " {:<14} {:>5}  {}{more}",
            name,
            values.len(),
            preview.join(", ")
        )?;
    }
    writeln!(out, "{sep}")
}

pub fn write_report(out: &mut impl Write, report: &DiffReport) -> io::Result<()> {
    write_metrics(out, &report.metrics)?;
    writeln!(out)?;
    write_charts(out, &report.chart)?;
    write_options(out, &report.filters)?;
    writeln!(out)?;
    writeln!(
        out,
        "Products: {} sampled rows, {} columns",
        report.products.values.len(),
        report.products.headers.len()
    )
}
