//! Added/removed series per chart group.
//!
//! Unlike the aggregate metrics, chart counts are raw record counts with
//! no tag-instance deduplication.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::GroupConfig;
use crate::record::{ChangeKind, ChangeRecord, Dimension};

/// Index-aligned keys and per-key counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub keys: Vec<String>,
    pub added: Vec<usize>,
    pub deleted: Vec<usize>,
}

#[derive(Default)]
struct KeyCounts {
    total: usize,
    added: usize,
    deleted: usize,
}

/// Per-key counts in order of first appearance.
fn tally<'a>(filtered: &[&'a ChangeRecord], field: Dimension) -> IndexMap<&'a str, KeyCounts> {
    let mut counts: IndexMap<&str, KeyCounts> = IndexMap::new();
    for &r in filtered {
        let entry = counts.entry(field.value(r)).or_default();
        entry.total += 1;
        match r.change {
            ChangeKind::Added => entry.added += 1,
            ChangeKind::Removed => entry.deleted += 1,
        }
    }
    counts
}

pub fn build_series(filtered: &[&ChangeRecord], group: &GroupConfig) -> ChartSeries {
    let mut counts: Vec<(&str, KeyCounts)> = tally(filtered, group.field).into_iter().collect();

    if let Some(top) = group.top {
        // Stable sort: equal frequencies keep first-appearance order.
        counts.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        counts.truncate(top);
    }

    let mut series = ChartSeries::default();
    for (key, c) in counts {
        series.keys.push(key.to_string());
        series.added.push(c.added);
        series.deleted.push(c.deleted);
    }
    series
}

pub fn build_charts(
    filtered: &[&ChangeRecord],
    groups: &[GroupConfig],
) -> IndexMap<String, ChartSeries> {
    groups
        .iter()
        .map(|g| (g.name.clone(), build_series(filtered, g)))
        .collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
