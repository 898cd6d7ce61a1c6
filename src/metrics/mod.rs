//! Baseline and filtered aggregate metrics.
//!
//! "Unique" counts are deduplicated: a tag-instance is a distinct
//! (productId, tag, dataElement) triple, a tag is a distinct `tag` value.
//! Baselines come from the unfiltered table and only serve as percentage
//! denominators.

use std::collections::HashSet;

use serde::Serialize;

use crate::record::{ChangeKind, ChangeRecord};

/// Distinct counts over a set of change records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeCounts {
    pub tag_instances_added: usize,
    pub tag_instances_removed: usize,
    pub tags_added: usize,
    pub tags_removed: usize,
    pub products: usize,
}

/// Counts over the unfiltered table.
pub type BaselineCounts = ChangeCounts;

/// A count paired with its share of the matching baseline, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregateMetric {
    pub value: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub unique_tags_added: AggregateMetric,
    pub unique_tags_deleted: AggregateMetric,
    pub tags_instances_added: AggregateMetric,
    pub tags_instances_removed: AggregateMetric,
    pub upc_changed: AggregateMetric,
}

impl Metrics {
    /// Metrics with their wire names, in output order.
    pub fn entries(&self) -> [(&'static str, &AggregateMetric); 5] {
        [
            ("uniqueTagsAdded", &self.unique_tags_added),
            ("uniqueTagsDeleted", &self.unique_tags_deleted),
            ("tagsInstancesAdded", &self.tags_instances_added),
            ("tagsInstancesRemoved", &self.tags_instances_removed),
            ("upcChanged", &self.upc_changed),
        ]
    }
}

pub fn count_changes<'a>(records: impl IntoIterator<Item = &'a ChangeRecord>) -> ChangeCounts {
    let mut instances_added = HashSet::new();
    let mut instances_removed = HashSet::new();
    let mut tags_added = HashSet::new();
    let mut tags_removed = HashSet::new();
    let mut products = HashSet::new();

    for r in records {
        match r.change {
            ChangeKind::Added => {
                instances_added.insert(r.instance_key());
                tags_added.insert(r.tag.as_str());
            }
            ChangeKind::Removed => {
                instances_removed.insert(r.instance_key());
                tags_removed.insert(r.tag.as_str());
            }
        }
        products.insert(r.product_id.as_str());
    }

    ChangeCounts {
        tag_instances_added: instances_added.len(),
        tag_instances_removed: instances_removed.len(),
        tags_added: tags_added.len(),
        tags_removed: tags_removed.len(),
        products: products.len(),
    }
}

pub fn compute_baseline(records: &[ChangeRecord]) -> BaselineCounts {
    count_changes(records)
}

/// `value` as a percentage of `baseline`, rounded to 2 decimals with
/// exact halves going away from zero. A zero baseline yields
/// `{value: 0, percent: 0.0}`.
pub fn percent_of(value: usize, baseline: usize) -> AggregateMetric {
    if baseline == 0 {
        return AggregateMetric::default();
    }
    // Hundredths of a percent, rounded in integers so 1.005% stays a half.
    let value = value as u128;
    let baseline = baseline as u128;
    let hundredths = (value * 10_000 * 2 + baseline) / (baseline * 2);
    AggregateMetric {
        value: value as usize,
        percent: hundredths as f64 / 100.0,
    }
}

pub fn compute_metrics(filtered: &[&ChangeRecord], baseline: &BaselineCounts) -> Metrics {
    let counts = count_changes(filtered.iter().copied());

    Metrics {
        unique_tags_added: percent_of(counts.tags_added, baseline.tags_added),
        unique_tags_deleted: percent_of(counts.tags_removed, baseline.tags_removed),
        tags_instances_added: percent_of(counts.tag_instances_added, baseline.tag_instances_added),
        tags_instances_removed: percent_of(
            counts.tag_instances_removed,
            baseline.tag_instances_removed,
        ),
        upc_changed: percent_of(counts.products, baseline.products),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
