//! Inclusion filters over the change table.
//!
//! Every non-empty dimension must match (AND across dimensions); within a
//! dimension a record matches if its value is in the set (OR). Empty sets
//! impose no constraint.

use std::collections::HashSet;

use crate::record::{ChangeRecord, Dimension};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub tag_types: HashSet<String>,
    pub tags: HashSet<String>,
    pub products: HashSet<String>,
    pub data_elements: HashSet<String>,
}

impl FilterSpec {
    pub fn is_unrestricted(&self) -> bool {
        self.constraints().next().is_none()
    }

    /// The dimensions that actually restrict the result.
    pub fn constraints(&self) -> impl Iterator<Item = (Dimension, &HashSet<String>)> {
        [
            (Dimension::TagType, &self.tag_types),
            (Dimension::Tag, &self.tags),
            (Dimension::ProductId, &self.products),
            (Dimension::DataElement, &self.data_elements),
        ]
        .into_iter()
        .filter(|(_, set)| !set.is_empty())
    }

    pub fn matches(&self, record: &ChangeRecord) -> bool {
        self.constraints()
            .all(|(dim, set)| set.contains(dim.value(record)))
    }
}

/// Select the records matching `spec`, in their original order.
pub fn apply<'a>(records: &'a [ChangeRecord], spec: &FilterSpec) -> Vec<&'a ChangeRecord> {
    if spec.is_unrestricted() {
        return records.iter().collect();
    }
    records.iter().filter(|r| spec.matches(r)).collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
