//! Bounded random sampling for filter options and the product detail join.
//!
//! Sampling is uniform without replacement. Selected positions are
//! returned in table order, so output order depends only on which rows
//! were picked.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use rand::Rng;
use rand::seq::index;
use serde::Serialize;
use serde_json::Value;

use crate::config::FilterOption;
use crate::record::{ChangeRecord, DetailRecord, DetailTable};

/// Sampled detail rows, laid out as a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductsPayload {
    pub headers: Vec<String>,
    pub values: Vec<Vec<Value>>,
}

/// Up to `cap` distinct positions in `0..len`, ascending. Everything when
/// `len <= cap`.
pub fn sample_indices<R: Rng + ?Sized>(len: usize, cap: usize, rng: &mut R) -> Vec<usize> {
    if len <= cap {
        return (0..len).collect();
    }
    let mut picked = index::sample(rng, len, cap).into_vec();
    picked.sort_unstable();
    picked
}

/// Distinct values per filter dimension, drawn from a sample of at most
/// `cap` filtered rows rather than the whole filtered set.
pub fn build_filter_options<R: Rng + ?Sized>(
    filtered: &[&ChangeRecord],
    options: &[FilterOption],
    cap: usize,
    rng: &mut R,
) -> IndexMap<String, Vec<String>> {
    let sampled: Vec<&ChangeRecord> = sample_indices(filtered.len(), cap, rng)
        .into_iter()
        .map(|i| filtered[i])
        .collect();

    options
        .iter()
        .map(|opt| {
            let distinct: IndexSet<&str> = sampled.iter().map(|r| opt.field.value(r)).collect();
            let values = distinct.into_iter().map(str::to_string).collect();
            (opt.name.clone(), values)
        })
        .collect()
}

/// Sample up to `product_cap` product ids from the full table, join them
/// against `details`, then keep up to `row_cap` of the joined rows.
/// Sampled ids without detail rows only drop out of `values`; the headers
/// stay. An empty change table gives an empty payload.
pub fn build_detail_payload<R: Rng + ?Sized>(
    full: &[ChangeRecord],
    details: &DetailTable,
    product_cap: usize,
    row_cap: usize,
    rng: &mut R,
) -> ProductsPayload {
    let products: IndexSet<&str> = full.iter().map(|r| r.product_id.as_str()).collect();
    let chosen: HashSet<&str> = sample_indices(products.len(), product_cap, rng)
        .into_iter()
        .filter_map(|i| products.get_index(i).copied())
        .collect();

    let joined: Vec<&DetailRecord> = details
        .rows
        .iter()
        .filter(|row| chosen.contains(row.product_id.as_str()))
        .collect();

    tracing::debug!(
        products = chosen.len(),
        joined_rows = joined.len(),
        "detail join"
    );

    // Nothing to sample from: no schema either.
    if chosen.is_empty() {
        return ProductsPayload::default();
    }

    let values = sample_indices(joined.len(), row_cap, rng)
        .into_iter()
        .map(|i| details.row_values(joined[i]))
        .collect();

    ProductsPayload {
        headers: details.columns.clone(),
        values,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
