//! The response assembled for one diff request.
//!
//! Field order and names form the wire contract: `metrics`, `filters`,
//! `chart`, `products`.
use indexmap::IndexMap;
use serde::Serialize;

use crate::chart::ChartSeries;
use crate::metrics::Metrics;
use crate::sample::ProductsPayload;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffReport {
    pub metrics: Metrics,
    /// External filter name → distinct values from the sampled rows.
    pub filters: IndexMap<String, Vec<String>>,
    /// Group name → index-aligned added/deleted series.
    pub chart: IndexMap<String, ChartSeries>,
    pub products: ProductsPayload,
}
