//! Per-request orchestration: filter, aggregate, chart and sample.
//!
//! The engine holds only configuration. Tables are borrowed for the
//! duration of one call and never mutated, so a parsed store can be
//! shared across requests.

pub mod request;

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chart::{ChartSeries, build_charts};
use crate::config::EngineConfig;
use crate::filter;
use crate::metrics::{BaselineCounts, Metrics, compute_baseline, compute_metrics};
use crate::record::{ChangeRecord, DetailTable};
use crate::report::DiffReport;
use crate::sample::{build_detail_payload, build_filter_options};
use crate::store::RecordStore;

pub use request::DiffRequest;

pub struct DiffEngine {
    config: EngineConfig,
}

impl DiffEngine {
    pub fn new(config: EngineConfig) -> Self {
        DiffEngine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// RNG for one request: seeded when the config pins a seed.
    pub fn request_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn select<'a>(&self, store: &'a RecordStore, request: &DiffRequest) -> Vec<&'a ChangeRecord> {
        if store.is_empty() {
            tracing::debug!("change table is empty");
        }
        if !request.commit_ids.is_empty() {
            tracing::debug!(commit_ids = ?request.commit_ids, "commit ids received");
        }
        let filtered = filter::apply(store.records(), &request.filter_spec());
        tracing::debug!(
            total = store.len(),
            filtered = filtered.len(),
            "applied filters"
        );
        filtered
    }

    pub fn analyze(
        &self,
        store: &RecordStore,
        details: &DetailTable,
        request: &DiffRequest,
    ) -> DiffReport {
        let mut rng = self.request_rng();
        self.analyze_with_rng(store, details, request, &mut rng)
    }

    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        store: &RecordStore,
        details: &DetailTable,
        request: &DiffRequest,
        rng: &mut R,
    ) -> DiffReport {
        let filtered = self.select(store, request);
        let baseline = compute_baseline(store.records());

        DiffReport {
            metrics: compute_metrics(&filtered, &baseline),
            filters: build_filter_options(
                &filtered,
                &self.config.filters,
                self.config.sample_size,
                rng,
            ),
            chart: build_charts(&filtered, &self.config.groups),
            products: build_detail_payload(
                store.records(),
                details,
                self.config.product_sample_size,
                self.config.detail_sample_size,
                rng,
            ),
        }
    }

    /// Baseline counts and filtered metrics without charts or sampling.
    pub fn metrics(&self, store: &RecordStore, request: &DiffRequest) -> (BaselineCounts, Metrics) {
        let filtered = self.select(store, request);
        let baseline = compute_baseline(store.records());
        (baseline, compute_metrics(&filtered, &baseline))
    }

    pub fn charts(
        &self,
        store: &RecordStore,
        request: &DiffRequest,
    ) -> IndexMap<String, ChartSeries> {
        let filtered = self.select(store, request);
        build_charts(&filtered, &self.config.groups)
    }

    pub fn filter_options<R: Rng + ?Sized>(
        &self,
        store: &RecordStore,
        request: &DiffRequest,
        rng: &mut R,
    ) -> IndexMap<String, Vec<String>> {
        let filtered = self.select(store, request);
        build_filter_options(&filtered, &self.config.filters, self.config.sample_size, rng)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
