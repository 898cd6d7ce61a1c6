//! Engine configuration: sample caps, the filter-name table and the chart
//! groups. Everything defaults to the standard report layout; a TOML file
//! can override any part of it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::DiffError;
use crate::record::Dimension;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tagdiff.toml";

const DEFAULT_SAMPLE_SIZE: usize = 100;
const DEFAULT_TAG_TOP: usize = 10;

/// One entry of the response's `filters` section: the key it is emitted
/// under and the record field whose sampled values it lists.
///
/// This table shapes output only. Request parameters (`tagTypes`, `tags`,
/// `products`, `dataElements`) are fixed by `DiffRequest` and always select
/// the same fields, whatever names are configured here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterOption {
    pub name: String,
    pub field: Dimension,
}

/// One chart grouping. `top = None` keeps every distinct key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub name: String,
    pub field: Dimension,
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Rows sampled from the filtered set to build filter options.
    pub sample_size: usize,
    /// Product ids sampled from the full table for the detail join.
    pub product_sample_size: usize,
    /// Joined detail rows kept in the products payload.
    pub detail_sample_size: usize,
    /// Detail-table column holding the product id.
    pub join_key: String,
    /// Fixed RNG seed; fresh OS entropy per request when unset.
    pub seed: Option<u64>,
    /// Response `filters` keys; does not change how requests are read.
    pub filters: Vec<FilterOption>,
    pub groups: Vec<GroupConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            sample_size: DEFAULT_SAMPLE_SIZE,
            product_sample_size: DEFAULT_SAMPLE_SIZE,
            detail_sample_size: DEFAULT_SAMPLE_SIZE,
            join_key: Dimension::ProductId.column().to_string(),
            seed: None,
            filters: default_filters(),
            groups: default_groups(),
        }
    }
}

fn default_filters() -> Vec<FilterOption> {
    [
        ("tags", Dimension::Tag),
        ("dataElements", Dimension::DataElement),
        ("tagType", Dimension::TagType),
        ("products", Dimension::ProductId),
    ]
    .into_iter()
    .map(|(name, field)| FilterOption {
        name: name.to_string(),
        field,
    })
    .collect()
}

fn default_groups() -> Vec<GroupConfig> {
    vec![
        GroupConfig {
            name: "tags".to_string(),
            field: Dimension::Tag,
            top: Some(DEFAULT_TAG_TOP),
        },
        GroupConfig {
            name: "tagType".to_string(),
            field: Dimension::TagType,
            top: None,
        },
        GroupConfig {
            name: "dataElements".to_string(),
            field: Dimension::DataElement,
            top: None,
        },
    ]
}

impl EngineConfig {
    pub fn from_toml(text: &str) -> Result<Self, DiffError> {
        let config: EngineConfig =
            toml::from_str(text).map_err(|e| DiffError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, else from `tagdiff.toml` in the current
    /// directory if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, DiffError> {
        let path = match path {
            Some(p) => p,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(EngineConfig::default());
                }
                fallback
            }
        };
        let text = fs::read_to_string(path).map_err(|e| DiffError::io(path, e))?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), DiffError> {
        let mut seen = HashSet::new();
        for f in &self.filters {
            if !seen.insert(f.name.as_str()) {
                return Err(DiffError::Config(format!(
                    "duplicate filter name {:?}",
                    f.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for g in &self.groups {
            if !seen.insert(g.name.as_str()) {
                return Err(DiffError::Config(format!(
                    "duplicate group name {:?}",
                    g.name
                )));
            }
            if g.top == Some(0) {
                return Err(DiffError::Config(format!(
                    "group {:?}: top must be at least 1",
                    g.name
                )));
            }
        }

        if self.join_key.trim().is_empty() {
            return Err(DiffError::Config("join_key must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
