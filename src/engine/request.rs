use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::DiffError;
use crate::filter::FilterSpec;

/// Request parameters as sent by callers. Every list is optional; an
/// absent or empty list leaves that dimension unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiffRequest {
    /// Reserved: accepted and logged, not used for filtering.
    pub commit_ids: Vec<String>,
    pub tag_types: Vec<String>,
    pub tags: Vec<String>,
    pub products: Vec<String>,
    pub data_elements: Vec<String>,
}

impl DiffRequest {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            tag_types: self.tag_types.iter().cloned().collect(),
            tags: self.tags.iter().cloned().collect(),
            products: self.products.iter().cloned().collect(),
            data_elements: self.data_elements.iter().cloned().collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, DiffError> {
        let text = fs::read_to_string(path).map_err(|e| DiffError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| DiffError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
