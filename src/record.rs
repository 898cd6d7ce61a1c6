//! Row types for the change table and the per-product detail table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
}

/// One row of the diff table: a tag on a product that appeared or
/// disappeared between the two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    #[serde(rename = "upc")]
    pub product_id: String,
    pub tag: String,
    pub tag_type: String,
    pub data_element: String,
    pub change: ChangeKind,
}

impl ChangeRecord {
    pub fn new(
        product_id: &str,
        tag: &str,
        tag_type: &str,
        data_element: &str,
        change: ChangeKind,
    ) -> Self {
        ChangeRecord {
            product_id: product_id.to_string(),
            tag: tag.to_string(),
            tag_type: tag_type.to_string(),
            data_element: data_element.to_string(),
            change,
        }
    }

    /// The (productId, tag, dataElement) triple that identifies a tag-instance.
    pub fn instance_key(&self) -> (&str, &str, &str) {
        (&self.product_id, &self.tag, &self.data_element)
    }
}

/// A field of `ChangeRecord` that can be filtered on or grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "tag")]
    Tag,
    #[serde(rename = "tag_type")]
    TagType,
    #[serde(rename = "data_element")]
    DataElement,
    #[serde(rename = "upc")]
    ProductId,
}

impl Dimension {
    pub fn value<'a>(&self, record: &'a ChangeRecord) -> &'a str {
        match self {
            Dimension::Tag => &record.tag,
            Dimension::TagType => &record.tag_type,
            Dimension::DataElement => &record.data_element,
            Dimension::ProductId => &record.product_id,
        }
    }

    /// Column name in the change table.
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Tag => "tag",
            Dimension::TagType => "tag_type",
            Dimension::DataElement => "data_element",
            Dimension::ProductId => "upc",
        }
    }
}

/// One row of the detail table. Columns are schema-agnostic, kept as
/// ordered `(name, value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRecord {
    pub product_id: String,
    pub fields: Vec<(String, Value)>,
}

impl DetailRecord {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailTable {
    /// Union of all column names, in first-seen order.
    pub columns: Vec<String>,
    pub rows: Vec<DetailRecord>,
}

impl DetailTable {
    /// Values of `row` laid out in `self.columns` order; `null` where the
    /// row has no such column.
    pub fn row_values(&self, row: &DetailRecord) -> Vec<Value> {
        self.columns
            .iter()
            .map(|col| row.get(col).cloned().unwrap_or(Value::Null))
            .collect()
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
