use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::RecordStore;
use crate::error::DiffError;
use crate::record::{ChangeRecord, DetailRecord, DetailTable};

fn read_text(path: &Path) -> Result<String, DiffError> {
    fs::read_to_string(path).map_err(|e| DiffError::io(path, e))
}

fn is_json_lines(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jsonl"))
}

/// Load the change table: a JSON array of rows, or one row per line when
/// the file has a `.jsonl` extension.
pub fn load_changes(path: &Path) -> Result<RecordStore, DiffError> {
    let text = read_text(path)?;

    let records: Vec<ChangeRecord> = if is_json_lines(path) {
        parse_json_lines(path, &text)?
    } else {
        serde_json::from_str(&text).map_err(|source| DiffError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!(path = %path.display(), rows = records.len(), "loaded change table");
    Ok(RecordStore::from_records(records))
}

fn parse_json_lines(path: &Path, text: &str) -> Result<Vec<ChangeRecord>, DiffError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| DiffError::InvalidRow {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Join key as a string. Numeric ids are common in product feeds, so
/// numbers are accepted and stringified.
fn join_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Load the detail table: a JSON array of objects with arbitrary columns.
/// Column order follows first appearance across rows.
pub fn load_details(path: &Path, join_key: &str) -> Result<DetailTable, DiffError> {
    let text = read_text(path)?;
    let raw: Vec<Map<String, Value>> =
        serde_json::from_str(&text).map_err(|source| DiffError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(build_detail_table(raw, join_key))
}

pub(crate) fn build_detail_table(raw: Vec<Map<String, Value>>, join_key: &str) -> DetailTable {
    let mut table = DetailTable::default();

    for (idx, row) in raw.into_iter().enumerate() {
        let product_id = match row.get(join_key).and_then(join_value) {
            Some(id) => id,
            None => {
                tracing::warn!(row = idx, join_key, "detail row has no usable join key, skipped");
                continue;
            }
        };

        for name in row.keys() {
            if !table.columns.iter().any(|c| c == name) {
                table.columns.push(name.clone());
            }
        }

        table.rows.push(DetailRecord {
            product_id,
            fields: row.into_iter().collect(),
        });
    }

    table
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
