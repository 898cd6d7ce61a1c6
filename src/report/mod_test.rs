use super::*;
use crate::cli::FilterArgs;
use std::fs;
use std::path::{Path, PathBuf};

const CHANGES: &str = r#"[
  {"upc": "A", "tag": "X", "tag_type": "T1", "data_element": "D1", "change": "added"},
  {"upc": "A", "tag": "X", "tag_type": "T1", "data_element": "D1", "change": "added"},
  {"upc": "B", "tag": "Y", "tag_type": "T2", "data_element": "D2", "change": "removed"}
]"#;

const DETAILS: &str = r#"[
  {"upc": "A", "name": "Oats"},
  {"upc": "B", "name": "Rice"}
]"#;

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn common(changes: PathBuf, json: bool) -> CommonArgs {
    CommonArgs {
        changes,
        config: None,
        json,
        seed: Some(5),
        filters: FilterArgs::default(),
    }
}

fn render_report(args: &CommonArgs, details: &Path) -> String {
    let mut out = Vec::new();
    write_report(&mut out, args, details).unwrap();
    String::from_utf8(out).unwrap()
}

fn render_section(args: &CommonArgs, section: Section) -> String {
    let mut out = Vec::new();
    write_section(&mut out, args, section).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn build_report_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);
    let details = write(&dir, "details.json", DETAILS);
    let report = build_report(&common(changes, false), &details).unwrap();
    assert_eq!(report.metrics.tags_instances_added.value, 1);
    assert_eq!(report.metrics.upc_changed.value, 2);
    assert_eq!(report.chart["tags"].keys, vec!["X", "Y"]);
    assert_eq!(report.products.headers, vec!["upc", "name"]);
    assert_eq!(report.products.values.len(), 2);
}

#[test]
fn write_report_text() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);
    let details = write(&dir, "details.json", DETAILS);
    let text = render_report(&common(changes, false), &details);
    assert!(text.contains("tagsInstancesAdded"), "got:\n{text}");
    assert!(text.contains("100.00%"), "got:\n{text}");
    assert!(text.contains("Chart: tags"), "got:\n{text}");
    assert!(text.contains("Chart: dataElements"), "got:\n{text}");
    assert!(
        text.contains("Products: 2 sampled rows, 2 columns"),
        "got:\n{text}"
    );
}

#[test]
fn write_report_json() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);
    let details = write(&dir, "details.json", DETAILS);
    let text = render_report(&common(changes, true), &details);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value["metrics"]["tagsInstancesAdded"],
        serde_json::json!({"value": 1, "percent": 100.0})
    );
    assert_eq!(value["chart"]["tags"]["added"], serde_json::json!([2, 0]));
    assert_eq!(value["filters"]["products"], serde_json::json!(["A", "B"]));
    assert_eq!(value["products"]["headers"], serde_json::json!(["upc", "name"]));
}

#[test]
fn write_report_empty_tables() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", "[]");
    let details = write(&dir, "details.json", "[]");
    let text = render_report(&common(changes, true), &details);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value["products"],
        serde_json::json!({"headers": [], "values": []})
    );
    assert_eq!(value["chart"]["tags"]["keys"], serde_json::json!([]));
}

#[test]
fn run_report_missing_details() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);
    let err = run(&common(changes, true), &dir.path().join("absent.json")).unwrap_err();
    assert!(
        err.to_string().contains("missing input"),
        "should report missing input, got: {err}"
    );
}

#[test]
fn write_metrics_section() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);

    let text = render_section(&common(changes.clone(), false), Section::Metrics);
    assert!(text.contains("Baseline (unfiltered)"), "got:\n{text}");
    assert!(text.contains("upcChanged"), "got:\n{text}");

    let json = render_section(&common(changes, true), Section::Metrics);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["baseline"]["products"], serde_json::json!(2));
    assert_eq!(value["metrics"]["upcChanged"]["percent"], serde_json::json!(100.0));
}

#[test]
fn write_chart_section() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);

    let text = render_section(&common(changes.clone(), false), Section::Chart);
    assert!(text.contains("Chart: tagType"), "got:\n{text}");

    let json = render_section(&common(changes, true), Section::Chart);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value["tagType"],
        serde_json::json!({"keys": ["T1", "T2"], "added": [2, 0], "deleted": [0, 1]})
    );
}

#[test]
fn write_options_section() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);

    let text = render_section(&common(changes.clone(), false), Section::Options);
    assert!(text.contains("Filter options (sampled)"), "got:\n{text}");

    let json = render_section(&common(changes, true), Section::Options);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tags"], serde_json::json!(["X", "Y"]));
    assert_eq!(value["dataElements"], serde_json::json!(["D1", "D2"]));
}

#[test]
fn run_with_request_file() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);
    let request = write(&dir, "request.json", r#"{"tags": ["Y"], "commitIds": ["a1"]}"#);
    let mut args = common(changes, true);
    args.filters.request = Some(request);
    let json = render_section(&args, Section::Metrics);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metrics"]["uniqueTagsDeleted"]["value"], serde_json::json!(1));
    assert_eq!(value["metrics"]["uniqueTagsAdded"]["value"], serde_json::json!(0));
}

#[test]
fn run_with_explicit_config() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);
    let config = write(&dir, "tagdiff.toml", "sample_size = 1\n");
    let mut args = common(changes, true);
    args.config = Some(config);
    let json = render_section(&args, Section::Options);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["products"].as_array().unwrap().len(), 1);
}

#[test]
fn run_with_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let changes = write(&dir, "changes.json", CHANGES);
    let config = write(&dir, "tagdiff.toml", "sample_size = \"many\"\n");
    let mut args = common(changes, true);
    args.config = Some(config);
    let err = run_section(&args, Section::Chart).unwrap_err();
    assert!(
        err.to_string().contains("configuration error"),
        "got: {err}"
    );
}

#[test]
fn report_serializes_four_fields() {
    let value = serde_json::to_value(DiffReport::default()).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["metrics", "filters", "chart", "products"]);
}
