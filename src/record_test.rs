use super::*;
use serde_json::json;

#[test]
fn change_record_reads_wire_columns() {
    let rec: ChangeRecord = serde_json::from_value(json!({
        "upc": "0001",
        "tag": "organic",
        "tag_type": "claim",
        "data_element": "label",
        "change": "removed"
    }))
    .unwrap();
    assert_eq!(rec.product_id, "0001");
    assert_eq!(rec.change, ChangeKind::Removed);
}

#[test]
fn change_record_rejects_unknown_kind() {
    let result: Result<ChangeRecord, _> = serde_json::from_value(json!({
        "upc": "0001",
        "tag": "organic",
        "tag_type": "claim",
        "data_element": "label",
        "change": "modified"
    }));
    assert!(result.is_err(), "only added/removed are valid change kinds");
}

#[test]
fn instance_key_ignores_tag_type_and_kind() {
    let a = ChangeRecord::new("A", "X", "T1", "D1", ChangeKind::Added);
    let b = ChangeRecord::new("A", "X", "T2", "D1", ChangeKind::Removed);
    assert_eq!(a.instance_key(), b.instance_key());
}

#[test]
fn dimension_selects_field() {
    let rec = ChangeRecord::new("A", "X", "T1", "D1", ChangeKind::Added);
    assert_eq!(Dimension::Tag.value(&rec), "X");
    assert_eq!(Dimension::TagType.value(&rec), "T1");
    assert_eq!(Dimension::DataElement.value(&rec), "D1");
    assert_eq!(Dimension::ProductId.value(&rec), "A");
}

#[test]
fn dimension_deserializes_from_column_name() {
    let dim: Dimension = serde_json::from_value(json!("data_element")).unwrap();
    assert_eq!(dim, Dimension::DataElement);
    assert_eq!(dim.column(), "data_element");
    let dim: Dimension = serde_json::from_value(json!("upc")).unwrap();
    assert_eq!(dim, Dimension::ProductId);
}

#[test]
fn row_values_fill_missing_columns_with_null() {
    let table = DetailTable {
        columns: vec!["upc".into(), "name".into(), "brand".into()],
        rows: vec![],
    };
    let row = DetailRecord {
        product_id: "A".into(),
        fields: vec![
            ("brand".into(), json!("Acme")),
            ("upc".into(), json!("A")),
        ],
    };
    assert_eq!(
        table.row_values(&row),
        vec![json!("A"), Value::Null, json!("Acme")]
    );
}
