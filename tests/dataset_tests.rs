use indexmap::IndexMap;
use survey_facets::core::{CellValue, ColumnId, Dataset, FilteredView, MISSING_LABEL, distribute};
use survey_facets::error::FacetError;

fn record(pairs: &[(&str, CellValue)]) -> IndexMap<String, CellValue> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}

#[test]
fn cell_values_normalize_blank_and_nan_to_missing() {
    assert_eq!(CellValue::text(""), CellValue::Missing);
    assert_eq!(CellValue::text("   "), CellValue::Missing);
    assert_eq!(CellValue::number(f64::NAN), CellValue::Missing);
    assert_eq!(CellValue::from(None::<&str>), CellValue::Missing);
    assert_eq!(CellValue::from("F"), CellValue::Text("F".to_owned()));
}

#[test]
fn cell_value_labels_are_stable() {
    assert_eq!(CellValue::Missing.label(), MISSING_LABEL);
    assert_eq!(CellValue::from(3_i64).label(), "3");
    assert_eq!(CellValue::from(2.5).label(), "2.5");
    assert_eq!(CellValue::from("18-25").label(), "18-25");
}

#[test]
fn cell_values_deserialize_from_json_scalars() {
    let values: Vec<CellValue> =
        serde_json::from_str(r#"["M", 42, null, "", 1.5]"#).expect("parse cells");
    assert_eq!(
        values,
        vec![
            CellValue::from("M"),
            CellValue::from(42_i64),
            CellValue::Missing,
            CellValue::Missing,
            CellValue::from(1.5),
        ]
    );
}

#[test]
fn positional_rows_must_match_schema_width() {
    let err = Dataset::new(
        vec![ColumnId::new("Gender"), ColumnId::new("Age Range")],
        vec![
            vec![CellValue::from("M"), CellValue::from("18-25")],
            vec![CellValue::from("F")],
        ],
    )
    .expect_err("short row must be rejected");

    assert_eq!(
        err,
        FacetError::RowWidthMismatch {
            row: 1,
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn duplicate_columns_are_rejected() {
    let err = Dataset::new(
        vec![ColumnId::new("Gender"), ColumnId::new("Gender")],
        Vec::new(),
    )
    .expect_err("duplicate schema");
    assert!(matches!(err, FacetError::DuplicateColumn { column } if column == "Gender"));
}

#[test]
fn records_fill_absent_keys_with_missing() {
    let dataset = Dataset::from_records(vec![
        record(&[("Gender", "M".into()), ("Ethnicity", "A".into())]),
        record(&[("Gender", "F".into())]),
    ])
    .expect("dataset");

    assert_eq!(dataset.row_count(), 2);
    let ethnicity = dataset.resolve("Ethnicity").expect("column");
    assert_eq!(dataset.cell(1, ethnicity), Some(&CellValue::Missing));
    let names: Vec<&str> = dataset.columns().map(ColumnId::as_str).collect();
    assert_eq!(names, vec!["Gender", "Ethnicity"]);
}

#[test]
fn records_with_keys_outside_schema_are_rejected() {
    let err = Dataset::from_records(vec![
        record(&[("Gender", "M".into())]),
        record(&[("Gender", "F".into()), ("Income", "High".into())]),
    ])
    .expect_err("unexpected column");

    assert_eq!(
        err,
        FacetError::UnexpectedColumn {
            row: 1,
            column: "Income".to_owned(),
        }
    );
}

#[test]
fn resolve_reports_unknown_columns() {
    let dataset = Dataset::from_records(vec![record(&[("Gender", "M".into())])]).expect("dataset");

    let err = dataset.resolve("Salary").expect_err("unknown column");
    assert_eq!(format!("{err}"), "unknown column: `Salary`");
    assert!(dataset.has_column("Gender"));
}

#[test]
fn empty_record_list_yields_empty_dataset() {
    let dataset = Dataset::from_records(Vec::<IndexMap<String, CellValue>>::new()).expect("dataset");
    assert!(dataset.is_empty());
    assert_eq!(dataset.columns().len(), 0);
}

#[test]
fn record_view_pairs_schema_with_cells() {
    let dataset = Dataset::from_records(vec![record(&[
        ("Gender", "F".into()),
        ("Age Range", "26-35".into()),
    ])])
    .expect("dataset");

    let row = dataset.record(0).expect("row 0");
    assert_eq!(row.get(&ColumnId::new("Age Range")), Some(&&CellValue::from("26-35")));
    assert!(dataset.record(1).is_none());
}

#[test]
fn explicit_schema_survives_zero_records() {
    let dataset = Dataset::from_records_with_columns(
        vec![ColumnId::new("Gender"), ColumnId::new("Age Range")],
        Vec::<IndexMap<String, CellValue>>::new(),
    )
    .expect("dataset");

    assert!(dataset.is_empty());
    assert!(dataset.has_column("Gender"));
    let distribution =
        distribute(&FilteredView::all(&dataset), "Gender").expect("distribute empty");
    assert!(distribution.is_empty());
}

#[test]
fn explicit_schema_applies_record_rules() {
    let dataset = Dataset::from_records_with_columns(
        vec![ColumnId::new("Gender"), ColumnId::new("Age Range")],
        vec![
            record(&[("Age Range", "18-25".into()), ("Gender", "F".into())]),
            record(&[("Gender", "M".into())]),
        ],
    )
    .expect("dataset");
    assert_eq!(
        dataset.row(0),
        Some([CellValue::from("F"), CellValue::from("18-25")].as_slice())
    );
    assert_eq!(
        dataset.row(1),
        Some([CellValue::from("M"), CellValue::Missing].as_slice())
    );
    assert!(dataset.row(2).is_none());

    let err = Dataset::from_records_with_columns(
        vec![ColumnId::new("Gender")],
        vec![record(&[("Income", "High".into())])],
    )
    .expect_err("unexpected column");
    assert_eq!(
        err,
        FacetError::UnexpectedColumn {
            row: 0,
            column: "Income".to_owned(),
        }
    );

    let err = Dataset::from_records_with_columns(
        vec![ColumnId::new("Gender"), ColumnId::new("Gender")],
        Vec::<IndexMap<String, CellValue>>::new(),
    )
    .expect_err("duplicate schema");
    assert!(matches!(err, FacetError::DuplicateColumn { .. }));
}

#[test]
fn signed_zero_shares_one_category_and_label() {
    assert_eq!(CellValue::from(-0.0), CellValue::from(0.0));
    assert_eq!(CellValue::from(-0.0).label(), "0");

    let dataset = Dataset::new(
        vec![ColumnId::new("Children")],
        vec![vec![CellValue::from(-0.0)], vec![CellValue::from(0.0)]],
    )
    .expect("dataset");
    let distribution =
        distribute(&FilteredView::all(&dataset), "Children").expect("distribute");
    assert_eq!(distribution.entries.len(), 1);
    assert_eq!(distribution.entries[0].category.label(), "0");
    assert_eq!(distribution.entries[0].count, 2);

    let decoded: CellValue = serde_json::from_str("-0.0").expect("parse cell");
    assert_eq!(decoded.label(), "0");
}

#[test]
fn resolved_columns_report_schema_positions() {
    let dataset = Dataset::from_records(vec![record(&[
        ("Gender", "F".into()),
        ("Age Range", CellValue::Missing),
    ])])
    .expect("dataset");

    let age = dataset.resolve("Age Range").expect("column");
    assert_eq!(age.position(), 1);
    assert_eq!(dataset.column_id(age).as_str(), "Age Range");
    assert!(dataset.cell(0, age).is_some_and(CellValue::is_missing));
    assert!(!CellValue::from("F").is_missing());
}
