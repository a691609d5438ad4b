use std::fs;
use std::path::Path;

use serde_json::Value;

use iir_cli::convert::{ConvertOutputs, write_documents};
use iir_ingest::convert_csv;

const CSV: &str = "\
INGREDIENT_NAME,ROUTE,DOSAGE_FORM,POTENCY_AMOUNT
WATER,,,1
TALC,,NaN,2.5
";

fn read_json(path: &Path) -> Value {
    let contents = fs::read_to_string(path).expect("read output");
    serde_json::from_str(&contents).expect("parse output")
}

#[test]
fn writes_all_three_documents() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv = dir.path().join("export.csv");
    fs::write(&csv, CSV).expect("write csv");
    let output_dir = dir.path().join("web_app");

    let conversion = convert_csv(&csv).expect("convert");
    let stats =
        write_documents(&conversion, &output_dir, ConvertOutputs::default()).expect("write");

    // Headers with no values at all are still listed.
    assert_eq!(
        stats.columns,
        vec!["INGREDIENT_NAME", "ROUTE", "DOSAGE_FORM", "POTENCY_AMOUNT"]
    );
    assert_eq!(stats.total_records, 2);
    assert_eq!(stats.unique_ingredients, 2);
    assert_eq!(stats.unique_routes, 0);

    let records = read_json(&output_dir.join("data.json"));
    assert_eq!(records[0]["POTENCY_AMOUNT"], Value::from(1));
    assert_eq!(records[1]["POTENCY_AMOUNT"], Value::from(2.5));
    assert_eq!(records[1]["DOSAGE_FORM"], Value::Null);

    let written_stats = read_json(&output_dir.join("stats.json"));
    assert_eq!(written_stats["columns"].as_array().map(Vec::len), Some(4));
    assert_eq!(written_stats["total_records"], Value::from(2));

    let mapping = read_json(&output_dir.join("field_mapping.json"));
    assert_eq!(mapping["ROUTE"]["display"], Value::from("给药途径"));
}

#[test]
fn companion_documents_can_be_skipped() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv = dir.path().join("export.csv");
    fs::write(&csv, CSV).expect("write csv");

    let conversion = convert_csv(&csv).expect("convert");
    let outputs = ConvertOutputs {
        mapping: false,
        stats: false,
    };
    write_documents(&conversion, dir.path(), outputs).expect("write");

    assert!(dir.path().join("data.json").exists());
    assert!(!dir.path().join("field_mapping.json").exists());
    assert!(!dir.path().join("stats.json").exists());
}
