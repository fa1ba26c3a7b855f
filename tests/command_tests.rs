use o365_audit_extractor::commands::{execute_extract, validate_extract_args, ExtractArgs};
use o365_audit_extractor::output::{OutputFormat, OutputMode};
use std::fs;
use std::path::PathBuf;

const HEADER: &str = "CreationDate,UserIds,Operations,AuditData\n";

fn csv_line(payload: &str) -> String {
    format!("2019-12-01,bob,Op,\"{}\"\n", payload.replace('"', "\"\""))
}

#[test]
fn test_validate_args_valid() {
    let args = ExtractArgs {
        input: PathBuf::from("exports"),
        ..Default::default()
    };

    assert!(validate_extract_args(&args).is_ok());
}

#[test]
fn test_validate_args_output_is_file() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    let args = ExtractArgs {
        input: PathBuf::from("exports"),
        output_dir: temp.path().to_path_buf(),
        ..Default::default()
    };

    assert!(validate_extract_args(&args).is_err());
}

#[test]
fn test_extract_directory_per_workload() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().join("results");

    fs::write(
        input.path().join("week1.csv"),
        format!(
            "{}{}{}",
            HEADER,
            csv_line(r#"{"Workload":"Exchange","CreationTime":"2019-12-02T00:00:00","A":1}"#),
            csv_line(r#"{"Workload":"SharePoint","CreationTime":"2019-12-01T00:00:00","S":1}"#),
        ),
    )
    .unwrap();
    fs::write(
        input.path().join("week2.csv"),
        format!(
            "{}{}{}",
            HEADER,
            csv_line(r#"{"Workload":"Exchange","CreationTime":"2019-12-01T00:00:00","B":1}"#),
            csv_line("garbage"),
        ),
    )
    .unwrap();

    let args = ExtractArgs {
        input: input.path().to_path_buf(),
        output_dir: out_dir.clone(),
        prefix: "run".to_string(),
        format: OutputFormat::Csv,
        mode: OutputMode::PerCategory,
        ..Default::default()
    };

    let report = execute_extract(args).unwrap();

    assert_eq!(report.ingest.files_processed, 2);
    assert_eq!(report.ingest.records, 3);
    assert_eq!(report.ingest.rows_skipped, 1);
    assert_eq!(report.artifacts.len(), 2);

    let exchange = fs::read_to_string(out_dir.join("run-Exchange.csv")).unwrap();
    assert_eq!(
        exchange,
        "A,B,CreationTime,Workload\n,1,2019-12-01T00:00:00,Exchange\n1,,2019-12-02T00:00:00,Exchange\n"
    );
    assert!(out_dir.join("run-SharePoint.csv").exists());
}

#[test]
fn test_extract_combined_json() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let file = input.path().join("audit.csv");
    fs::write(
        &file,
        format!(
            "{}{}{}",
            HEADER,
            csv_line(r#"{"Workload":"SharePoint","CreationTime":"2","Id":"s"}"#),
            csv_line(r#"{"Workload":"Exchange","CreationTime":"1","Id":"e"}"#),
        ),
    )
    .unwrap();

    let args = ExtractArgs {
        input: file,
        output_dir: out.path().to_path_buf(),
        format: OutputFormat::Json,
        mode: OutputMode::Combined,
        ..Default::default()
    };

    let report = execute_extract(args).unwrap();
    assert_eq!(report.artifacts.len(), 1);

    let path = out.path().join("o365AuditLog-combinedRecords.json");
    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let ids: Vec<&str> = doc
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["Id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["e", "s"]);
}
