use qc_report::{write_csv, ReportStore, CSV_HEADER};
use qc_sim::CycleRecord;

fn records(n: usize) -> Vec<CycleRecord> {
    (0..n)
        .map(|k| CycleRecord {
            elapsed: k,
            cy5_avg_values: [101.0, 202.0, 303.0],
            fam_avg_values: [110.5, 220.5, 330.5],
            hex_value: 499.25,
        })
        .collect()
}

#[test]
fn csv_has_header_and_one_row_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(&records(3), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(lines[1], "0,101,202,303,110.5,220.5,330.5,499.25");
    assert!(lines[3].starts_with("2,"));
}

#[test]
fn empty_run_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(&[], &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn write_to_unwritable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    assert!(write_csv(&records(1), &path).is_err());
}

#[test]
fn save_report_creates_dir_and_returns_ref() {
    let dir = tempfile::tempdir().unwrap();
    let export_dir = dir.path().join("csv_files");

    let store = ReportStore::new(&export_dir).unwrap();
    let report = store.save_report("alpha", &records(2)).unwrap();

    assert_eq!(report.project_name, "alpha");
    assert!(report.csv_path.exists());
    let name = report.csv_path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("alpha_"));
    assert!(name.ends_with("_data.csv"));

    let content = std::fs::read_to_string(&report.csv_path).unwrap();
    assert_eq!(content.lines().count(), 3);

    // Opening over an existing directory is idempotent.
    ReportStore::new(&export_dir).unwrap();
}
