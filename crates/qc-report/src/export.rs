//! CSV export and the report store.

use crate::types::ReportRef;
use crate::ReportResult;
use chrono::Local;
use qc_sim::CycleRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed column order of the export file.
pub const CSV_HEADER: [&str; 8] = [
    "elapsed",
    "cy5_avg_value1",
    "cy5_avg_value2",
    "cy5_avg_value3",
    "fam_avg_value1",
    "fam_avg_value2",
    "fam_avg_value3",
    "hex_value",
];

/// Write one header row plus one row per record to `path`.
///
/// I/O errors propagate to the caller; nothing is retried.
pub fn write_csv(records: &[CycleRecord], path: &Path) -> ReportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.elapsed.to_string(),
            record.cy5_avg_values[0].to_string(),
            record.cy5_avg_values[1].to_string(),
            record.cy5_avg_values[2].to_string(),
            record.fam_avg_values[0].to_string(),
            record.fam_avg_values[1].to_string(),
            record.fam_avg_values[2].to_string(),
            record.hex_value.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Export directory for finished runs.
#[derive(Debug, Clone)]
pub struct ReportStore {
    export_dir: PathBuf,
}

impl ReportStore {
    /// Open a store rooted at `export_dir`, creating it if missing.
    pub fn new(export_dir: impl Into<PathBuf>) -> ReportResult<Self> {
        let export_dir = export_dir.into();
        if !export_dir.exists() {
            fs::create_dir_all(&export_dir)?;
        }
        Ok(Self { export_dir })
    }

    /// Open the store at the well-known home-directory location.
    pub fn open_default() -> ReportResult<Self> {
        Self::new(crate::default_dir())
    }

    /// Export one run and return its reference.
    ///
    /// Filename is `{project}_{YYYYMMDD_HHMMSS}_data.csv`. Two runs within
    /// the same second with the same project name overwrite silently; that
    /// is an accepted limitation.
    pub fn save_report(
        &self,
        project_name: &str,
        records: &[CycleRecord],
    ) -> ReportResult<ReportRef> {
        let now = Local::now();
        let stamp = now.format("%Y%m%d_%H%M%S");
        let csv_path = self
            .export_dir
            .join(format!("{project_name}_{stamp}_data.csv"));

        fs::create_dir_all(&self.export_dir)?;
        write_csv(records, &csv_path)?;
        tracing::info!(path = %csv_path.display(), rows = records.len(), "report exported");

        Ok(ReportRef {
            project_name: project_name.to_string(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            csv_path,
        })
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}
