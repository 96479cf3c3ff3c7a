//! qc-report: per-run CSV export and report references.
//!
//! One CSV file per finished run, named from the project and a timestamp.
//! Only the most recent reference is kept in memory (by the session);
//! older exports exist only as files on disk.

pub mod export;
pub mod types;

pub use export::{write_csv, ReportStore, CSV_HEADER};
pub use types::ReportRef;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Well-known export directory: `~/csv_files`, or relative to the working
/// directory when no home directory can be resolved.
pub fn default_dir() -> std::path::PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join("csv_files"),
        None => std::path::PathBuf::from("csv_files"),
    }
}
