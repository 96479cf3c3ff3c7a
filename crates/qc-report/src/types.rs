//! Report reference types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pointer to one exported run: project, human-readable timestamp, and the
/// CSV file on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRef {
    pub project_name: String,
    pub timestamp: String,
    pub csv_path: PathBuf,
}
