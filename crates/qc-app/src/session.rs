//! Ambient session state.

use qc_report::ReportRef;

/// Process-lifetime state describing who is logged in and what was last
/// produced. Created at application start, mutated only by the controller.
///
/// Fields are overwritten, never explicitly cleared: locking the session
/// does not erase `current_project` or `last_report`.
#[derive(Debug, Clone)]
pub struct Session {
    pub current_user: String,
    pub current_project: Option<String>,
    pub homed_ok: bool,
    pub last_report: Option<ReportRef>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_user: "Guest".to_string(),
            current_project: None,
            homed_ok: false,
            last_report: None,
        }
    }
}
