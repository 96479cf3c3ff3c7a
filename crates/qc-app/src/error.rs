//! Error types for the qc-app service layer.

/// Application error type that wraps errors from the backend crates and
/// presents a single surface to the adapter. A failed user action does not
/// complete, but the application keeps running.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("User store error: {0}")]
    Users(#[from] qc_users::UsersError),

    #[error("Simulator error: {0}")]
    Sim(#[from] qc_sim::SimError),

    #[error("Report error: {0}")]
    Report(#[from] qc_report::ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for qc-app operations.
pub type AppResult<T> = Result<T, AppError>;
