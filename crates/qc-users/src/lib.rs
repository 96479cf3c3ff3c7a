//! qc-users: file-backed user credential store.
//!
//! Credentials live in a single JSON document `{ "users": [...] }` at a
//! well-known path in the home directory. Passwords are stored and compared
//! in plaintext; this matches the persisted-file contract of the instrument
//! and is a known limitation, not an oversight.

pub mod schema;
pub mod store;

pub use schema::{UserFile, UserRecord};
pub use store::UserStore;

pub type UsersResult<T> = Result<T, UsersError>;

#[derive(thiserror::Error, Debug)]
pub enum UsersError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("username already exists: {username}")]
    DuplicateUsername { username: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UsersError {
    /// True for failures the operator can fix by retrying with different
    /// input, as opposed to storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UsersError::EmptyUsername
                | UsersError::EmptyPassword
                | UsersError::DuplicateUsername { .. }
        )
    }
}

/// Well-known location of the user file: `~/user_data.json`, or relative to
/// the working directory when no home directory can be resolved.
pub fn default_path() -> std::path::PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join("user_data.json"),
        None => std::path::PathBuf::from("user_data.json"),
    }
}
