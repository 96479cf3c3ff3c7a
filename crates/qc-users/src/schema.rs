//! On-disk document schema for the user file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

/// The persisted document: `{ "users": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserFile {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}
