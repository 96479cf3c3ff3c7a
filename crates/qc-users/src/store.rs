//! User store API.

use crate::schema::{UserFile, UserRecord};
use crate::{UsersError, UsersResult};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed list of user credentials.
///
/// The store keeps its backing path so that `create` can persist in the
/// same call that validates. Usernames are unique within the store; the
/// check happens at creation time, not in the file format.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
    users: Vec<UserRecord>,
}

impl UserStore {
    /// Open the store at `path`.
    ///
    /// A missing or malformed file yields an empty store. Read failures
    /// never surface to the caller; the lock screen must come up even when
    /// the user file is corrupt.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let users = read_user_file(&path);
        Self { path, users }
    }

    /// Open the store at the well-known home-directory path.
    pub fn open_default() -> Self {
        Self::open(crate::default_path())
    }

    /// Re-read the backing file, replacing the in-memory list.
    pub fn reload(&mut self) {
        self.users = read_user_file(&self.path);
    }

    /// Persist the current list as pretty-printed JSON. Direct overwrite;
    /// no crash-safety guarantee.
    pub fn save(&self) -> UsersResult<()> {
        let doc = UserFile {
            users: self.users.clone(),
        };
        let content = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Validate, append, and persist a new user.
    ///
    /// Both fields are trimmed before validation and stored trimmed.
    /// Duplicate detection is a case-sensitive exact match.
    pub fn create(&mut self, username: &str, password: &str) -> UsersResult<()> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() {
            return Err(UsersError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(UsersError::EmptyPassword);
        }
        if self.users.iter().any(|u| u.username == username) {
            return Err(UsersError::DuplicateUsername {
                username: username.to_string(),
            });
        }

        self.users.push(UserRecord {
            username: username.to_string(),
            password: password.to_string(),
        });
        self.save()?;
        tracing::info!(username, "created user");
        Ok(())
    }

    /// Exact match on both fields.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.username == username && u.password == password)
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Username at a carousel position, if any.
    pub fn username_at(&self, index: usize) -> Option<&str> {
        self.users.get(index).map(|u| u.username.as_str())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_user_file(path: &Path) -> Vec<UserRecord> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str::<UserFile>(&content) {
        Ok(doc) => doc.users,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed user file, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::open(dir.path().join("user_data.json"));
        (dir, store)
    }

    #[test]
    fn open_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
    }

    #[test]
    fn open_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        fs::write(&path, "{not json").unwrap();
        let store = UserStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn create_trims_fields() {
        let (_dir, mut store) = temp_store();
        store.create("  alice  ", " pw1 ").unwrap();
        assert_eq!(store.username_at(0), Some("alice"));
        assert!(store.authenticate("alice", "pw1"));
    }

    #[test]
    fn create_rejects_empty_fields() {
        let (_dir, mut store) = temp_store();
        assert!(matches!(
            store.create("   ", "pw"),
            Err(UsersError::EmptyUsername)
        ));
        assert!(matches!(
            store.create("alice", "  "),
            Err(UsersError::EmptyPassword)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn create_rejects_duplicate_and_leaves_store_unchanged() {
        let (_dir, mut store) = temp_store();
        store.create("alice", "pw1").unwrap();
        let before = store.users().to_vec();
        let err = store.create("alice", "other").unwrap_err();
        assert!(matches!(err, UsersError::DuplicateUsername { .. }));
        assert!(err.is_validation());
        assert_eq!(store.users(), &before[..]);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let (_dir, mut store) = temp_store();
        store.create("alice", "pw1").unwrap();
        store.create("Alice", "pw2").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn authenticate_requires_exact_match() {
        let (_dir, mut store) = temp_store();
        store.create("alice", "pw1").unwrap();
        assert!(store.authenticate("alice", "pw1"));
        assert!(!store.authenticate("alice", "pw2"));
        assert!(!store.authenticate("Alice", "pw1"));
        assert!(!store.authenticate("bob", "pw1"));
    }
}
