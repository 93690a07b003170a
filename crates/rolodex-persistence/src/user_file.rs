//! The JSON document holding the whole user directory.

use std::path::{Path, PathBuf};

use rolodex_models::User;

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::error::Result;

/// File name used when no explicit path is configured.
pub const DEFAULT_FILE_NAME: &str = "users.json";

/// Location of the users document.
///
/// The document is a JSON array of user objects in store order:
/// ```text
/// [
///   { "id": 1, "name": "...", "phone": "...", "city": "...", "created_at": "..." },
///   ...
/// ]
/// ```
/// The id counter is not stored; readers derive it from the ids present.
#[derive(Debug, Clone)]
pub struct UserFile {
    path: PathBuf,
}

impl UserFile {
    /// Creates a handle for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record, or `None` when the file does not exist.
    pub fn load(&self) -> Result<Option<Vec<User>>> {
        read_json_optional(&self.path)
    }

    /// Replaces the document with `users`.
    pub fn save(&self, users: &[User]) -> Result<()> {
        atomic_write_json(&self.path, users)
    }
}

impl Default for UserFile {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistenceError;
    use rolodex_models::{ContactFields, UserId};
    use tempfile::tempdir;

    fn user(id: i64, name: &str) -> User {
        User::new(UserId::new(id), ContactFields::new(name, "555-0000", "Oslo"))
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempdir().unwrap();
        let file = UserFile::new(dir.path().join("users.json"));

        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_keeps_order() {
        let dir = tempdir().unwrap();
        let file = UserFile::new(dir.path().join("users.json"));

        let users = vec![user(5, "Eve"), user(2, "Bo"), user(9, "Ida")];
        file.save(&users).unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded, users);
    }

    #[test]
    fn test_save_empty_writes_array() {
        let dir = tempdir().unwrap();
        let file = UserFile::new(dir.path().join("users.json"));

        file.save(&[]).unwrap();

        assert_eq!(std::fs::read_to_string(file.path()).unwrap().trim(), "[]");
        assert_eq!(file.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let dir = tempdir().unwrap();
        let file = UserFile::new(dir.path().join("users.json"));
        std::fs::write(file.path(), r#"{"id": 1}"#).unwrap();

        assert!(matches!(file.load(), Err(PersistenceError::ParseError { .. })));
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let file = UserFile::new(blocker.join("users.json"));

        assert!(file.save(&[user(1, "Ann")]).is_err());
    }

    #[test]
    fn test_default_path() {
        assert_eq!(UserFile::default().path(), Path::new(DEFAULT_FILE_NAME));
    }
}
