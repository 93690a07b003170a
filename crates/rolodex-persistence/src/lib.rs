//! Persistence layer for Rolodex.
//!
//! This crate stores the user directory as a single JSON document, written
//! atomically (write to temp file, then rename) so an interrupted save never
//! leaves a truncated file behind.
//!
//! # Example
//!
//! ```no_run
//! use rolodex_models::{ContactFields, User, UserId};
//! use rolodex_persistence::UserFile;
//!
//! let file = UserFile::new("users.json");
//!
//! let user = User::new(UserId::FIRST, ContactFields::new("Ann Lee", "555-1234", "Oslo"));
//! file.save(&[user]).unwrap();
//!
//! let loaded = file.load().unwrap().unwrap_or_default();
//! assert_eq!(loaded.len(), 1);
//! ```

pub mod atomic;
pub mod error;
pub mod user_file;

pub use error::{PersistenceError, Result};
pub use user_file::{UserFile, DEFAULT_FILE_NAME};
