//! Command handlers for CLI subcommands.

use std::io::{self, Write};
use std::path::Path;

use rolodex_store::UserStore;
use tracing::info;

use crate::cli::{DirectoryCommand, OutputFormat};
use crate::render::{user_card, write_users};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command against the users file at `path`.
///
/// The file is saved afterwards only if the command changed the store.
pub fn execute(command: DirectoryCommand, path: &Path) -> Result<()> {
    let mut store = UserStore::open(path)?;
    let mut out = io::stdout().lock();

    if run(command, &mut store, &mut out)? {
        store.save(path)?;
        info!(path = %path.display(), users = store.len(), "Saved users");
    }
    Ok(())
}

/// Runs one command against `store`. Returns true if the store was modified.
pub fn run<W: Write>(command: DirectoryCommand, store: &mut UserStore, out: &mut W) -> Result<bool> {
    match command {
        DirectoryCommand::Add { name, phone, city } => {
            let user = store.create(&name, &phone, &city)?;
            info!(id = %user.id, "Added user");
            writeln!(out, "Added: {}", user_card(&user))?;
            Ok(true)
        }
        DirectoryCommand::Get { id } => {
            let user = store.find(&id)?;
            writeln!(out, "Found: {}", user_card(&user))?;
            Ok(false)
        }
        DirectoryCommand::List { format } => {
            let users = store.list();
            if users.is_empty() && format != OutputFormat::Json {
                writeln!(out, "Catalog is empty")?;
            } else {
                write_users(out, &users, format)?;
            }
            Ok(false)
        }
        DirectoryCommand::Delete { id } => {
            let user = store.delete(&id)?;
            info!(id = %user.id, "Deleted user");
            writeln!(out, "Deleted: {}", user_card(&user))?;
            Ok(true)
        }
        DirectoryCommand::Update {
            id,
            name,
            phone,
            city,
        } => {
            let user = store.update(&id, &name, &phone, &city)?;
            info!(id = %user.id, "Updated user");
            writeln!(out, "Updated: {}", user_card(&user))?;
            Ok(true)
        }
        DirectoryCommand::Search { query } => {
            let users = store.search(&query.join(" "))?;
            write_users(out, &users, OutputFormat::Table)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_store::{ErrorKind, StoreError};
    use tempfile::tempdir;

    fn run_ok(command: DirectoryCommand, store: &mut UserStore) -> (bool, String) {
        let mut out = Vec::new();
        let changed = run(command, store, &mut out).unwrap();
        (changed, String::from_utf8(out).unwrap())
    }

    fn add(name: &str, city: &str) -> DirectoryCommand {
        DirectoryCommand::Add {
            name: name.to_string(),
            phone: "555-0000".to_string(),
            city: city.to_string(),
        }
    }

    fn store_kind(err: &(dyn std::error::Error + 'static)) -> Option<ErrorKind> {
        err.downcast_ref::<StoreError>().map(StoreError::kind)
    }

    #[test]
    fn test_add_marks_changed() {
        let mut store = UserStore::new();
        let (changed, output) = run_ok(add("Ann Lee", "Oslo"), &mut store);

        assert!(changed);
        assert!(output.starts_with("Added: id=1, name=Ann Lee"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_empty_and_filled() {
        let mut store = UserStore::new();
        let (changed, output) = run_ok(
            DirectoryCommand::List {
                format: OutputFormat::Table,
            },
            &mut store,
        );
        assert!(!changed);
        assert_eq!(output, "Catalog is empty\n");

        run_ok(add("Ann Lee", "Oslo"), &mut store);
        let (_, output) = run_ok(
            DirectoryCommand::List {
                format: OutputFormat::Table,
            },
            &mut store,
        );
        assert_eq!(output, "1. Ann Lee tel.:555-0000 from: Oslo\n");
    }

    #[test]
    fn test_search_joins_words() {
        let mut store = UserStore::new();
        run_ok(add("Ann Lee", "Oslo"), &mut store);
        run_ok(add("Bo Kim", "Linz"), &mut store);

        let (changed, output) = run_ok(
            DirectoryCommand::Search {
                query: vec!["ANN".to_string(), "lee".to_string()],
            },
            &mut store,
        );
        assert!(!changed);
        assert_eq!(output, "1. Ann Lee tel.:555-0000 from: Oslo\n");
    }

    #[test]
    fn test_store_errors_propagate() {
        let mut store = UserStore::new();
        let mut out = Vec::new();

        let err = run(DirectoryCommand::Get { id: "1".to_string() }, &mut store, &mut out).unwrap_err();
        assert_eq!(store_kind(err.as_ref()), Some(ErrorKind::NotFound));

        run_ok(add("Ann Lee", "Oslo"), &mut store);
        let err = run(
            DirectoryCommand::Delete {
                id: "one".to_string(),
            },
            &mut store,
            &mut out,
        )
        .unwrap_err();
        assert_eq!(store_kind(err.as_ref()), Some(ErrorKind::InvalidInput));
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_saves_mutations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");

        execute(add("Ann Lee", "Oslo"), &path).unwrap();
        execute(add("Bo Kim", "Linz"), &path).unwrap();
        execute(DirectoryCommand::Delete { id: "1".to_string() }, &path).unwrap();

        let store = UserStore::open(&path).unwrap();
        let users = store.list();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Bo Kim");
    }

    #[test]
    fn test_execute_read_only_does_not_create_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");

        execute(
            DirectoryCommand::List {
                format: OutputFormat::Brief,
            },
            &path,
        )
        .unwrap();

        assert!(!path.exists());
    }
}
