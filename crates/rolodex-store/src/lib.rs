//! In-memory user record store for Rolodex.
//!
//! This crate provides the `UserStore`, which owns:
//! - The ordered sequence of user records (insertion order)
//! - The monotonically increasing id counter
//! - Validation of contact fields and id arguments
//! - Whole-file persistence through `rolodex-persistence`
//!
//! # Example
//!
//! ```no_run
//! use rolodex_store::{ErrorKind, UserStore};
//!
//! let mut store = UserStore::open("users.json").unwrap();
//!
//! let ann = store.create("Ann Lee", "555-1234", "Oslo").unwrap();
//! let found = store.find(ann.id).unwrap();
//! assert_eq!(found.name, "Ann Lee");
//!
//! match store.search("linz") {
//!     Ok(users) => println!("{} match(es)", users.len()),
//!     Err(e) if e.kind() == ErrorKind::NotFound => println!("nobody in Linz"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//!
//! store.save("users.json").unwrap();
//! ```

pub mod error;
pub mod id_input;
pub mod store;

pub use error::{ErrorKind, Result, StoreError};
pub use id_input::UserIdInput;
pub use store::UserStore;
