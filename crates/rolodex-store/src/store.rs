//! The user record store.

use std::path::Path;

use rolodex_models::{ContactFields, User, UserId};
use rolodex_persistence::UserFile;

use crate::error::{Result, StoreError};
use crate::id_input::UserIdInput;

/// Ordered collection of user records plus the id counter.
///
/// Every accessor returns owned clones. Operations validate their arguments
/// completely before touching state, so a failed call leaves the store as it
/// was.
#[derive(Debug)]
pub struct UserStore {
    /// Records in insertion order.
    users: Vec<User>,
    /// Id handed to the next created record.
    next_id: UserId,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: UserId::FIRST,
        }
    }

    /// Creates a store populated from the file at `path`.
    ///
    /// A missing file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    /// Returns the id the next created record will receive.
    pub fn next_id(&self) -> UserId {
        self.next_id
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Adds a record and returns a copy of it.
    ///
    /// # Errors
    /// - [`StoreError::EmptyField`] if any field is blank after trimming
    /// - [`StoreError::IdsExhausted`] if no id would be left afterwards
    pub fn create(&mut self, name: &str, phone: &str, city: &str) -> Result<User> {
        let fields = validated(name, phone, city)?;
        let following = self
            .next_id
            .next()
            .ok_or(StoreError::IdsExhausted(self.next_id))?;

        let user = User::new(self.next_id, fields);
        self.users.push(user.clone());
        self.next_id = following;

        Ok(user)
    }

    /// Returns copies of all records in store order.
    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Returns a copy of the record with the given id.
    ///
    /// # Errors
    /// - [`StoreError::EmptyCatalog`] if the store is empty
    /// - [`StoreError::NotAnInteger`] if `id` is text that is not an integer
    /// - [`StoreError::UserNotFound`] if no record has that id
    pub fn find(&self, id: impl UserIdInput) -> Result<User> {
        let id = self.checked_id(&id)?;
        let index = self.position(id)?;
        Ok(self.users[index].clone())
    }

    /// Removes the record with the given id and returns it.
    ///
    /// The order of the remaining records is unchanged and the id is not
    /// handed out again. Fails like [`UserStore::find`].
    pub fn delete(&mut self, id: impl UserIdInput) -> Result<User> {
        let id = self.checked_id(&id)?;
        let index = self.position(id)?;
        Ok(self.users.remove(index))
    }

    /// Replaces the contact fields of a record and returns a copy of it.
    ///
    /// `id` and `created_at` are preserved.
    ///
    /// # Errors
    /// Everything [`UserStore::find`] reports, plus
    /// [`StoreError::NonPositiveId`] for ids below 1 and
    /// [`StoreError::EmptyField`] for blank fields.
    pub fn update(
        &mut self,
        id: impl UserIdInput,
        name: &str,
        phone: &str,
        city: &str,
    ) -> Result<User> {
        let id = self.checked_id(&id)?;
        if id < 1 {
            return Err(StoreError::NonPositiveId(id));
        }
        let fields = validated(name, phone, city)?;
        let index = self.position(id)?;

        let user = &mut self.users[index];
        user.apply(fields);
        Ok(user.clone())
    }

    /// Returns copies of every record whose name, city, or phone contains
    /// `query`, ignoring case, in store order.
    ///
    /// # Errors
    /// - [`StoreError::EmptyQuery`] if the query is blank
    /// - [`StoreError::NoMatches`] if nothing matches
    pub fn search(&self, query: &str) -> Result<Vec<User>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(StoreError::EmptyQuery);
        }

        let found: Vec<User> = self
            .users
            .iter()
            .filter(|user| user.matches(&needle))
            .cloned()
            .collect();

        if found.is_empty() {
            return Err(StoreError::NoMatches(needle));
        }
        Ok(found)
    }

    /// Writes every record to `path`, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        UserFile::new(path.as_ref()).save(&self.users)?;
        Ok(())
    }

    /// Replaces the store's contents with the records in `path`.
    ///
    /// A missing file empties the store. The id counter is rederived as one
    /// past the highest loaded id; a file holding `i64::MAX` is rejected with
    /// [`StoreError::IdsExhausted`]. On error the store is left unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let users = UserFile::new(path.as_ref()).load()?.unwrap_or_default();

        let next_id = match users.iter().map(|user| user.id).max() {
            Some(max) => max.next().ok_or(StoreError::IdsExhausted(max))?,
            None => UserId::FIRST,
        };
        self.next_id = next_id;
        self.users = users;
        Ok(())
    }

    /// Rejects lookups on an empty store, then resolves the id argument.
    fn checked_id(&self, id: &impl UserIdInput) -> Result<i64> {
        if self.users.is_empty() {
            return Err(StoreError::EmptyCatalog);
        }
        id.resolve()
    }

    /// Returns the index of the record with the given id.
    fn position(&self, id: i64) -> Result<usize> {
        self.users
            .iter()
            .position(|user| user.id.get() == id)
            .ok_or(StoreError::UserNotFound(id))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Trims the fields and rejects any that end up empty.
fn validated(name: &str, phone: &str, city: &str) -> Result<ContactFields> {
    let fields = ContactFields::new(name, phone, city);
    match fields.first_missing() {
        Some(field) => Err(StoreError::EmptyField { field }),
        None => Ok(fields),
    }
}
