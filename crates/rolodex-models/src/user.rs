//! User record types for Rolodex.
//!
//! A [`User`] is a plain value: the store hands out clones, so changing a
//! returned record never reaches stored state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::UserId;

/// The editable contact fields of a record, trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub city: String,
}

impl ContactFields {
    /// Builds the field set, trimming surrounding whitespace from each value.
    pub fn new(name: &str, phone: &str, city: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            city: city.trim().to_string(),
        }
    }

    /// Returns the label of the first field that is empty, if any.
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("Name", &self.name),
            ("Phone", &self.phone),
            ("City", &self.city),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(label, _)| label)
    }
}

/// A stored contact entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Phone number, kept as entered.
    pub phone: String,

    /// City of residence.
    pub city: String,

    /// When the record was created.
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a record stamped with the current time.
    pub fn new(id: UserId, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            city: fields.city,
            created_at: Utc::now(),
        }
    }

    /// Replaces the contact fields, leaving `id` and `created_at` alone.
    pub fn apply(&mut self, fields: ContactFields) {
        self.name = fields.name;
        self.phone = fields.phone;
        self.city = fields.city;
    }

    /// Returns true if `needle` occurs in the name, city, or phone.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.city, &self.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} tel.:{} from: {}",
            self.id, self.name, self.phone, self.city
        )
    }
}
