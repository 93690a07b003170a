//! Numeric identifiers for user records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user record.
///
/// Ids are positive, assigned by the store in increasing order, and never
/// reused for another record. They share `i64` with the id arguments callers
/// type in, so every stored id can be looked up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// The id handed to the first record of an empty store.
    pub const FIRST: UserId = UserId(1);

    /// Wraps a raw id value. `value` must be positive; use `TryFrom` for
    /// values that have not been checked.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the id that follows this one, or `None` past `i64::MAX`.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for ids below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonPositiveId(pub i64);

impl fmt::Display for NonPositiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user id must be positive, got {}", self.0)
    }
}

impl std::error::Error for NonPositiveId {}

impl TryFrom<i64> for UserId {
    type Error = NonPositiveId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(NonPositiveId(value));
        }
        Ok(Self(value))
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_increments() {
        assert_eq!(UserId::FIRST.next(), Some(UserId::new(2)));
    }

    #[test]
    fn test_next_at_max_is_none() {
        assert_eq!(UserId::new(i64::MAX).next(), None);
        assert_eq!(
            UserId::new(i64::MAX - 1).next(),
            Some(UserId::new(i64::MAX))
        );
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let id = UserId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<UserId>("0").is_err());
        assert!(serde_json::from_str::<UserId>("-5").is_err());
        // Above i64::MAX
        assert!(serde_json::from_str::<UserId>("9223372036854775808").is_err());
        assert_eq!(
            serde_json::from_str::<UserId>("9223372036854775807").unwrap(),
            UserId::new(i64::MAX)
        );
    }

    #[test]
    fn test_try_from() {
        assert_eq!(UserId::try_from(3), Ok(UserId::new(3)));
        assert_eq!(UserId::try_from(0), Err(NonPositiveId(0)));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", UserId::new(7)), "7");
    }

    #[test]
    fn test_ids_order_numerically() {
        assert!(UserId::new(2) < UserId::new(10));
    }
}
