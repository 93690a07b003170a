//! Conversion of caller-supplied id arguments.
//!
//! Lookups accept either typed ids or raw text typed by the operator. Text is
//! parsed only after the store has checked that it holds any records, so the
//! "catalog is empty" error takes precedence over a malformed id.

use rolodex_models::UserId;

use crate::error::{Result, StoreError};

/// A value that can name a user record.
pub trait UserIdInput {
    /// Resolves the argument to a signed integer id.
    ///
    /// Signed so that zero and negative values survive to the range checks
    /// of the operation that receives them.
    fn resolve(&self) -> Result<i64>;
}

impl UserIdInput for str {
    fn resolve(&self) -> Result<i64> {
        let raw = self.trim();
        raw.parse::<i64>()
            .map_err(|_| StoreError::NotAnInteger(raw.to_string()))
    }
}

impl UserIdInput for String {
    fn resolve(&self) -> Result<i64> {
        self.as_str().resolve()
    }
}

impl UserIdInput for i64 {
    fn resolve(&self) -> Result<i64> {
        Ok(*self)
    }
}

impl UserIdInput for i32 {
    fn resolve(&self) -> Result<i64> {
        Ok(i64::from(*self))
    }
}

impl UserIdInput for u64 {
    fn resolve(&self) -> Result<i64> {
        i64::try_from(*self).map_err(|_| StoreError::NotAnInteger(self.to_string()))
    }
}

impl UserIdInput for UserId {
    fn resolve(&self) -> Result<i64> {
        Ok(self.get())
    }
}

impl<T: UserIdInput + ?Sized> UserIdInput for &T {
    fn resolve(&self) -> Result<i64> {
        (**self).resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_ids() {
        assert_eq!("12".resolve().unwrap(), 12);
        assert_eq!(" 3 ".resolve().unwrap(), 3);
        assert_eq!("-4".resolve().unwrap(), -4);
        assert_eq!(String::from("8").resolve().unwrap(), 8);
    }

    #[test]
    fn test_text_not_integer() {
        assert!(matches!("abc".resolve(), Err(StoreError::NotAnInteger(s)) if s == "abc"));
        assert!(matches!("1.5".resolve(), Err(StoreError::NotAnInteger(_))));
        assert!(matches!("".resolve(), Err(StoreError::NotAnInteger(_))));
    }

    #[test]
    fn test_typed_ids() {
        assert_eq!(UserId::new(9).resolve().unwrap(), 9);
        assert_eq!(5_u64.resolve().unwrap(), 5);
        assert_eq!(0_i32.resolve().unwrap(), 0);
        assert!(u64::MAX.resolve().is_err());
    }
}
