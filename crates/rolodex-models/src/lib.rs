//! Core data models for Rolodex.
//!
//! This crate provides the value types shared by the store, the persistence
//! layer, and the CLI: user records and their identifiers.

pub mod ids;
pub mod timestamp;
pub mod user;

// Re-export main types
pub use ids::{NonPositiveId, UserId};
pub use user::{ContactFields, User};
