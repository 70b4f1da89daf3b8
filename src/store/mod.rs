//! Stores - durable persistence for weapon records.
//!
//! [`WeaponStore`] is the raw persistence port: it assigns ids and moves rows
//! in and out, with no knowledge of retirement rules. Validation and
//! not-found semantics live one layer up in
//! [`WeaponRepository`](crate::repository::WeaponRepository).
//!
//! Two implementations:
//!
//! - [`SqliteWeaponStore`] - a single `weapons` table in SQLite. The durable store.
//! - [`InMemoryWeaponStore`] - a map behind a lock, for tests and throwaway runs.
//!
//! ## Example
//!
//! ```ignore
//! use weapon_warehouse::store::{SqliteWeaponStore, WeaponStore};
//!
//! let store = SqliteWeaponStore::open("weapons.sqlite")?;
//! let id = store.insert(&sword)?;
//! let loaded = store.fetch(id)?;
//! store.close()?;
//! ```

mod in_memory;
mod sqlite;
mod store;

use std::fmt;

pub use in_memory::InMemoryWeaponStore;
pub use sqlite::SqliteWeaponStore;
pub use store::WeaponStore;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Storage engine failure (unreachable, constraint violation, lock poisoned).
    Storage(String),
    /// A stored row could not be decoded back into a weapon.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Storage(msg) => write!(f, "weapon storage error: {}", msg),
            StoreError::Serde(msg) => write!(f, "weapon serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
