//! WeaponStore - Abstract persistence for weapon records.

use super::StoreError;
use crate::weapon::{Weapon, WeaponId, WeaponKind};

/// Abstract persistence for weapon records.
///
/// Every weapon returned by a store carries its id.
pub trait WeaponStore: Send + Sync {
    /// Persist a new record and return the id assigned to it.
    ///
    /// Any id already on `weapon` is ignored. Ids are never reused.
    fn insert(&self, weapon: &Weapon) -> Result<WeaponId, StoreError>;

    /// Overwrite every field of the record with `id`. Returns false if absent.
    fn replace(&self, id: WeaponId, weapon: &Weapon) -> Result<bool, StoreError>;

    /// Delete the record with `id`. Returns true if it existed.
    fn remove(&self, id: WeaponId) -> Result<bool, StoreError>;

    /// Get a record by id. Returns None if not found.
    fn fetch(&self, id: WeaponId) -> Result<Option<Weapon>, StoreError>;

    /// All records in ascending id order.
    fn fetch_all(&self) -> Result<Vec<Weapon>, StoreError>;

    /// Records of one variant, in ascending id order.
    fn fetch_by_kind(&self, kind: WeaponKind) -> Result<Vec<Weapon>, StoreError>;
}
