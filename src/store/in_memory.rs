//! InMemoryWeaponStore - BTreeMap-backed weapon store for testing and development.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{StoreError, WeaponStore};
use crate::weapon::{Weapon, WeaponId, WeaponKind, WeaponRecord};

struct InMemoryState {
    /// Serialized `WeaponRecord`s keyed by id.
    rows: BTreeMap<WeaponId, Vec<u8>>,
    next_id: i64,
}

/// In-memory weapon store.
///
/// Rows are kept serialized so a stored record is decoded exactly like one
/// read from disk. Clone-friendly via Arc; clones share storage.
#[derive(Clone)]
pub struct InMemoryWeaponStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl Default for InMemoryWeaponStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWeaponStore {
    /// Create a new empty store. The first id handed out is 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryState {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    fn encode(id: WeaponId, weapon: &Weapon) -> Result<Vec<u8>, StoreError> {
        let mut record = weapon.to_representation();
        record.id = Some(id.get());
        Ok(serde_json::to_vec(&record)?)
    }

    fn decode(bytes: &[u8]) -> Result<Weapon, StoreError> {
        let record: WeaponRecord = serde_json::from_slice(bytes)?;
        Weapon::try_from(record).map_err(|e| StoreError::Serde(e.to_string()))
    }

    fn lock_poisoned<T>(_: T) -> StoreError {
        StoreError::Storage("lock poisoned".into())
    }
}

impl WeaponStore for InMemoryWeaponStore {
    fn insert(&self, weapon: &Weapon) -> Result<WeaponId, StoreError> {
        let mut state = self.state.write().map_err(Self::lock_poisoned)?;
        let id = WeaponId::new(state.next_id);
        let bytes = Self::encode(id, weapon)?;
        state.next_id += 1;
        state.rows.insert(id, bytes);
        Ok(id)
    }

    fn replace(&self, id: WeaponId, weapon: &Weapon) -> Result<bool, StoreError> {
        let bytes = Self::encode(id, weapon)?;
        let mut state = self.state.write().map_err(Self::lock_poisoned)?;
        match state.rows.get_mut(&id) {
            Some(row) => {
                *row = bytes;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: WeaponId) -> Result<bool, StoreError> {
        let mut state = self.state.write().map_err(Self::lock_poisoned)?;
        Ok(state.rows.remove(&id).is_some())
    }

    fn fetch(&self, id: WeaponId) -> Result<Option<Weapon>, StoreError> {
        let state = self.state.read().map_err(Self::lock_poisoned)?;
        state.rows.get(&id).map(|bytes| Self::decode(bytes)).transpose()
    }

    fn fetch_all(&self) -> Result<Vec<Weapon>, StoreError> {
        let state = self.state.read().map_err(Self::lock_poisoned)?;
        state.rows.values().map(|bytes| Self::decode(bytes)).collect()
    }

    fn fetch_by_kind(&self, kind: WeaponKind) -> Result<Vec<Weapon>, StoreError> {
        let mut weapons = self.fetch_all()?;
        weapons.retain(|weapon| weapon.kind() == kind);
        Ok(weapons)
    }
}
