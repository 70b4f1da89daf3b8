use chrono::NaiveDate;

use super::error::RepositoryError;
use crate::report::WeaponReports;
use crate::store::WeaponStore;
use crate::weapon::{ValidationError, Weapon, WeaponId, WeaponKind};

/// Create, update, delete, and query weapon records against a store.
///
/// Owns the store for the process lifetime. Operations are synchronous and
/// each touches at most one record; concurrent callers racing on the same id
/// get last-write-wins.
pub struct WeaponRepository<S> {
    store: S,
}

impl<S: WeaponStore> WeaponRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to close it at shutdown.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Aggregate reports over this repository.
    pub fn reports(&self) -> WeaponReports<'_, S> {
        WeaponReports::new(self)
    }

    /// Persist a new record. The store assigns the id; any id on `weapon` is ignored.
    pub fn add(&self, weapon: &Weapon) -> Result<WeaponId, RepositoryError> {
        let id = self.store.insert(weapon)?;
        tracing::info!(%id, kind = %weapon.kind(), name = weapon.name(), "weapon added");
        Ok(id)
    }

    /// Replace every field of the stored record with `weapon`'s.
    ///
    /// `weapon` must carry the id of an existing record. A retired record
    /// stays retired: an update without a retirement date is rejected.
    pub fn update(&self, weapon: &Weapon) -> Result<(), RepositoryError> {
        let id = weapon.id().ok_or(ValidationError::MissingId)?;
        let current = self.fetch_existing(id)?;

        if let (Some(retired), None) = (current.retired_date(), weapon.retired_date()) {
            tracing::warn!(%id, "update rejected: weapon is retired");
            return Err(ValidationError::Reactivation { retired }.into());
        }

        if !self.store.replace(id, weapon)? {
            return Err(RepositoryError::NotFound(id));
        }
        tracing::info!(%id, kind = %weapon.kind(), "weapon updated");
        Ok(())
    }

    pub fn delete(&self, id: WeaponId) -> Result<(), RepositoryError> {
        if !self.store.remove(id)? {
            tracing::warn!(%id, "delete of unknown weapon");
            return Err(RepositoryError::NotFound(id));
        }
        tracing::info!(%id, "weapon deleted");
        Ok(())
    }

    /// Get a record by id. `Ok(None)` means no such record.
    pub fn get(&self, id: WeaponId) -> Result<Option<Weapon>, RepositoryError> {
        tracing::debug!(%id, "get weapon");
        Ok(self.store.fetch(id)?)
    }

    /// Every record, in the store's natural order.
    pub fn get_all(&self) -> Result<Vec<Weapon>, RepositoryError> {
        Ok(self.store.fetch_all()?)
    }

    /// Records whose discriminant is `kind`.
    ///
    /// An unrecognized discriminant matches nothing and yields an empty list.
    pub fn get_all_by_type(&self, kind: &str) -> Result<Vec<Weapon>, RepositoryError> {
        match kind.parse::<WeaponKind>() {
            Ok(kind) => self.get_all_by_kind(kind),
            Err(_) => {
                tracing::debug!(kind, "no weapons of unknown type");
                Ok(Vec::new())
            }
        }
    }

    pub fn get_all_by_kind(&self, kind: WeaponKind) -> Result<Vec<Weapon>, RepositoryError> {
        Ok(self.store.fetch_by_kind(kind)?)
    }

    /// Take the weapon out of service on `retired_date`.
    ///
    /// Fails with a validation error, leaving the record unchanged, if the
    /// date precedes the manufacture date.
    pub fn set_retired(&self, id: WeaponId, retired_date: NaiveDate) -> Result<(), RepositoryError> {
        let mut weapon = self.fetch_existing(id)?;
        if let Err(err) = weapon.retire(retired_date) {
            tracing::warn!(%id, %retired_date, "retirement rejected: {}", err);
            return Err(err.into());
        }

        if !self.store.replace(id, &weapon)? {
            return Err(RepositoryError::NotFound(id));
        }
        tracing::info!(%id, %retired_date, "weapon retired");
        Ok(())
    }

    fn fetch_existing(&self, id: WeaponId) -> Result<Weapon, RepositoryError> {
        self.store
            .fetch(id)?
            .ok_or(RepositoryError::NotFound(id))
    }
}
