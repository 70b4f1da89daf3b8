//! Weapon warehouse: records for swords and firearms, kept in a durable
//! store, with reports over the catalog and an HTTP surface.
//!
//! ```ignore
//! use weapon_warehouse::{SqliteWeaponStore, WeaponRepository};
//!
//! let repository = WeaponRepository::new(SqliteWeaponStore::open("weapons.sqlite")?);
//! let id = repository.add(&weapon)?;
//! let stats = repository.reports().weapon_stats()?;
//! ```

pub mod config;
pub mod logging;
pub mod report;
pub mod repository;
pub mod store;
pub mod weapon;

#[cfg(feature = "http")]
pub mod http;

pub use report::{UsageEntry, UsageStatus, WeaponReports, WeaponStats};
pub use repository::{ErrorKind, RepositoryError, WeaponRepository};
pub use store::{InMemoryWeaponStore, SqliteWeaponStore, StoreError, WeaponStore};
pub use weapon::{
    Firearm, RetireRequest, Sword, ValidationError, Weapon, WeaponBase, WeaponId, WeaponKind,
    WeaponRecord,
};
