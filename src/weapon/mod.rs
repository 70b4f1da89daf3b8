//! Weapons - the two record variants and their shared fields.
//!
//! A [`Weapon`] is either a [`Sword`] (edged weapon) or a [`Firearm`]. Both
//! carry a [`WeaponBase`] with identity, name, materials, and the
//! manufacture/retirement dates. Constructors validate; once built, a record
//! is always well-formed.
//!
//! [`WeaponRecord`] is the flat wire representation. The `type` field is the
//! discriminant that selects the variant when decoding.
//!
//! ## Example
//!
//! ```ignore
//! use weapon_warehouse::weapon::{Sword, Weapon, WeaponBase};
//!
//! let base = WeaponBase::new("Excalibur", vec!["steel".into()], date(1200, 1, 1))?;
//! let sword: Weapon = Sword::new(base, 9.5, 1.1, true)?.into();
//!
//! let record = sword.to_representation();
//! assert_eq!(record.kind, "Sword");
//! ```

mod base;
mod error;
mod firearm;
mod record;
mod sword;
mod weapon;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use base::WeaponBase;
pub use error::ValidationError;
pub use firearm::Firearm;
pub use record::{RetireRequest, WeaponRecord};
pub use sword::Sword;
pub use weapon::Weapon;

pub(crate) use error::{non_negative, parse_date};

/// Wire and storage format for every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Store-assigned identity of a weapon record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponId(i64);

impl WeaponId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for WeaponId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The discriminant naming a weapon variant.
///
/// Serialized as `"Sword"` / `"Firearm"`, the values of the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Sword,
    Firearm,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 2] = [WeaponKind::Sword, WeaponKind::Firearm];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponKind::Sword => "Sword",
            WeaponKind::Firearm => "Firearm",
        }
    }

    /// Edged weapons are cold weapons; firearms are not.
    pub fn is_cold_weapon(&self) -> bool {
        matches!(self, WeaponKind::Sword)
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeaponKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeaponKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownType(s.to_string()))
    }
}
