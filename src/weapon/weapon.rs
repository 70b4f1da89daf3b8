use chrono::NaiveDate;

use super::{Firearm, Sword, ValidationError, WeaponBase, WeaponId, WeaponKind, WeaponRecord};

/// A weapon record: one of the two variants.
///
/// Shared fields are reached through [`base`](Self::base) or the delegating
/// accessors; variant fields by matching.
#[derive(Debug, Clone, PartialEq)]
pub enum Weapon {
    Sword(Sword),
    Firearm(Firearm),
}

impl Weapon {
    pub fn kind(&self) -> WeaponKind {
        match self {
            Weapon::Sword(_) => WeaponKind::Sword,
            Weapon::Firearm(_) => WeaponKind::Firearm,
        }
    }

    pub fn base(&self) -> &WeaponBase {
        match self {
            Weapon::Sword(sword) => sword.base(),
            Weapon::Firearm(firearm) => firearm.base(),
        }
    }

    fn base_mut(&mut self) -> &mut WeaponBase {
        match self {
            Weapon::Sword(sword) => sword.base_mut(),
            Weapon::Firearm(firearm) => firearm.base_mut(),
        }
    }

    pub fn id(&self) -> Option<WeaponId> {
        self.base().id()
    }

    pub fn with_id(mut self, id: WeaponId) -> Self {
        self.base_mut().set_id(id);
        self
    }

    pub fn name(&self) -> &str {
        self.base().name()
    }

    pub fn materials(&self) -> &[String] {
        self.base().materials()
    }

    pub fn is_cold_weapon(&self) -> bool {
        self.kind().is_cold_weapon()
    }

    pub fn is_inuse(&self) -> bool {
        self.base().is_inuse()
    }

    pub fn manufacture_date(&self) -> NaiveDate {
        self.base().manufacture_date()
    }

    pub fn retired_date(&self) -> Option<NaiveDate> {
        self.base().retired_date()
    }

    /// See [`WeaponBase::retire`].
    pub fn retire(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        self.base_mut().retire(date)
    }

    /// Flat field map for serialization, tagged with the `type` discriminant.
    pub fn to_representation(&self) -> WeaponRecord {
        WeaponRecord::from(self)
    }
}

impl From<Sword> for Weapon {
    fn from(sword: Sword) -> Self {
        Weapon::Sword(sword)
    }
}

impl From<Firearm> for Weapon {
    fn from(firearm: Firearm) -> Self {
        Weapon::Firearm(firearm)
    }
}
