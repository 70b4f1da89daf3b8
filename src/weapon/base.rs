use chrono::NaiveDate;

use super::{ValidationError, WeaponId};

/// Fields shared by every weapon variant.
///
/// `is_inuse` is not stored: a weapon is in use exactly when it has no
/// retirement date.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponBase {
    id: Option<WeaponId>,
    name: String,
    materials: Vec<String>,
    manufacture_date: NaiveDate,
    retired_date: Option<NaiveDate>,
}

impl WeaponBase {
    /// Create an in-service record with no id yet.
    pub fn new(
        name: impl Into<String>,
        materials: Vec<String>,
        manufacture_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id: None,
            name,
            materials,
            manufacture_date,
            retired_date: None,
        })
    }

    /// Builder form of [`retire`](Self::retire).
    pub fn retired_on(mut self, date: NaiveDate) -> Result<Self, ValidationError> {
        self.retire(date)?;
        Ok(self)
    }

    pub fn with_id(mut self, id: WeaponId) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_id(&mut self, id: WeaponId) {
        self.id = Some(id);
    }

    /// Take the weapon out of service on `date`.
    ///
    /// Fails if `date` is before the manufacture date; the record is left
    /// untouched in that case.
    pub fn retire(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        if date < self.manufacture_date {
            return Err(ValidationError::RetiredBeforeManufacture {
                manufactured: self.manufacture_date,
                retired: date,
            });
        }
        self.retired_date = Some(date);
        Ok(())
    }

    pub fn id(&self) -> Option<WeaponId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    pub fn manufacture_date(&self) -> NaiveDate {
        self.manufacture_date
    }

    pub fn retired_date(&self) -> Option<NaiveDate> {
        self.retired_date
    }

    pub fn is_inuse(&self) -> bool {
        self.retired_date.is_none()
    }
}
