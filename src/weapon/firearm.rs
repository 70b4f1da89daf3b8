use super::{non_negative, ValidationError, WeaponBase};

/// A firearm.
#[derive(Debug, Clone, PartialEq)]
pub struct Firearm {
    base: WeaponBase,
    bullets_num: u32,
    range: f64,
}

impl Firearm {
    /// `bullets_num` is taken signed so negative input is reported rather
    /// than wrapped.
    pub fn new(base: WeaponBase, bullets_num: i64, range: f64) -> Result<Self, ValidationError> {
        let bullets_num = u32::try_from(bullets_num).map_err(|_| ValidationError::OutOfRange {
            field: "bullets_num",
            value: bullets_num.to_string(),
        })?;
        Ok(Self {
            base,
            bullets_num,
            range: non_negative("range", range)?,
        })
    }

    pub fn base(&self) -> &WeaponBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut WeaponBase {
        &mut self.base
    }

    /// Magazine capacity.
    pub fn bullets_num(&self) -> u32 {
        self.bullets_num
    }

    /// Effective range.
    pub fn range(&self) -> f64 {
        self.range
    }
}
