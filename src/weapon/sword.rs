use super::{non_negative, ValidationError, WeaponBase};

/// An edged weapon.
#[derive(Debug, Clone, PartialEq)]
pub struct Sword {
    base: WeaponBase,
    sharp: f64,
    length: f64,
    is_double_edged: bool,
}

impl Sword {
    pub fn new(
        base: WeaponBase,
        sharp: f64,
        length: f64,
        is_double_edged: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            base,
            sharp: non_negative("sharp", sharp)?,
            length: non_negative("length", length)?,
            is_double_edged,
        })
    }

    pub fn base(&self) -> &WeaponBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut WeaponBase {
        &mut self.base
    }

    /// Sharpness rating.
    pub fn sharp(&self) -> f64 {
        self.sharp
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_double_edged(&self) -> bool {
        self.is_double_edged
    }
}
