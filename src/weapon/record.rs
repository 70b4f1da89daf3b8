use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    parse_date, Firearm, Sword, ValidationError, Weapon, WeaponBase, WeaponId, WeaponKind,
    DATE_FORMAT,
};

/// Flat JSON shape of a weapon record.
///
/// Used in both directions: decoded from request bodies and produced by
/// [`Weapon::to_representation`]. Variant fields are optional here and
/// required per `type` during conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cold_weapon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_inuse: Option<bool>,
    pub manufacture_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retired_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_double_edged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets_num: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
}

impl WeaponRecord {
    /// Decode a record from an arbitrary JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(value)?)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn required<T>(kind: WeaponKind, field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { kind, field })
}

impl From<&Weapon> for WeaponRecord {
    fn from(weapon: &Weapon) -> Self {
        let base = weapon.base();
        let mut record = WeaponRecord {
            id: base.id().map(|id| id.get()),
            kind: weapon.kind().as_str().to_string(),
            name: base.name().to_string(),
            materials: base.materials().to_vec(),
            is_cold_weapon: Some(weapon.is_cold_weapon()),
            is_inuse: Some(base.is_inuse()),
            manufacture_date: format_date(base.manufacture_date()),
            retired_date: base.retired_date().map(format_date),
            sharp: None,
            length: None,
            is_double_edged: None,
            bullets_num: None,
            range: None,
        };
        match weapon {
            Weapon::Sword(sword) => {
                record.sharp = Some(sword.sharp());
                record.length = Some(sword.length());
                record.is_double_edged = Some(sword.is_double_edged());
            }
            Weapon::Firearm(firearm) => {
                record.bullets_num = Some(i64::from(firearm.bullets_num()));
                record.range = Some(firearm.range());
            }
        }
        record
    }
}

impl TryFrom<WeaponRecord> for Weapon {
    type Error = ValidationError;

    fn try_from(record: WeaponRecord) -> Result<Self, Self::Error> {
        let kind: WeaponKind = record.kind.parse()?;

        if let Some(is_cold_weapon) = record.is_cold_weapon {
            if is_cold_weapon != kind.is_cold_weapon() {
                return Err(ValidationError::ColdWeaponMismatch {
                    kind,
                    is_cold_weapon,
                });
            }
        }

        let manufacture_date = parse_date("manufacture_date", &record.manufacture_date)?;
        let retired_date = record
            .retired_date
            .as_deref()
            .map(|value| parse_date("retired_date", value))
            .transpose()?;

        if let Some(is_inuse) = record.is_inuse {
            if is_inuse != retired_date.is_none() {
                return Err(ValidationError::InUseMismatch { is_inuse });
            }
        }

        let mut base = WeaponBase::new(record.name, record.materials, manufacture_date)?;
        if let Some(date) = retired_date {
            base.retire(date)?;
        }
        if let Some(id) = record.id {
            base = base.with_id(WeaponId::new(id));
        }

        let weapon = match kind {
            WeaponKind::Sword => Sword::new(
                base,
                required(kind, "sharp", record.sharp)?,
                required(kind, "length", record.length)?,
                required(kind, "is_double_edged", record.is_double_edged)?,
            )?
            .into(),
            WeaponKind::Firearm => Firearm::new(
                base,
                required(kind, "bullets_num", record.bullets_num)?,
                required(kind, "range", record.range)?,
            )?
            .into(),
        };
        Ok(weapon)
    }
}

/// Body of a retirement request: `{"id": 1, "retired_date": "2020-01-01"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetireRequest {
    pub id: i64,
    pub retired_date: String,
}

impl RetireRequest {
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn parse(&self) -> Result<(WeaponId, NaiveDate), ValidationError> {
        Ok((
            WeaponId::new(self.id),
            parse_date("retired_date", &self.retired_date)?,
        ))
    }
}
