use std::fmt;

use chrono::NaiveDate;

use super::WeaponKind;

/// A weapon record failed validation.
///
/// Raised while constructing a record or decoding one from its wire
/// representation. Every variant is a caller mistake, never a store failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `name` is empty or whitespace.
    EmptyName,
    /// A numeric field is negative, not finite, or does not fit its column.
    OutOfRange { field: &'static str, value: String },
    /// A date field is not an ISO `YYYY-MM-DD` calendar date.
    InvalidDate { field: &'static str, value: String },
    /// `retired_date` precedes `manufacture_date`.
    RetiredBeforeManufacture {
        manufactured: NaiveDate,
        retired: NaiveDate,
    },
    /// `is_cold_weapon` disagrees with the weapon type.
    ColdWeaponMismatch { kind: WeaponKind, is_cold_weapon: bool },
    /// `is_inuse` disagrees with the presence of `retired_date`.
    InUseMismatch { is_inuse: bool },
    /// The `type` discriminant is not a known weapon type.
    UnknownType(String),
    /// A field required by the weapon type is absent.
    MissingField { kind: WeaponKind, field: &'static str },
    /// An update was attempted on a record that carries no id.
    MissingId,
    /// An update would bring a retired weapon back into service.
    Reactivation { retired: NaiveDate },
    /// The payload could not be decoded at all.
    Malformed(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "name must not be empty"),
            ValidationError::OutOfRange { field, value } => {
                write!(f, "{} must be a non-negative number, got {}", field, value)
            }
            ValidationError::InvalidDate { field, value } => {
                write!(f, "{} must be a YYYY-MM-DD date, got {:?}", field, value)
            }
            ValidationError::RetiredBeforeManufacture {
                manufactured,
                retired,
            } => write!(
                f,
                "retired date {} precedes manufacture date {}",
                retired, manufactured
            ),
            ValidationError::ColdWeaponMismatch {
                kind,
                is_cold_weapon,
            } => write!(
                f,
                "is_cold_weapon={} is not valid for a {}",
                is_cold_weapon, kind
            ),
            ValidationError::InUseMismatch { is_inuse } => write!(
                f,
                "is_inuse={} contradicts retired_date (a weapon is in use exactly when it has no retired date)",
                is_inuse
            ),
            ValidationError::UnknownType(kind) => write!(f, "unknown weapon type: {}", kind),
            ValidationError::MissingField { kind, field } => {
                write!(f, "{} requires field {}", kind, field)
            }
            ValidationError::MissingId => write!(f, "weapon record has no id"),
            ValidationError::Reactivation { retired } => write!(
                f,
                "weapon was retired on {} and cannot be returned to service",
                retired
            ),
            ValidationError::Malformed(msg) => write!(f, "malformed weapon payload: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::Malformed(err.to_string())
    }
}

/// Reject negative, NaN, and infinite values.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: value.to_string(),
        })
    }
}

pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, super::DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}
