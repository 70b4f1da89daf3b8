//! Reports - aggregate statistics and per-record usage over stored weapons.
//!
//! ```ignore
//! let stats = repository.reports().weapon_stats()?;
//! let usage = repository.reports().weapons_report("Sword")?;
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, WeaponRepository};
use crate::store::WeaponStore;
use crate::weapon::{Weapon, WeaponId, WeaponKind, DATE_FORMAT};

/// Counts across the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub total: usize,
    pub in_use: usize,
    pub retired: usize,
    pub swords: usize,
    pub firearms: usize,
}

impl WeaponStats {
    pub fn from_weapons<'a>(weapons: impl IntoIterator<Item = &'a Weapon>) -> Self {
        let mut stats = WeaponStats::default();
        for weapon in weapons {
            stats.total += 1;
            if weapon.is_inuse() {
                stats.in_use += 1;
            } else {
                stats.retired += 1;
            }
            match weapon.kind() {
                WeaponKind::Sword => stats.swords += 1,
                WeaponKind::Firearm => stats.firearms += 1,
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageStatus {
    InService,
    Retired,
}

/// One line of a usage report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub id: Option<WeaponId>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WeaponKind,
    pub status: UsageStatus,
    pub since: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retired_on: Option<String>,
    pub description: String,
}

impl UsageEntry {
    pub fn describe(weapon: &Weapon) -> Self {
        let since = fmt_date(weapon.manufacture_date());
        let label = match weapon.id() {
            Some(id) => format!("{} (#{})", weapon.name(), id),
            None => weapon.name().to_string(),
        };
        let (status, retired_on, description) = match weapon.retired_date() {
            Some(date) => {
                let retired_on = fmt_date(date);
                let description =
                    format!("{} retired on {}, in service since {}", label, retired_on, since);
                (UsageStatus::Retired, Some(retired_on), description)
            }
            None => (
                UsageStatus::InService,
                None,
                format!("{} in service since {}", label, since),
            ),
        };
        UsageEntry {
            id: weapon.id(),
            name: weapon.name().to_string(),
            kind: weapon.kind(),
            status,
            since,
            retired_on,
            description,
        }
    }
}

fn fmt_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Reports computed from a repository's current contents.
pub struct WeaponReports<'a, S> {
    repository: &'a WeaponRepository<S>,
}

impl<'a, S: WeaponStore> WeaponReports<'a, S> {
    pub fn new(repository: &'a WeaponRepository<S>) -> Self {
        Self { repository }
    }

    /// Totals, in-use/retired split, and per-variant counts in one scan.
    pub fn weapon_stats(&self) -> Result<WeaponStats, RepositoryError> {
        let weapons = self.repository.get_all()?;
        Ok(WeaponStats::from_weapons(&weapons))
    }

    /// Usage line for every record of type `kind`.
    ///
    /// Unlike listing by type, an unrecognized `kind` is a validation error.
    pub fn weapons_report(&self, kind: &str) -> Result<Vec<UsageEntry>, RepositoryError> {
        let kind: WeaponKind = kind.parse()?;
        let weapons = self.repository.get_all_by_kind(kind)?;
        Ok(weapons.iter().map(UsageEntry::describe).collect())
    }
}
