//! SqliteWeaponStore - durable weapon store on a single SQLite table.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{StoreError, WeaponStore};
use crate::weapon::{Firearm, Sword, Weapon, WeaponBase, WeaponId, WeaponKind};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS weapons (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    type             TEXT    NOT NULL CHECK (type IN ('Sword', 'Firearm')),
    name             TEXT    NOT NULL CHECK (length(trim(name)) > 0),
    materials        TEXT    NOT NULL,
    is_cold_weapon   INTEGER NOT NULL,
    is_inuse         INTEGER NOT NULL,
    manufacture_date TEXT    NOT NULL,
    retired_date     TEXT,
    sharp            REAL,
    length           REAL,
    is_double_edged  INTEGER,
    bullets_num      INTEGER,
    "range"          REAL
);
"#;

const SELECT_COLUMNS: &str = "SELECT id, type, name, materials, manufacture_date, retired_date, \
     sharp, length, is_double_edged, bullets_num, \"range\" FROM weapons";

/// Column values for one write. Variant columns are NULL for the other variant.
struct WeaponColumns<'a> {
    kind: &'static str,
    name: &'a str,
    materials: String,
    is_cold_weapon: bool,
    is_inuse: bool,
    manufacture_date: NaiveDate,
    retired_date: Option<NaiveDate>,
    sharp: Option<f64>,
    length: Option<f64>,
    is_double_edged: Option<bool>,
    bullets_num: Option<u32>,
    range: Option<f64>,
}

impl<'a> WeaponColumns<'a> {
    fn from_weapon(weapon: &'a Weapon) -> Result<Self, StoreError> {
        let base = weapon.base();
        let mut columns = WeaponColumns {
            kind: weapon.kind().as_str(),
            name: base.name(),
            materials: serde_json::to_string(base.materials())?,
            is_cold_weapon: weapon.is_cold_weapon(),
            is_inuse: base.is_inuse(),
            manufacture_date: base.manufacture_date(),
            retired_date: base.retired_date(),
            sharp: None,
            length: None,
            is_double_edged: None,
            bullets_num: None,
            range: None,
        };
        match weapon {
            Weapon::Sword(sword) => {
                columns.sharp = Some(sword.sharp());
                columns.length = Some(sword.length());
                columns.is_double_edged = Some(sword.is_double_edged());
            }
            Weapon::Firearm(firearm) => {
                columns.bullets_num = Some(firearm.bullets_num());
                columns.range = Some(firearm.range());
            }
        }
        Ok(columns)
    }
}

/// A row as read back, before validation.
struct WeaponRow {
    id: i64,
    kind: String,
    name: String,
    materials: String,
    manufacture_date: NaiveDate,
    retired_date: Option<NaiveDate>,
    sharp: Option<f64>,
    length: Option<f64>,
    is_double_edged: Option<bool>,
    bullets_num: Option<i64>,
    range: Option<f64>,
}

impl WeaponRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(WeaponRow {
            id: row.get(0)?,
            kind: row.get(1)?,
            name: row.get(2)?,
            materials: row.get(3)?,
            manufacture_date: row.get(4)?,
            retired_date: row.get(5)?,
            sharp: row.get(6)?,
            length: row.get(7)?,
            is_double_edged: row.get(8)?,
            bullets_num: row.get(9)?,
            range: row.get(10)?,
        })
    }

    fn into_weapon(self) -> Result<Weapon, StoreError> {
        let id = self.id;
        let corrupt = |msg: String| StoreError::Serde(format!("weapon row {}: {}", id, msg));
        let missing = |column: &str| corrupt(format!("{} is NULL", column));

        let kind: WeaponKind = self.kind.parse().map_err(|e| corrupt(format!("{}", e)))?;
        let materials: Vec<String> = serde_json::from_str(&self.materials)?;

        let mut base = WeaponBase::new(self.name, materials, self.manufacture_date)
            .map_err(|e| corrupt(e.to_string()))?
            .with_id(WeaponId::new(id));
        if let Some(date) = self.retired_date {
            base.retire(date).map_err(|e| corrupt(e.to_string()))?;
        }

        let weapon = match kind {
            WeaponKind::Sword => Sword::new(
                base,
                self.sharp.ok_or_else(|| missing("sharp"))?,
                self.length.ok_or_else(|| missing("length"))?,
                self.is_double_edged
                    .ok_or_else(|| missing("is_double_edged"))?,
            )
            .map(Weapon::from),
            WeaponKind::Firearm => Firearm::new(
                base,
                self.bullets_num.ok_or_else(|| missing("bullets_num"))?,
                self.range.ok_or_else(|| missing("range"))?,
            )
            .map(Weapon::from),
        };
        weapon.map_err(|e| corrupt(e.to_string()))
    }
}

/// SQLite-backed weapon store.
///
/// Holds one connection for the process lifetime. The connection sits behind
/// a mutex so the store can be shared across request handlers; operations are
/// serialized.
pub struct SqliteWeaponStore {
    conn: Mutex<Connection>,
}

impl SqliteWeaponStore {
    /// Open (or create) the database file at `path` and ensure the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// A private database that disappears when the store is closed.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Flush and release the connection.
    pub fn close(self) -> Result<(), StoreError> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        conn.close().map_err(|(_, err)| StoreError::from(err))
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }

    fn query(&self, sql: &str, kind: Option<WeaponKind>) -> Result<Vec<Weapon>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = match kind {
            Some(kind) => stmt
                .query_map(params![kind.as_str()], WeaponRow::read)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
            None => stmt
                .query_map([], WeaponRow::read)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
        };
        rows.into_iter().map(WeaponRow::into_weapon).collect()
    }
}

impl WeaponStore for SqliteWeaponStore {
    fn insert(&self, weapon: &Weapon) -> Result<WeaponId, StoreError> {
        let c = WeaponColumns::from_weapon(weapon)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO weapons (type, name, materials, is_cold_weapon, is_inuse, \
             manufacture_date, retired_date, sharp, length, is_double_edged, bullets_num, \"range\") \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                c.kind,
                c.name,
                c.materials,
                c.is_cold_weapon,
                c.is_inuse,
                c.manufacture_date,
                c.retired_date,
                c.sharp,
                c.length,
                c.is_double_edged,
                c.bullets_num,
                c.range,
            ],
        )?;
        Ok(WeaponId::new(conn.last_insert_rowid()))
    }

    fn replace(&self, id: WeaponId, weapon: &Weapon) -> Result<bool, StoreError> {
        let c = WeaponColumns::from_weapon(weapon)?;
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE weapons SET type = ?1, name = ?2, materials = ?3, is_cold_weapon = ?4, \
             is_inuse = ?5, manufacture_date = ?6, retired_date = ?7, sharp = ?8, length = ?9, \
             is_double_edged = ?10, bullets_num = ?11, \"range\" = ?12 WHERE id = ?13",
            params![
                c.kind,
                c.name,
                c.materials,
                c.is_cold_weapon,
                c.is_inuse,
                c.manufacture_date,
                c.retired_date,
                c.sharp,
                c.length,
                c.is_double_edged,
                c.bullets_num,
                c.range,
                id.get(),
            ],
        )?;
        Ok(changed > 0)
    }

    fn remove(&self, id: WeaponId) -> Result<bool, StoreError> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM weapons WHERE id = ?1", params![id.get()])?;
        Ok(changed > 0)
    }

    fn fetch(&self, id: WeaponId) -> Result<Option<Weapon>, StoreError> {
        let row = {
            let conn = self.conn()?;
            conn.query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.get()],
                WeaponRow::read,
            )
            .optional()?
        };
        row.map(WeaponRow::into_weapon).transpose()
    }

    fn fetch_all(&self) -> Result<Vec<Weapon>, StoreError> {
        self.query(&format!("{} ORDER BY id", SELECT_COLUMNS), None)
    }

    fn fetch_by_kind(&self, kind: WeaponKind) -> Result<Vec<Weapon>, StoreError> {
        self.query(
            &format!("{} WHERE type = ?1 ORDER BY id", SELECT_COLUMNS),
            Some(kind),
        )
    }
}
