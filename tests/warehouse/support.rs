//! Fixtures shared by the warehouse suites.

use chrono::NaiveDate;
use serde_json::{json, Value};
use weapon_warehouse::{Firearm, Sword, Weapon, WeaponBase};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sword(name: &str, made: NaiveDate) -> Weapon {
    let base = WeaponBase::new(name, vec!["steel".into()], made).unwrap();
    Sword::new(base, 9.5, 1.1, true).unwrap().into()
}

pub fn firearm(name: &str, made: NaiveDate) -> Weapon {
    let base = WeaponBase::new(name, vec!["steel".into(), "walnut".into()], made).unwrap();
    Firearm::new(base, 6, 50.0).unwrap().into()
}

pub fn excalibur_json() -> Value {
    json!({
        "type": "Sword",
        "name": "Excalibur",
        "materials": ["steel"],
        "is_cold_weapon": true,
        "is_inuse": true,
        "manufacture_date": "1200-01-01",
        "sharp": 9.5,
        "length": 1.1,
        "is_double_edged": true
    })
}

pub fn peacemaker_json() -> Value {
    json!({
        "type": "Firearm",
        "name": "Peacemaker",
        "materials": ["steel", "walnut"],
        "manufacture_date": "1873-01-01",
        "bullets_num": 6,
        "range": 50.0
    })
}
