//! Stats and usage reports over a SQLite-backed repository.

use weapon_warehouse::{
    ErrorKind, SqliteWeaponStore, UsageStatus, WeaponRepository, WeaponStats,
};

use crate::support::{date, firearm, sword};

#[test]
fn stats_track_adds_retirements_and_deletes() {
    let repo = WeaponRepository::new(SqliteWeaponStore::open_in_memory().unwrap());
    assert_eq!(repo.reports().weapon_stats().unwrap(), WeaponStats::default());

    let excalibur = repo.add(&sword("Excalibur", date(1200, 1, 1))).unwrap();
    let peacemaker = repo.add(&firearm("Peacemaker", date(1873, 1, 1))).unwrap();
    repo.set_retired(peacemaker, date(1941, 1, 1)).unwrap();

    let stats = repo.reports().weapon_stats().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.in_use + stats.retired, stats.total);
    assert_eq!(stats.retired, 1);
    assert_eq!(stats.swords, 1);
    assert_eq!(stats.firearms, 1);

    repo.delete(excalibur).unwrap();
    let stats = repo.reports().weapon_stats().unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.swords, 0);
}

#[test]
fn usage_report_covers_only_requested_type() {
    let repo = WeaponRepository::new(SqliteWeaponStore::open_in_memory().unwrap());
    repo.add(&sword("Excalibur", date(1200, 1, 1))).unwrap();
    let id = repo.add(&sword("Durendal", date(778, 1, 1))).unwrap();
    repo.add(&firearm("Peacemaker", date(1873, 1, 1))).unwrap();
    repo.set_retired(id, date(800, 1, 1)).unwrap();

    let report = repo.reports().weapons_report("Sword").unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].name, "Excalibur");
    assert_eq!(report[0].status, UsageStatus::InService);
    assert_eq!(report[1].status, UsageStatus::Retired);
    assert_eq!(
        report[1].description,
        "Durendal (#2) retired on 0800-01-01, in service since 0778-01-01"
    );

    let err = repo.reports().weapons_report("Unknown").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
