#![cfg(feature = "sqlite")]

use chrono::NaiveDate;
use course_planner::{ClassDay, ConfigStore, CourseConfig, HourType, SqliteConfigStore};
use tempfile::TempDir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_config() -> CourseConfig {
    CourseConfig {
        course_name: "Soldadura Básica".to_string(),
        start_date: Some(d(2026, 3, 2)),
        class_days: vec![ClassDay::Tuesday, ClassDay::Thursday, ClassDay::Saturday],
        total_hours: 60.0,
        hour_type: HourType::Dgai,
        hours_per_session: 3.0,
        recovery_sessions_count: 2,
        custom_excluded_dates: vec![d(2026, 3, 17)],
    }
}

#[test]
fn empty_store_loads_none() {
    let dir = TempDir::new().unwrap();
    let store = SqliteConfigStore::new(dir.path().join("planner.db")).unwrap();
    assert!(store.load_config().unwrap().is_none());
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = SqliteConfigStore::new(dir.path().join("planner.db")).unwrap();

    let config = sample_config();
    store.save_config(&config).unwrap();
    let loaded = store.load_config().unwrap().expect("config stored");
    assert_eq!(loaded, config);
}

#[test]
fn saving_twice_keeps_a_single_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = SqliteConfigStore::new(dir.path().join("planner.db")).unwrap();

    store.save_config(&sample_config()).unwrap();
    let mut updated = sample_config();
    updated.total_hours = 80.0;
    store.save_config(&updated).unwrap();

    let loaded = store.load_config().unwrap().expect("config stored");
    assert_eq!(loaded.total_hours, 80.0);
}

#[test]
fn store_survives_reopening() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("planner.db");

    {
        let store = SqliteConfigStore::new(&path).unwrap();
        store.save_config(&sample_config()).unwrap();
    }

    let reopened = SqliteConfigStore::new(&path).unwrap();
    let loaded = reopened.load_config().unwrap().expect("config stored");
    assert_eq!(loaded, sample_config());
}

#[test]
fn invalid_config_is_rejected_before_write() {
    let dir = TempDir::new().unwrap();
    let store = SqliteConfigStore::new(dir.path().join("planner.db")).unwrap();

    let mut config = sample_config();
    config.total_hours = f64::INFINITY;
    assert!(store.save_config(&config).is_err());
    assert!(store.load_config().unwrap().is_none());
}
