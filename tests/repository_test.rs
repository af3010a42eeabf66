//! Repository invariants across create/update/delete sequences

use std::fs;

use fleet_keeper::error::Error;
use fleet_keeper::infrastructure::persistence::FileRepository;
use fleet_keeper::types::{Driver, Trip, Vehicle};
use tempfile::tempdir;

#[test]
fn ids_stay_dense_over_arbitrary_delete_sequences() {
    let dir = tempdir().unwrap();
    let mut repo: FileRepository<Driver> = FileRepository::open(dir.path()).unwrap();
    for name in ["A", "B", "C", "D", "E"] {
        repo.create(Driver::new(name).unwrap()).unwrap();
    }

    repo.delete(2).unwrap(); // B
    repo.delete(3).unwrap(); // was D
    repo.create(Driver::new("F").unwrap()).unwrap();
    repo.delete(1).unwrap(); // A

    let ids: Vec<_> = repo.list().iter().map(|d| d.id).collect();
    let names: Vec<_> = repo.list().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(names, ["C", "E", "F"]);
}

#[test]
fn delete_second_of_three_keeps_original_relative_order() {
    let dir = tempdir().unwrap();
    let mut repo: FileRepository<Driver> = FileRepository::open(dir.path()).unwrap();
    for name in ["Maria", "Nikos", "Eleni"] {
        repo.create(Driver::new(name).unwrap()).unwrap();
    }

    repo.delete(2).unwrap();
    let rows: Vec<_> = repo.list().iter().map(|d| (d.id, d.name.as_str())).collect();
    assert_eq!(rows, [(1, "Maria"), (2, "Eleni")]);
}

#[test]
fn greek_names_collide_case_insensitively() {
    let dir = tempdir().unwrap();
    let mut repo: FileRepository<Driver> = FileRepository::open(dir.path()).unwrap();
    repo.create(Driver::new("Γιάννης").unwrap()).unwrap();

    let err = repo.create(Driver::new("γιάννης").unwrap()).unwrap_err();
    assert!(matches!(err, Error::Duplicate { .. }));
    assert_eq!(repo.len(), 1);
}

#[test]
fn vehicle_plates_are_unique_after_uppercasing() {
    let dir = tempdir().unwrap();
    let mut repo: FileRepository<Vehicle> = FileRepository::open(dir.path()).unwrap();
    repo.create(Vehicle::new("abc-1234", "2025-01-01", "2026-01-01").unwrap())
        .unwrap();
    assert_eq!(repo.list()[0].plate, "ABC-1234");

    let err = repo
        .create(Vehicle::new("Abc-1234", "2025-02-01", "2026-02-01").unwrap())
        .unwrap_err();
    assert!(matches!(err, Error::Duplicate { field: "plate", .. }));
}

#[test]
fn trips_have_no_uniqueness_constraint() {
    let dir = tempdir().unwrap();
    let mut repo: FileRepository<Trip> = FileRepository::open(dir.path()).unwrap();
    let trip = Trip::new("Maria", "ABC-1234", "2025-06-01 08:00", "2025-06-01 09:00", "x").unwrap();
    repo.create(trip.clone()).unwrap();
    repo.create(trip).unwrap();
    assert_eq!(repo.len(), 2);
}

#[test]
fn save_leaves_no_temporary_file_behind() {
    let dir = tempdir().unwrap();
    let mut repo: FileRepository<Driver> = FileRepository::open(dir.path()).unwrap();
    repo.create(Driver::new("Maria").unwrap()).unwrap();

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|n| n.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "stray temp files: {:?}", leftovers);
    assert!(dir.path().join("drivers.json").exists());
}

#[test]
fn update_missing_record_is_not_found() {
    let dir = tempdir().unwrap();
    let mut repo: FileRepository<Driver> = FileRepository::open(dir.path()).unwrap();
    let err = repo.update(4, Driver::new("Maria").unwrap()).unwrap_err();
    assert!(matches!(err, Error::NotFound { kind: "driver", id: 4 }));
}

#[test]
fn legacy_records_without_ids_get_positional_ids_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vehicles.json");
    fs::write(
        &path,
        r#"[
            {"plate": "AAA-1111", "kteo_passed": "2025-01-01", "kteo_next": "2026-01-01"},
            {"plate": "BBB-2222", "kteo_passed": "2025-02-01", "kteo_next": "2026-02-01"}
        ]"#,
    )
    .unwrap();

    let repo: FileRepository<Vehicle> = FileRepository::open(dir.path()).unwrap();
    let ids: Vec<_> = repo.list().iter().map(|v| v.id).collect();
    assert_eq!(ids, [1, 2]);

    // Reopening finds the rewritten file; no second migration pass
    let again: FileRepository<Vehicle> = FileRepository::open(dir.path()).unwrap();
    let ids: Vec<_> = again.list().iter().map(|v| v.id).collect();
    assert_eq!(ids, [1, 2]);
}

#[test]
fn corrupt_file_is_reported_and_preserved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trips.json");
    fs::write(&path, "[{\"id\": }").unwrap();

    match FileRepository::<Trip>::open(dir.path()) {
        Err(Error::DataCorruption { file, .. }) => assert_eq!(file, path),
        other => panic!("expected DataCorruption, got {:?}", other.map(|_| ())),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "[{\"id\": }");
}
