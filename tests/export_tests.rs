mod common;
use common::{fd, setup_home, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

fn seed(home: &str, db: &str) {
    fd(home)
        .args([
            "--db",
            db,
            "volunteer",
            "--name",
            "Ann",
            "--area",
            "gift-shop",
            "--activities",
            "register",
        ])
        .assert()
        .success();

    fd(home)
        .args([
            "--db",
            db,
            "guest",
            "--name",
            "Carla",
            "--email",
            "carla@example.com",
            "--reason",
            "historic",
            "--newsletter",
        ])
        .assert()
        .success();
}

#[test]
fn test_export_csv_flat_rows() {
    let home = setup_home("export_csv");
    let db_path = setup_test_db("export_csv");
    seed(&home, &db_path);

    let out = temp_out("export_csv", "csv");

    fd(&home)
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed (2 rows)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("type,id,name,date"));
    assert!(content.contains("volunteer,1,Ann"));
    assert!(content.contains("gift-shop"));
    assert!(content.contains("guest,1,Carla"));
}

#[test]
fn test_export_json_tagged() {
    let home = setup_home("export_json");
    let db_path = setup_test_db("export_json");
    seed(&home, &db_path);

    let out = temp_out("export_json", "json");

    fd(&home)
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["type"], "volunteer");
    assert_eq!(rows[0]["area"], "gift-shop");
    assert_eq!(rows[1]["type"], "guest");
    assert_eq!(rows[1]["joinNewsletter"], true);
}

#[test]
fn test_export_requires_absolute_path() {
    let home = setup_home("export_relative");
    let db_path = setup_test_db("export_relative");
    seed(&home, &db_path);

    fd(&home)
        .args(["--db", &db_path, "export", "--file", "people.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_registry_writes_nothing() {
    let home = setup_home("export_empty");
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");

    fd(&home)
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("nothing exported"));

    assert!(!std::path::Path::new(&out).exists());
}
