#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use frontdesk::models::{GuestInput, StaffInput, VolunteerInput};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command isolated from the user's configuration directory.
pub fn fd(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("frontdesk");
    cmd.env("FRONTDESK_HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh config directory for one test.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_frontdesk_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_frontdesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn volunteer(name: &str, area: &str) -> VolunteerInput {
    VolunteerInput {
        name: Some(name.into()),
        date: Some("7/22/2025".into()),
        time_in: Some("9:00:00 AM".into()),
        time_out: None,
        area: Some(area.into()),
        activities: Some("led the morning tour".into()),
    }
}

pub fn guest(name: &str, reason: &str) -> GuestInput {
    GuestInput {
        name: Some(name.into()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        reason: Some(reason.into()),
        date: Some("7/22/2025".into()),
        ..Default::default()
    }
}

pub fn staff(name: &str, time_in: Option<&str>, time_out: Option<&str>) -> StaffInput {
    StaffInput {
        name: Some(name.into()),
        date: Some("7/22/2025".into()),
        time_in: time_in.map(Into::into),
        time_out: time_out.map(Into::into),
        notes: None,
    }
}
