mod common;
use common::{guest, staff, volunteer};
use frontdesk::core::stats::round_hours;
use frontdesk::core::{CheckinLogic, StatsLogic};
use frontdesk::db::MemoryStore;
use frontdesk::models::Stats;
use frontdesk::utils::time::{parse_time_of_day, shift_seconds};

#[test]
fn test_empty_registry() {
    let store = MemoryStore::new();
    assert_eq!(StatsLogic::compute(&store).unwrap(), Stats::default());
}

#[test]
fn test_counts_rows_not_people() {
    let store = MemoryStore::new();
    CheckinLogic::create_volunteer(&store, volunteer("Ann", "tours")).unwrap();
    CheckinLogic::create_volunteer(&store, volunteer("Ann", "tours")).unwrap();
    CheckinLogic::create_guest(&store, guest("Carla", "historic")).unwrap();

    let stats = StatsLogic::compute(&store).unwrap();
    assert_eq!(stats.volunteers, 2);
    assert_eq!(stats.guests, 1);
    assert_eq!(stats.hours, 0);
}

#[test]
fn test_full_shift_counts() {
    let store = MemoryStore::new();
    CheckinLogic::create_staff(&store, staff("Dan", Some("9:00:00 AM"), Some("5:00:00 PM")))
        .unwrap();

    assert_eq!(StatsLogic::compute(&store).unwrap().hours, 8);
}

#[test]
fn test_split_rows_contribute_nothing() {
    let store = MemoryStore::new();
    CheckinLogic::clock_in(&store, "Dan".into(), "7/22/2025".into(), "9:00 AM".into(), None)
        .unwrap();
    CheckinLogic::clock_out(&store, "Dan".into(), "7/22/2025".into(), "5:00 PM".into(), None)
        .unwrap();

    assert_eq!(StatsLogic::compute(&store).unwrap().hours, 0);
}

#[test]
fn test_overnight_shift_clamps_to_zero() {
    let store = MemoryStore::new();
    CheckinLogic::create_staff(&store, staff("Eve", Some("10:00 PM"), Some("6:00 AM"))).unwrap();

    assert_eq!(StatsLogic::compute(&store).unwrap().hours, 0);
}

#[test]
fn test_unparsable_time_is_skipped() {
    let store = MemoryStore::new();
    CheckinLogic::create_staff(&store, staff("Eve", Some("after lunch"), Some("5:00 PM")))
        .unwrap();
    CheckinLogic::create_staff(&store, staff("Dan", Some("13:00"), Some("17:30"))).unwrap();

    // 4.5 h rounds half away from zero
    assert_eq!(StatsLogic::compute(&store).unwrap().hours, 5);
}

#[test]
fn test_hours_summed_before_rounding() {
    let store = MemoryStore::new();
    for _ in 0..3 {
        CheckinLogic::create_staff(&store, staff("Dan", Some("9:00 AM"), Some("9:20 AM")))
            .unwrap();
    }

    assert_eq!(StatsLogic::compute(&store).unwrap().hours, 1);
}

#[test]
fn test_detailed_hours_agree_with_rounded() {
    let store = MemoryStore::new();
    CheckinLogic::create_staff(&store, staff("Dan", Some("9:00 AM"), Some("5:10 PM"))).unwrap();
    CheckinLogic::create_staff(&store, staff("Eve", Some("1:00 PM"), Some("1:40 PM"))).unwrap();

    let (stats, seconds) = StatsLogic::compute_detailed(&store).unwrap();
    assert_eq!(seconds, 8 * 3600 + 50 * 60);
    assert_eq!(stats.hours, round_hours(seconds));
    assert_eq!(stats, StatsLogic::compute(&store).unwrap());
}

#[test]
fn test_time_formats() {
    assert!(parse_time_of_day("9:00:00 AM").is_some());
    assert!(parse_time_of_day("9:00\u{202f}pm").is_some());
    assert!(parse_time_of_day("17:45:10").is_some());
    assert!(parse_time_of_day("").is_none());
    assert!(parse_time_of_day("noon").is_none());

    assert_eq!(shift_seconds("9:00 AM", "9:30 AM"), Some(1800));
    assert_eq!(shift_seconds("5:00 PM", "9:00 AM"), Some(0));
}

#[test]
fn test_round_hours() {
    assert_eq!(round_hours(0), 0);
    assert_eq!(round_hours(5399), 1);
    assert_eq!(round_hours(5400), 2);
}
