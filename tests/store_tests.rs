mod common;
use common::{guest, setup_test_db, staff, volunteer};
use frontdesk::core::{CheckinLogic, RegistryLogic};
use frontdesk::db::{MemoryStore, RecordStore, SqliteStore};
use frontdesk::models::{Person, PersonKind, WorkArea};
use std::path::Path;

fn backends() -> Vec<(&'static str, Box<dyn RecordStore>)> {
    vec![
        ("memory", Box::new(MemoryStore::new())),
        (
            "sqlite",
            Box::new(SqliteStore::open_in_memory().expect("open sqlite")),
        ),
    ]
}

#[test]
fn test_volunteer_defaults_and_area_round_trip() {
    for (name, store) in backends() {
        let v = CheckinLogic::create_volunteer(store.as_ref(), volunteer("Ann", "gift-shop"))
            .expect("create volunteer");

        assert_eq!(v.id, 1, "{name}");
        assert_eq!(v.time_out, None, "{name}");
        assert_eq!(v.area, WorkArea::GiftShop, "{name}");

        let all = store.get_volunteers().expect("get volunteers");
        assert_eq!(all, vec![v], "{name}");
    }
}

#[test]
fn test_guest_newsletter_defaults_to_false() {
    for (name, store) in backends() {
        let g = CheckinLogic::create_guest(store.as_ref(), guest("Carla", "historic"))
            .expect("create guest");

        assert!(!g.join_newsletter, "{name}");
        assert_eq!(g.phone, None, "{name}");
        assert_eq!(store.get_guests().expect("get guests").len(), 1, "{name}");
    }
}

#[test]
fn test_ids_increase_and_are_never_reused() {
    for (name, store) in backends() {
        let s = store.as_ref();
        let a = CheckinLogic::create_staff(s, staff("Dan", Some("9:00 AM"), None)).unwrap();
        let b = CheckinLogic::create_staff(s, staff("Dan", None, Some("5:00 PM"))).unwrap();
        assert!(b.id > a.id, "{name}");

        assert!(RegistryLogic::delete_person(s, PersonKind::Staff, b.id).unwrap());
        let c = CheckinLogic::create_staff(s, staff("Eve", Some("8:00"), None)).unwrap();
        assert!(c.id > b.id, "{name}: id {} handed out again", c.id);
    }
}

#[test]
fn test_delete_is_scoped_to_kind() {
    for (name, store) in backends() {
        let s = store.as_ref();
        let v = CheckinLogic::create_volunteer(s, volunteer("Ann", "tours")).unwrap();
        let g = CheckinLogic::create_guest(s, guest("Bob", "donation")).unwrap();
        assert_eq!(v.id, g.id, "{name}: both kinds start at the same id");

        assert!(RegistryLogic::delete_person(s, PersonKind::Guest, g.id).unwrap());

        assert!(s.get_guests().unwrap().is_empty(), "{name}");
        assert_eq!(s.get_volunteers().unwrap().len(), 1, "{name}");
    }
}

#[test]
fn test_delete_missing_returns_false() {
    for (name, store) in backends() {
        let removed = RegistryLogic::delete_person(store.as_ref(), PersonKind::Volunteer, 42)
            .expect("delete");
        assert!(!removed, "{name}");
    }
}

#[test]
fn test_category_filter_matches_area() {
    for (name, store) in backends() {
        let s = store.as_ref();
        CheckinLogic::create_volunteer(s, volunteer("Ann", "gardens")).unwrap();
        CheckinLogic::create_volunteer(s, volunteer("Bob", "tours")).unwrap();
        CheckinLogic::create_volunteer(s, volunteer("Cid", "Gardens")).unwrap();

        let gardens = s.get_volunteers_by_category("gardens").unwrap();
        let names: Vec<&str> = gardens.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cid"], "{name}");

        assert_eq!(s.get_volunteers_by_category("Gardens").unwrap(), gardens, "{name}");
        assert!(s.get_volunteers_by_category("kitchen").unwrap().is_empty(), "{name}");
        assert!(s.get_volunteers_by_category("").unwrap().is_empty(), "{name}");
    }
}

#[test]
fn test_category_filter_accepts_checkin_spelling() {
    for (name, store) in backends() {
        let s = store.as_ref();
        let v = CheckinLogic::create_volunteer(s, volunteer("Ann", "Gift Shop")).unwrap();
        CheckinLogic::create_volunteer(s, volunteer("Bob", "office")).unwrap();

        for spelling in ["Gift Shop", "gift-shop", "gift_shop", " GIFT SHOP "] {
            let listed = s.get_volunteers_by_category(spelling).unwrap();
            assert_eq!(listed, vec![v.clone()], "{name}: {spelling:?}");
        }
    }
}

#[test]
fn test_unique_names_sorted_and_distinct() {
    for (name, store) in backends() {
        let s = store.as_ref();
        for n in ["Bob", "Ann", "Bob"] {
            CheckinLogic::create_volunteer(s, volunteer(n, "events")).unwrap();
        }
        CheckinLogic::clock_in(s, "Zed".into(), "7/22/2025".into(), "9:00 AM".into(), None)
            .unwrap();
        CheckinLogic::clock_out(s, "Zed".into(), "7/22/2025".into(), "5:00 PM".into(), None)
            .unwrap();

        assert_eq!(
            RegistryLogic::unique_volunteer_names(s).unwrap(),
            vec!["Ann", "Bob"],
            "{name}"
        );
        assert_eq!(RegistryLogic::unique_staff_names(s).unwrap(), vec!["Zed"], "{name}");
        assert!(RegistryLogic::unique_names(s, PersonKind::Guest).unwrap().is_empty());
    }
}

#[test]
fn test_all_people_groups_by_kind() {
    for (name, store) in backends() {
        let s = store.as_ref();
        CheckinLogic::create_staff(s, staff("Dan", Some("9:00 AM"), None)).unwrap();
        CheckinLogic::create_guest(s, guest("Carla", "other")).unwrap();
        CheckinLogic::create_volunteer(s, volunteer("Ann", "office")).unwrap();
        CheckinLogic::create_volunteer(s, volunteer("Bob", "office")).unwrap();

        let people = RegistryLogic::all_people(s).unwrap();
        let kinds: Vec<PersonKind> = people.iter().map(Person::kind).collect();
        assert_eq!(
            kinds,
            vec![
                PersonKind::Volunteer,
                PersonKind::Volunteer,
                PersonKind::Guest,
                PersonKind::Staff
            ],
            "{name}"
        );

        let guests = RegistryLogic::people_of_kind(s, PersonKind::Guest).unwrap();
        assert_eq!(guests.len(), 1, "{name}");
        assert_eq!(guests[0].name(), "Carla", "{name}");
    }
}

#[test]
fn test_sqlite_records_survive_reopen() {
    let db_path = setup_test_db("store_reopen");

    {
        let store = SqliteStore::open(Path::new(&db_path)).expect("open");
        let v = CheckinLogic::create_volunteer(&store, volunteer("Ann", "tours")).unwrap();
        let w = CheckinLogic::create_volunteer(&store, volunteer("Bob", "tours")).unwrap();
        assert!(RegistryLogic::delete_person(&store, PersonKind::Volunteer, w.id).unwrap());
        assert_eq!(v.id, 1);
    }

    let store = SqliteStore::open(Path::new(&db_path)).expect("reopen");
    let all = store.get_volunteers().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Ann");

    let next = CheckinLogic::create_volunteer(&store, volunteer("Cid", "tours")).unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn test_migrations_are_idempotent() {
    let db_path = setup_test_db("store_migrations");
    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    let first = frontdesk::db::migrate::run_pending_migrations(&conn).expect("migrate");
    assert!(!first.is_empty());

    let second = frontdesk::db::migrate::run_pending_migrations(&conn).expect("migrate again");
    assert!(second.is_empty());

    let versions = frontdesk::db::migrate::applied_versions(&conn).unwrap();
    assert_eq!(versions.len(), first.len());
}
