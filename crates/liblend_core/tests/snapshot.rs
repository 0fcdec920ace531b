use chrono::{NaiveDate, NaiveDateTime};
use liblend_core::db::open_db_in_memory;
use liblend_core::{LendingService, Snapshot, SqliteLendingStore};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

#[test]
fn snapshot_loads_all_three_collections() {
    let conn = open_db_in_memory().unwrap();
    let snapshot = Snapshot::load(&conn).unwrap();

    assert_eq!(snapshot.books.len(), 4);
    assert_eq!(snapshot.users.len(), 5);
    assert!(snapshot.loans.is_empty());
}

#[test]
fn snapshot_serializes_for_embedders() {
    let mut conn = open_db_in_memory().unwrap();

    let mut lending = LendingService::new(SqliteLendingStore::new(&mut conn));
    lending.borrow_at(3, "shyam", t0()).unwrap();
    drop(lending);

    let snapshot = Snapshot::load(&conn).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["books"][2]["title"], "Sapiens");
    assert_eq!(json["books"][2]["status"], "Borrowed");
    assert_eq!(json["loans"][0]["book_title"], "Sapiens");
    assert_eq!(json["loans"][0]["return_date"], "-");
    assert_eq!(json["loans"][0]["status"], "Borrowed");
    assert_eq!(json["users"][0]["role"], "Admin");
}
