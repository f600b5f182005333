use nights_catalog::{ListingUpdate, MovieListing};
use nights_db::*;

fn listing(id: &str, title: &str, now: bool, soon: bool, sources: &[&str]) -> MovieListing {
    MovieListing {
        id: id.to_string(),
        title: title.to_string(),
        is_now_showing: now,
        is_coming_soon: soon,
        sources: sources.iter().map(|s| s.to_string()).collect(),
        updated_at: None,
    }
}

#[test]
fn upsert_and_read_back() {
    let conn = open_memory().unwrap();
    upsert_listing(&conn, &listing("1", "Anaconda", true, false, &["vox", "cineco"])).unwrap();

    let got = get_listing(&conn, "1").unwrap().unwrap();
    assert_eq!(got.title, "Anaconda");
    assert!(got.is_now_showing);
    assert!(!got.is_coming_soon);
    assert_eq!(got.sources, vec!["vox", "cineco"]);
    assert!(got.updated_at.is_some());
}

#[test]
fn upsert_is_idempotent() {
    let conn = open_memory().unwrap();
    let l = listing("1", "Anaconda", true, false, &[]);
    upsert_listing(&conn, &l).unwrap();
    upsert_listing(&conn, &l).unwrap();

    assert_eq!(list_listings(&conn).unwrap().len(), 1);
}

#[test]
fn update_writes_only_present_fields() {
    let conn = open_memory().unwrap();
    upsert_listing(&conn, &listing("1", "Zootropolis 2", false, true, &[])).unwrap();

    let update = ListingUpdate {
        sources: Some(vec!["cineco".to_string()]),
        ..Default::default()
    };
    update_listing(&conn, "1", &update).unwrap();

    let got = get_listing(&conn, "1").unwrap().unwrap();
    assert_eq!(got.sources, vec!["cineco"]);
    assert!(!got.is_now_showing);
    assert!(got.is_coming_soon);
}

#[test]
fn update_promotes_status() {
    let conn = open_memory().unwrap();
    upsert_listing(&conn, &listing("1", "Zootropolis 2", false, true, &[])).unwrap();

    let update = ListingUpdate {
        sources: Some(vec!["cineco".to_string()]),
        is_now_showing: Some(true),
        is_coming_soon: Some(false),
    };
    update_listing(&conn, "1", &update).unwrap();

    let got = get_listing(&conn, "1").unwrap().unwrap();
    assert!(got.is_now_showing);
    assert!(!got.is_coming_soon);
    assert_eq!(got.sources, vec!["cineco"]);
}

#[test]
fn update_missing_listing_is_not_found() {
    let conn = open_memory().unwrap();
    let update = ListingUpdate {
        is_now_showing: Some(true),
        ..Default::default()
    };
    let err = update_listing(&conn, "missing", &update).unwrap_err();
    assert!(matches!(err, OperationError::NotFound { .. }));
}

#[test]
fn empty_update_is_a_no_op() {
    let conn = open_memory().unwrap();
    update_listing(&conn, "missing", &ListingUpdate::default()).unwrap();
}
