use nights_catalog::MovieListing;
use nights_db::*;

fn seed(conn: &Connection) {
    let rows = [
        ("b", "Nuremberg", true, false),
        ("a", "Anaconda", false, true),
        ("c", "Tala2ni", true, true),
        ("d", "Haal", false, false),
    ];
    for (id, title, now, soon) in rows {
        upsert_listing(
            conn,
            &MovieListing {
                id: id.to_string(),
                title: title.to_string(),
                is_now_showing: now,
                is_coming_soon: soon,
                sources: Vec::new(),
                updated_at: None,
            },
        )
        .unwrap();
    }
}

#[test]
fn list_returns_insertion_order() {
    let conn = open_memory().unwrap();
    seed(&conn);
    let ids: Vec<String> = list_listings(&conn).unwrap().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["b", "a", "c", "d"]);
}

#[test]
fn get_unknown_listing_is_none() {
    let conn = open_memory().unwrap();
    assert!(get_listing(&conn, "zzz").unwrap().is_none());
}

#[test]
fn malformed_sources_column_is_reported() {
    let conn = open_memory().unwrap();
    conn.execute(
        "INSERT INTO movies (id, title, scraped_from) VALUES ('x', 'Broken', 'not json')",
        [],
    )
    .unwrap();
    let err = list_listings(&conn).unwrap_err();
    assert!(matches!(err, OperationError::Sources { .. }));
}
