use super::*;
use crate::types::RowId;

fn creds() -> Credentials {
    Credentials {
        url: "https://demo.supabase.co".to_string(),
        service_key: "key".to_string(),
        table: "movies".to_string(),
    }
}

#[test]
fn table_url_joins_rest_path() {
    assert_eq!(table_url(&creds()), "https://demo.supabase.co/rest/v1/movies");
}

#[test]
fn page_query_requests_all_reconciled_columns() {
    let q = page_query(2000);
    assert!(q.contains(&("offset", "2000".to_string())));
    assert!(q.contains(&("limit", PAGE_SIZE.to_string())));
    let select = &q.iter().find(|(k, _)| *k == "select").unwrap().1;
    for column in ["id", "title", "is_now_showing", "is_coming_soon", "scraped_from"] {
        assert!(select.split(',').any(|c| c == column), "missing {column}");
    }
}

#[test]
fn unauthorized_maps_to_invalid_credentials() {
    let err = error_for_status(StatusCode::UNAUTHORIZED, String::new());
    assert!(matches!(err, SupabaseError::InvalidCredentials(_)));
    let err = error_for_status(StatusCode::FORBIDDEN, String::new());
    assert!(matches!(err, SupabaseError::InvalidCredentials(_)));
}

#[test]
fn other_statuses_keep_a_truncated_body() {
    let body = "x".repeat(500);
    match error_for_status(StatusCode::INTERNAL_SERVER_ERROR, body) {
        SupabaseError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message.len(), 200);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rows_with_nulls_become_listings() {
    let rows: Vec<ListingRow> = serde_json::from_str(
        r#"[
            {"id": 7, "title": "Anaconda", "is_now_showing": true, "is_coming_soon": null, "scraped_from": ["vox"]},
            {"id": "b1c2", "title": null, "is_now_showing": null, "is_coming_soon": true, "scraped_from": null}
        ]"#,
    )
    .unwrap();

    assert!(matches!(rows[0].id, RowId::Int(7)));
    let listings: Vec<MovieListing> = rows.into_iter().map(MovieListing::from).collect();
    assert_eq!(listings[0].id, "7");
    assert_eq!(listings[0].sources, vec!["vox"]);
    assert!(!listings[0].is_coming_soon);
    assert_eq!(listings[1].id, "b1c2");
    assert_eq!(listings[1].title, "");
    assert!(listings[1].sources.is_empty());
}

#[test]
fn patch_body_flattens_changed_columns() {
    let update = ListingUpdate {
        sources: Some(vec!["cineco".to_string()]),
        is_now_showing: Some(true),
        is_coming_soon: Some(false),
    };
    let body = PatchBody {
        update: &update,
        updated_at: "2026-01-01T00:00:00+00:00".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "scraped_from": ["cineco"],
            "is_now_showing": true,
            "is_coming_soon": false,
            "updated_at": "2026-01-01T00:00:00+00:00",
        })
    );
}

#[test]
fn client_rejects_key_with_newline() {
    let mut c = creds();
    c.service_key = "bad\nkey".to_string();
    assert!(matches!(SupabaseClient::new(c), Err(SupabaseError::Config(_))));
}

#[test]
fn paging_stops_on_a_short_page() {
    assert_eq!(next_offset(0, PAGE_SIZE), Some(PAGE_SIZE));
    assert_eq!(next_offset(PAGE_SIZE, PAGE_SIZE), Some(2 * PAGE_SIZE));
    assert_eq!(next_offset(2 * PAGE_SIZE, 17), None);
    assert_eq!(next_offset(0, 0), None);
}

#[test]
fn empty_patch_representation_is_not_found() {
    match patched_rows("42", "[]") {
        Err(SupabaseError::NotFound(id)) => assert_eq!(id, "42"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn patch_representation_with_a_row_succeeds() {
    let body = r#"[{"id": 42, "title": "Anaconda", "scraped_from": ["vox"]}]"#;
    assert!(patched_rows("42", body).is_ok());
}

#[test]
fn malformed_patch_representation_is_a_json_error() {
    assert!(matches!(patched_rows("42", "<html>"), Err(SupabaseError::Json(_))));
}
