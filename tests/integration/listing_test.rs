//! Integration tests for listing CRUD and the two-tier access policy.

mod helpers;

use axum::http::StatusCode;

use helpers::listing_payload;

#[tokio::test]
async fn test_admin_crud_flow() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    // Create
    let created = app
        .request(
            "POST",
            "/api/ilanlar",
            Some(listing_payload("kedi")),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body.get("ilan_no").unwrap().as_i64().unwrap(), 1);
    assert_eq!(
        created.body.get("user_email").unwrap().as_str().unwrap(),
        "admin@test.com"
    );

    // Read
    let fetched = app
        .request("GET", "/api/ilanlar/1", None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body.get("tur").unwrap().as_str().unwrap(), "kedi");

    // Update: fields change, number does not
    let updated = app
        .request(
            "PUT",
            "/api/ilanlar/1",
            Some(listing_payload("köpek")),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body.get("ilan_no").unwrap().as_i64().unwrap(), 1);
    assert_eq!(updated.body.get("tur").unwrap().as_str().unwrap(), "köpek");

    // Delete
    let deleted = app
        .request("DELETE", "/api/ilanlar/1", None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert!(deleted.body.get("message").is_some());

    let gone = app
        .request("GET", "/api/ilanlar/1", None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_numbers_are_sequential_per_creation() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    for expected in 1..=3 {
        let created = app
            .request(
                "POST",
                "/api/ilanlar",
                Some(listing_payload("kedi")),
                Some(&token),
            )
            .await;
        assert_eq!(
            created.body.get("ilan_no").unwrap().as_i64().unwrap(),
            expected
        );
    }
}

#[tokio::test]
async fn test_regular_user_can_read_but_not_write() {
    let app = helpers::TestApp::new().await;
    let admin_token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;
    let user_token = app
        .register_and_login("uye@test.com", "parola123", false)
        .await;

    app.request(
        "POST",
        "/api/ilanlar",
        Some(listing_payload("kedi")),
        Some(&admin_token),
    )
    .await;

    // Reads are allowed.
    let list = app
        .request("GET", "/api/ilanlar", None, Some(&user_token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap().len(), 1);

    let get = app
        .request("GET", "/api/ilanlar/1", None, Some(&user_token))
        .await;
    assert_eq!(get.status, StatusCode::OK);

    // Writes are not.
    let create = app
        .request(
            "POST",
            "/api/ilanlar",
            Some(listing_payload("köpek")),
            Some(&user_token),
        )
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);

    let update = app
        .request(
            "PUT",
            "/api/ilanlar/1",
            Some(listing_payload("köpek")),
            Some(&user_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request("DELETE", "/api/ilanlar/1", None, Some(&user_token))
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_listings_require_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/ilanlar", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_listing_number_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    let get = app
        .request("GET", "/api/ilanlar/99", None, Some(&token))
        .await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);

    let update = app
        .request(
            "PUT",
            "/api/ilanlar/99",
            Some(listing_payload("kedi")),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app
        .request("DELETE", "/api/ilanlar/99", None, Some(&token))
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_number_is_not_recycled() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    app.request(
        "POST",
        "/api/ilanlar",
        Some(listing_payload("kedi")),
        Some(&token),
    )
    .await;
    app.request("DELETE", "/api/ilanlar/1", None, Some(&token))
        .await;

    let second = app
        .request(
            "POST",
            "/api/ilanlar",
            Some(listing_payload("köpek")),
            Some(&token),
        )
        .await;
    assert_eq!(second.body.get("ilan_no").unwrap().as_i64().unwrap(), 2);
}
