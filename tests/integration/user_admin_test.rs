//! Integration tests for admin user management.

mod helpers;

use axum::http::StatusCode;

fn user_body(email: &str, is_admin: bool) -> serde_json::Value {
    serde_json::json!({
        "first_name": "Yeni",
        "last_name": "Kullanici",
        "email": email,
        "phone": null,
        "is_admin": is_admin,
        "password": "parola123",
    })
}

#[tokio::test]
async fn test_user_management_requires_admin() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("uye@test.com", "parola123", false)
        .await;

    let list = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);

    let create = app
        .request(
            "POST",
            "/api/users",
            Some(user_body("x@test.com", false)),
            Some(&token),
        )
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_users() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;
    app.register("uye@test.com", "parola123", false).await;

    let list = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_admin_creates_and_fetches_user() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    let created = app
        .request(
            "POST",
            "/api/users",
            Some(user_body("yeni@test.com", false)),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    let fetched = app
        .request("GET", &format!("/api/users/{}", id), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.body.get("email").unwrap().as_str().unwrap(),
        "yeni@test.com"
    );

    // The created account can log in with the supplied password.
    app.login("yeni@test.com", "parola123").await;
}

#[tokio::test]
async fn test_malformed_user_id_is_bad_request() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    let response = app
        .request("GET", "/api/users/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_user_id_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    let id = uuid::Uuid::new_v4();
    let response = app
        .request("GET", &format!("/api/users/{}", id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_updates_user_and_password() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    let created = app
        .request(
            "POST",
            "/api/users",
            Some(user_body("eski@test.com", false)),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/api/users/{}", id),
            Some(serde_json::json!({
                "first_name": "Yeni",
                "last_name": "Kullanici",
                "email": "guncel@test.com",
                "phone": "5559998877",
                "is_admin": true,
                "password": "yeniparola",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.body.get("email").unwrap().as_str().unwrap(),
        "guncel@test.com"
    );

    // The password was re-hashed; old credentials no longer work.
    let old = app.login_raw("guncel@test.com", "parola123").await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
    app.login("guncel@test.com", "yeniparola").await;
}

#[tokio::test]
async fn test_update_rejects_email_of_another_user() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    let created = app
        .request(
            "POST",
            "/api/users",
            Some(user_body("birinci@test.com", false)),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{}", id),
            Some(user_body("admin@test.com", false)),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_deletes_user() {
    let app = helpers::TestApp::new().await;
    let token = app
        .register_and_login("admin@test.com", "parola123", true)
        .await;

    let created = app
        .request(
            "POST",
            "/api/users",
            Some(user_body("silinecek@test.com", false)),
            Some(&token),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    let deleted = app
        .request("DELETE", &format!("/api/users/{}", id), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("GET", &format!("/api/users/{}", id), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
