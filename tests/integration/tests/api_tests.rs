//! Router-level tests over in-memory stores
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use events_common::RateLimitConfig;
use integration_tests::{
    event_body, event_body_at, login_body, register_body, unique_email, TestApp, TEST_PASSWORD,
};
use serde_json::json;

/// Routes open to any signed-in user
fn authenticated_routes() -> Vec<(Method, &'static str)> {
    vec![
        (Method::GET, "/me"),
        (Method::PUT, "/me"),
        (Method::POST, "/logout"),
        (Method::GET, "/user"),
        (Method::GET, "/events"),
        (Method::GET, "/events/upcoming"),
        (Method::GET, "/events/past"),
        (Method::GET, "/events/filter"),
        (Method::POST, "/events/1/register"),
        (Method::DELETE, "/events/1/unregister"),
    ]
}

/// Routes reserved for administrators
fn admin_routes() -> Vec<(Method, &'static str)> {
    vec![
        (Method::POST, "/events"),
        (Method::PUT, "/events/1"),
        (Method::DELETE, "/events/1"),
        (Method::DELETE, "/events/1/users/1"),
        (Method::GET, "/users"),
        (Method::POST, "/users"),
        (Method::GET, "/users/1"),
        (Method::PUT, "/users/1"),
        (Method::DELETE, "/users/1"),
    ]
}

/// An empty JSON object for routes that take a body
fn body_for(method: &Method) -> Option<serde_json::Value> {
    (*method == Method::POST || *method == Method::PUT).then(|| json!({}))
}

fn ids(body: &serde_json::Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

// ============================================================================
// Public routes
// ============================================================================

#[tokio::test]
async fn test_ping_and_health() {
    let app = TestApp::new().unwrap();

    let ping = app.get("/ping", None).await.unwrap();
    assert_eq!(ping.status, StatusCode::OK);
    assert_eq!(ping.body["message"], "API működik");

    let health = app.get("/health", None).await.unwrap();
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "healthy");
}

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let app = TestApp::new().unwrap();
    let email = unique_email("reg");

    let response = app.post("/register", None, &register_body(&email)).await.unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["token_type"], "Bearer");
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(response.body["expires_in"], 3600);
    assert_eq!(response.body["user"]["email"], email.as_str());
    assert_eq!(response.body["user"]["is_admin"], false);
    assert_eq!(app.sessions.len(), 1);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().unwrap();
    let email = unique_email("dup");

    app.post("/register", None, &register_body(&email)).await.unwrap();
    let upper = email.to_uppercase();
    let response = app.post("/register", None, &register_body(&upper)).await.unwrap();

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), Some("EMAIL_ALREADY_EXISTS"));
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = TestApp::new().unwrap();

    let bad_email = json!({ "name": "x", "email": "nope", "password": TEST_PASSWORD });
    let response = app.post("/register", None, &bad_email).await.unwrap();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"]["details"]["email"].is_array());

    // long enough, but no digit
    let weak = json!({ "name": "x", "email": unique_email("weak"), "password": "abcdefghij" });
    let response = app.post("/register", None, &weak).await.unwrap();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.user_count(), 0);
}

#[tokio::test]
async fn test_login() {
    let app = TestApp::new().unwrap();
    let email = unique_email("login");
    app.post("/register", None, &register_body(&email)).await.unwrap();

    let ok = app.post("/login", None, &login_body(&email, TEST_PASSWORD)).await.unwrap();
    assert_eq!(ok.status, StatusCode::OK);
    assert!(ok.body["token"].is_string());

    let wrong = app.post("/login", None, &login_body(&email, "Wrong12345")).await.unwrap();
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.error_code(), Some("INVALID_CREDENTIALS"));

    let unknown = app
        .post("/login", None, &login_body("nobody@example.com", TEST_PASSWORD))
        .await
        .unwrap();
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Authentication gate
// ============================================================================

#[tokio::test]
async fn test_malformed_token_is_rejected() {
    let app = TestApp::new().unwrap();

    let response = app.get("/me", Some("not-a-jwt")).await.unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("INVALID_TOKEN"));
}

#[tokio::test]
async fn test_every_gated_route_requires_token() {
    let app = TestApp::new().unwrap();

    for (method, path) in authenticated_routes().into_iter().chain(admin_routes()) {
        let body = body_for(&method);
        let response = app
            .request(method.clone(), path, None, body.as_ref())
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
    }
}

#[tokio::test]
async fn test_me_and_user_resolve_caller() {
    let app = TestApp::new().unwrap();
    let (token, id) = app.register_user().await.unwrap();

    let me = app.get("/me", Some(&token)).await.unwrap();
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["id"], id);

    let user = app.get("/user", Some(&token)).await.unwrap();
    assert_eq!(user.status, StatusCode::OK);
    assert_eq!(user.body["id"], id);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new().unwrap();
    let (token, _) = app.register_user().await.unwrap();

    let response = app.post("/logout", Some(&token), &json!({})).await.unwrap();
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.get("/me", Some(&token)).await.unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("SESSION_REVOKED"));
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new().unwrap();
    let (token, _) = app.register_user().await.unwrap();
    let (other_token, _) = app.register_user().await.unwrap();
    let other_email = app.get("/me", Some(&other_token)).await.unwrap().body["email"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .put("/me", Some(&token), &json!({ "name": "Renamed" }))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Renamed");

    let response = app
        .put("/me", Some(&token), &json!({ "email": other_email }))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::CONFLICT);

    let new_email = unique_email("moved");
    let response = app
        .put("/me", Some(&token), &json!({ "email": new_email, "password": "NewPass456" }))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::OK);

    let login = app.post("/login", None, &login_body(&new_email, "NewPass456")).await.unwrap();
    assert_eq!(login.status, StatusCode::OK);
}

// ============================================================================
// Admin tier
// ============================================================================

#[tokio::test]
async fn test_admin_routes_forbidden_for_regular_users() {
    let app = TestApp::new().unwrap();
    let (token, id) = app.register_user().await.unwrap();

    let event = event_body("Meetup", "Budapest", Duration::days(3));
    assert_eq!(
        app.post("/events", Some(&token), &event).await.unwrap().status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(app.get("/users", Some(&token)).await.unwrap().status, StatusCode::FORBIDDEN);
    assert_eq!(
        app.get(&format!("/users/{id}"), Some(&token)).await.unwrap().status,
        StatusCode::FORBIDDEN
    );

    let response = app.delete(&format!("/users/{id}"), Some(&token)).await.unwrap();
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), Some("ADMIN_REQUIRED"));
}

#[tokio::test]
async fn test_every_admin_route_forbids_regular_users() {
    let app = TestApp::new().unwrap();
    let (token, _) = app.register_user().await.unwrap();

    for (method, path) in admin_routes() {
        let body = body_for(&method);
        let response = app
            .request(method.clone(), path, Some(&token), body.as_ref())
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
        assert_eq!(response.error_code(), Some("ADMIN_REQUIRED"), "{method} {path}");
    }

    // nothing was written on the way
    assert_eq!(app.store.event_count(), 0);
    assert_eq!(app.store.user_count(), 1);
}

#[tokio::test]
async fn test_rate_limit_answers_with_error_body() {
    let app = TestApp::rate_limited(RateLimitConfig {
        requests_per_second: 60,
        burst: 1,
    })
    .unwrap();

    let first = app.get("/ping", None).await.unwrap();
    assert_eq!(first.status, StatusCode::OK);

    let second = app.get("/ping", None).await.unwrap();
    assert_eq!(second.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(second.error_code(), Some("RATE_LIMIT_EXCEEDED"));

    // health probes sit outside the limiter
    let health = app.get("/health", None).await.unwrap();
    assert_eq!(health.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_user_management() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();

    let email = unique_email("managed");
    let created = app
        .post(
            "/users",
            Some(&admin),
            &json!({ "name": "Managed", "email": email, "password": TEST_PASSWORD }),
        )
        .await
        .unwrap();
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["is_admin"], false);
    let id = created.body["id"].as_i64().unwrap();

    let duplicate = app
        .post(
            "/users",
            Some(&admin),
            &json!({ "name": "Again", "email": email, "password": TEST_PASSWORD }),
        )
        .await
        .unwrap();
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let promoted = app
        .put(&format!("/users/{id}"), Some(&admin), &json!({ "is_admin": true }))
        .await
        .unwrap();
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.body["is_admin"], true);

    let list = app.get("/users", Some(&admin)).await.unwrap();
    let listed = ids(&list.body);
    let mut sorted = listed.clone();
    sorted.sort_unstable();
    assert_eq!(listed, sorted);
    assert!(listed.contains(&id));

    assert_eq!(
        app.get("/users/999999", Some(&admin)).await.unwrap().status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get("/users/abc", Some(&admin)).await.unwrap().status,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_delete_user_cascades() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();
    let (token, id) = app.register_user().await.unwrap();
    let event = app
        .create_event(&admin, &event_body("Cascade", "Pécs", Duration::days(5)))
        .await
        .unwrap();

    app.post(&format!("/events/{event}/register"), Some(&token), &json!({}))
        .await
        .unwrap();
    assert_eq!(app.store.registrations().len(), 1);

    let response = app.delete(&format!("/users/{id}"), Some(&admin)).await.unwrap();
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(app.store.registrations().is_empty());

    let response = app.get("/me", Some(&token)).await.unwrap();
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let again = app.delete(&format!("/users/{id}"), Some(&admin)).await.unwrap();
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Events
// ============================================================================

#[tokio::test]
async fn test_event_crud() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();

    let id = app
        .create_event(&admin, &event_body("Original", "Szeged", Duration::days(10)))
        .await
        .unwrap();

    let updated = app
        .put(
            &format!("/events/{id}"),
            Some(&admin),
            &json!({ "title": "Renamed", "max_attendees": 80 }),
        )
        .await
        .unwrap();
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "Renamed");
    assert_eq!(updated.body["max_attendees"], 80);
    assert_eq!(updated.body["location"], "Szeged");
    assert_eq!(updated.body["status"], "upcoming");

    let negative = app
        .put(&format!("/events/{id}"), Some(&admin), &json!({ "max_attendees": -5 }))
        .await
        .unwrap();
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    let deleted = app.delete(&format!("/events/{id}"), Some(&admin)).await.unwrap();
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = app.delete(&format!("/events/{id}"), Some(&admin)).await.unwrap();
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error_code(), Some("UNKNOWN_EVENT"));
}

#[tokio::test]
async fn test_create_event_validation() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();

    let mut body = event_body("", "Budapest", Duration::days(1));
    let response = app.post("/events", Some(&admin), &body).await.unwrap();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    body["title"] = json!("Valid");
    body["max_attendees"] = json!(-1);
    let response = app.post("/events", Some(&admin), &body).await.unwrap();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.event_count(), 0);
}

#[tokio::test]
async fn test_upcoming_and_past_partition_events() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();
    let (token, _) = app.register_user().await.unwrap();

    let later = app
        .create_event(&admin, &event_body("Later", "Győr", Duration::days(20)))
        .await
        .unwrap();
    let soon = app
        .create_event(&admin, &event_body("Soon", "Győr", Duration::days(2)))
        .await
        .unwrap();
    let before = app
        .create_event(&admin, &event_body("Before", "Eger", -Duration::days(4)))
        .await
        .unwrap();

    let all = app.get("/events", Some(&token)).await.unwrap();
    assert_eq!(ids(&all.body), vec![before, soon, later]);

    let upcoming = app.get("/events/upcoming", Some(&token)).await.unwrap();
    assert_eq!(ids(&upcoming.body), vec![soon, later]);
    assert!(upcoming.body.as_array().unwrap().iter().all(|e| e["status"] == "upcoming"));

    let past = app.get("/events/past", Some(&token)).await.unwrap();
    assert_eq!(ids(&past.body), vec![before]);
    assert_eq!(past.body[0]["status"], "past");
}

#[tokio::test]
async fn test_filter_events() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();
    let (token, _) = app.register_user().await.unwrap();

    let base = Utc::now() + Duration::days(30);
    let conf = app
        .create_event(&admin, &event_body_at("Tech Conference", "Budapest ELTE", base))
        .await
        .unwrap();
    let workshop = app
        .create_event(
            &admin,
            &event_body_at("Marketing workshop", "Online (zoom)", base + Duration::days(5)),
        )
        .await
        .unwrap();
    let old = app
        .create_event(&admin, &event_body("Old tech talk", "Debrecen", -Duration::days(10)))
        .await
        .unwrap();

    let by_title = app.get("/events/filter?title=TECH", Some(&token)).await.unwrap();
    assert_eq!(by_title.status, StatusCode::OK);
    assert_eq!(ids(&by_title.body), vec![old, conf]);

    let upcoming_tech = app
        .get("/events/filter?title=tech&status=upcoming", Some(&token))
        .await
        .unwrap();
    assert_eq!(ids(&upcoming_tech.body), vec![conf]);

    let by_location = app.get("/events/filter?location=zoom", Some(&token)).await.unwrap();
    assert_eq!(ids(&by_location.body), vec![workshop]);

    let from = (base + Duration::days(1)).format("%Y-%m-%dT%H:%M:%SZ");
    let ranged = app
        .get(&format!("/events/filter?from={from}"), Some(&token))
        .await
        .unwrap();
    assert_eq!(ids(&ranged.body), vec![workshop]);

    let inverted = app
        .get(
            "/events/filter?from=2026-02-01T00:00:00Z&to=2026-01-01T00:00:00Z",
            Some(&token),
        )
        .await
        .unwrap();
    assert_eq!(inverted.status, StatusCode::BAD_REQUEST);

    let bad_status = app.get("/events/filter?status=soon", Some(&token)).await.unwrap();
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Registrations
// ============================================================================

#[tokio::test]
async fn test_register_for_event() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();
    let (token, user_id) = app.register_user().await.unwrap();
    let event = app
        .create_event(&admin, &event_body("Signup", "Budapest", Duration::days(7)))
        .await
        .unwrap();
    let path = format!("/events/{event}/register");

    let first = app.post(&path, Some(&token), &json!({})).await.unwrap();
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body["status"], "pending");
    assert_eq!(first.body["user_id"], user_id);
    assert_eq!(first.body["event_id"], event);

    let second = app.post(&path, Some(&token), &json!({})).await.unwrap();
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.error_code(), Some("ALREADY_REGISTERED"));

    let missing = app.post("/events/424242/register", Some(&token), &json!({})).await.unwrap();
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unregister() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();
    let (token, _) = app.register_user().await.unwrap();
    let event = app
        .create_event(&admin, &event_body("Leave", "Budapest", Duration::days(7)))
        .await
        .unwrap();

    let not_registered = app
        .delete(&format!("/events/{event}/unregister"), Some(&token))
        .await
        .unwrap();
    assert_eq!(not_registered.status, StatusCode::NOT_FOUND);
    assert_eq!(not_registered.error_code(), Some("UNKNOWN_REGISTRATION"));

    app.post(&format!("/events/{event}/register"), Some(&token), &json!({}))
        .await
        .unwrap();
    let removed = app
        .delete(&format!("/events/{event}/unregister"), Some(&token))
        .await
        .unwrap();
    assert_eq!(removed.status, StatusCode::NO_CONTENT);
    assert!(app.store.registrations().is_empty());
}

#[tokio::test]
async fn test_admin_removes_user_registration() {
    let app = TestApp::new().unwrap();
    let (admin, _) = app.admin().await.unwrap();
    let (token, user_id) = app.register_user().await.unwrap();
    let event = app
        .create_event(&admin, &event_body("Kick", "Budapest", Duration::days(7)))
        .await
        .unwrap();
    app.post(&format!("/events/{event}/register"), Some(&token), &json!({}))
        .await
        .unwrap();

    let path = format!("/events/{event}/users/{user_id}");

    let forbidden = app.delete(&path, Some(&token)).await.unwrap();
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let removed = app.delete(&path, Some(&admin)).await.unwrap();
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let again = app.delete(&path, Some(&admin)).await.unwrap();
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let unknown_user = app
        .delete(&format!("/events/{event}/users/999999"), Some(&admin))
        .await
        .unwrap();
    assert_eq!(unknown_user.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown_user.error_code(), Some("UNKNOWN_USER"));
}
