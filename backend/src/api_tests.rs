use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

use crate::build_app;
use crate::test_support::{proxied_test_state, test_state};

const ADMIN: &str = "test-admin-token";

fn app_with(admin_token: Option<&str>, per_minute: u32) -> Router {
    build_app(test_state(admin_token, per_minute), None)
}

fn app() -> Router {
    app_with(Some(ADMIN), 100)
}

fn post_raw(uri: &str, body: String, peer: [u8; 4]) -> Request<Body> {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    // what into_make_service_with_connect_info attaches in production
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from((peer, 41000))));
    request
}

fn post_from(uri: &str, body: &Value, peer: [u8; 4]) -> Request<Body> {
    post_raw(uri, body.to_string(), peer)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_from(uri, body, [203, 0, 113, 7])
}

fn post_forwarded(uri: &str, body: &Value, forwarded_for: &str) -> Request<Body> {
    let mut request = post_json(uri, body);
    request
        .headers_mut()
        .insert("X-Forwarded-For", forwarded_for.parse().unwrap());
    request
}

fn get_admin(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn demo_payload() -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "company": "Analytical Engines",
        "job_title": "CISO",
        "phone": "+44 20 7946 0958",
        "country": "United Kingdom",
        "email": "Ada@Engines.co.uk",
        "agree_privacy": true,
        "subscribe": false
    })
}

#[tokio::test]
async fn health_reports_version_and_database() {
    let response = app()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn demo_request_is_stored_and_listed_for_admin() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/api/demo-requests", &demo_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let reference = created["reference"].as_str().unwrap().to_string();
    assert_eq!(reference.len(), 36);
    assert!(created["message"].as_str().unwrap().contains("Ada"));

    let response = app
        .oneshot(get_admin("/api/admin/demo-requests", Some(ADMIN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response).await;
    let rows = listed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["reference"], reference.as_str());
    assert_eq!(rows[0]["email"], "ada@engines.co.uk");
}

#[tokio::test]
async fn demo_request_with_subscribe_joins_newsletter() {
    let app = app();
    let mut payload = demo_payload();
    payload["subscribe"] = json!(true);

    let response = app
        .clone()
        .oneshot(post_json("/api/demo-requests", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get_admin("/api/admin/newsletter-subscribers", Some(ADMIN)))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["subscribers"][0]["source"], "demo_form");

    // The footer form for the same address is then a no-op
    let response = app
        .oneshot(post_json(
            "/api/newsletter",
            &json!({"email": "ada@engines.co.uk", "agree_privacy": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn demo_request_without_consent_is_rejected() {
    let mut payload = demo_payload();
    payload["agree_privacy"] = json!(false);

    let response = app()
        .oneshot(post_json("/api/demo-requests", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Please agree to the Privacy Policy to continue.");
}

#[tokio::test]
async fn demo_request_with_blank_field_names_it() {
    let mut payload = demo_payload();
    payload["job_title"] = json!("  ");

    let response = app()
        .oneshot(post_json("/api/demo-requests", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["error"], "Job title is required");
}

#[tokio::test]
async fn newsletter_signup_is_created_once() {
    let app = app();
    let body = json!({"email": "soc@bank.example", "agree_privacy": true});

    let first = app.clone().oneshot(post_json("/api/newsletter", &body)).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let again = json!({"email": "SOC@bank.example", "agree_privacy": true});
    let second = app.oneshot(post_json("/api/newsletter", &again)).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(json_body(second).await["message"], "You're already subscribed.");
}

#[tokio::test]
async fn newsletter_rejects_invalid_email() {
    let response = app()
        .oneshot(post_json(
            "/api/newsletter",
            &json!({"email": "not-an-email", "agree_privacy": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["error"], "Please enter a valid business email");
}

#[tokio::test]
async fn admin_routes_require_the_token() {
    let app = app();

    let missing = app
        .clone()
        .oneshot(get_admin("/api/admin/demo-requests", None))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let wrong = app
        .oneshot(get_admin("/api/admin/demo-requests", Some("guess")))
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(wrong).await["error"], "Invalid token");
}

#[tokio::test]
async fn admin_routes_hidden_without_configured_token() {
    let response = app_with(None, 100)
        .oneshot(get_admin("/api/admin/demo-requests", Some("anything")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submissions_are_rate_limited_per_client() {
    let app = app_with(Some(ADMIN), 2);
    let body = json!({"email": "a@b.io", "agree_privacy": true});

    for _ in 0..2 {
        let response = app.clone().oneshot(post_json("/api/newsletter", &body)).await.unwrap();
        assert_ne!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    let limited = app.clone().oneshot(post_json("/api/newsletter", &body)).await.unwrap();
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(json_body(limited).await["error"].as_str().unwrap().contains("Too many requests"));

    // A different client still gets through
    let other = post_from("/api/newsletter", &body, [198, 51, 100, 44]);
    let response = app.oneshot(other).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn rotating_forwarded_header_does_not_reset_the_limit() {
    let app = app_with(Some(ADMIN), 2);
    let body = json!({"email": "a@b.io", "agree_privacy": true});

    let mut statuses = Vec::new();
    for i in 0..5 {
        let request = post_forwarded("/api/newsletter", &body, &format!("10.9.8.{}", i));
        statuses.push(app.clone().oneshot(request).await.unwrap().status());
    }
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::TOO_MANY_REQUESTS).count(),
        3
    );
}

#[tokio::test]
async fn trusted_proxy_limits_each_forwarded_client() {
    let app = build_app(proxied_test_state(Some(ADMIN), 1), None);
    let body = json!({"email": "a@b.io", "agree_privacy": true});

    let first = app
        .clone()
        .oneshot(post_forwarded("/api/newsletter", &body, "192.0.2.10"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let again = app
        .clone()
        .oneshot(post_forwarded("/api/newsletter", &body, "192.0.2.10, 10.0.0.1"))
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::TOO_MANY_REQUESTS);

    // same socket peer, different forwarded client
    let other = app
        .oneshot(post_forwarded("/api/newsletter", &body, "192.0.2.11"))
        .await
        .unwrap();
    assert_eq!(other.status(), StatusCode::OK);
}

#[tokio::test]
async fn incomplete_demo_request_body_gets_json_error() {
    let response = app()
        .oneshot(post_json(
            "/api/demo-requests",
            &json!({"email": "a@b.io", "agree_privacy": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = json_body(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Invalid request"), "{}", error);
    assert!(error.contains("first_name"), "{}", error);
}

#[tokio::test]
async fn malformed_newsletter_body_gets_json_error() {
    let response = app()
        .oneshot(post_raw("/api/newsletter", "{not json".to_string(), [203, 0, 113, 7]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));
}

#[tokio::test]
async fn health_is_not_rate_limited() {
    let app = app_with(Some(ADMIN), 1);
    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn unknown_api_path_is_json_404() {
    let response = app()
        .oneshot(Request::builder().uri("/api/does-not-exist").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Not found");
}
