//! Authentication API integration tests
//!
//! Exercises the full HTTP surface (signup, signin, me) against a router
//! backed by the in-memory credential store.

#![cfg(feature = "server")]

mod common;

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use gatekey::backend::auth::sessions::Claims;
use gatekey::shared::types::{AuthResponse, ErrorBody, UserResponse};
use pretty_assertions::assert_eq;

use common::auth_helpers::{bearer, create_test_user, test_server, tokens, unique_email};

#[tokio::test]
async fn signup_returns_token_and_me_round_trips() {
    let (server, _store) = test_server();

    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "longenough1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let auth: AuthResponse = response.json();
    assert!(!auth.access_token.is_empty());

    let response = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&auth.access_token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let user: UserResponse = response.json();
    assert_eq!(user.email, "a@x.com");
    assert!(user.name.is_none());
    assert!(user.id > 0);
}

#[tokio::test]
async fn signup_with_name_is_reflected_by_me() {
    let (server, _store) = test_server();

    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "email": "ada@x.com",
            "password": "longenough1",
            "name": "Ada"
        }))
        .await;
    let auth: AuthResponse = response.json();

    let user: UserResponse = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&auth.access_token))
        .await
        .json();
    assert_eq!(user.name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn signup_duplicate_email_conflicts_and_creates_no_record() {
    let (server, store) = test_server();
    let email = unique_email();

    let first = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({"email": &email, "password": "longenough1"}))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({"email": &email, "password": "otherpassword"}))
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body: ErrorBody = second.json();
    assert_eq!(body.status_code, 409);
    assert_eq!(body.message, "Email already registered");

    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn concurrent_signups_with_same_email_yield_one_success() {
    let (server, store) = test_server();
    let email = unique_email();
    let body = serde_json::json!({"email": &email, "password": "longenough1"});

    let (first, second) = tokio::join!(
        server.post("/api/auth/signup").json(&body),
        server.post("/api/auth/signup").json(&body),
    );

    let mut statuses = [first.status_code(), second.status_code()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn signup_rejects_email_without_at_sign() {
    let (server, store) = test_server();

    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({"email": "invalid-email", "password": "longenough1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn signup_rejects_short_password() {
    let (server, store) = test_server();

    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({"email": "a@x.com", "password": "short"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn signin_with_correct_password_succeeds() {
    let (server, store) = test_server();
    let email = unique_email();
    create_test_user(&store, &email, "longenough1").await;

    let response = server
        .post("/api/auth/signin")
        .json(&serde_json::json!({"email": &email, "password": "longenough1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let auth: AuthResponse = response.json();

    let me = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&auth.access_token))
        .await;
    assert_eq!(me.status_code(), StatusCode::OK);
    assert_eq!(me.json::<UserResponse>().email, email);
}

#[tokio::test]
async fn signin_failures_are_indistinguishable() {
    let (server, store) = test_server();
    let email = unique_email();
    create_test_user(&store, &email, "longenough1").await;

    let wrong_password = server
        .post("/api/auth/signin")
        .json(&serde_json::json!({"email": &email, "password": "wrong"}))
        .await;
    let unknown_email = server
        .post("/api/auth/signin")
        .json(&serde_json::json!({"email": "nobody@x.com", "password": "wrong"}))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);

    // Same body for both, so the endpoint cannot enumerate emails
    let first: ErrorBody = wrong_password.json();
    let second: ErrorBody = unknown_email.json();
    assert_eq!(first, second);
    assert_eq!(first.message, "Invalid credentials");
}

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let (server, _store) = test_server();

    let response = server.get("/api/auth/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_malformed_authorization_header_is_unauthorized() {
    let (server, _store) = test_server();

    let response = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Token abc"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_garbage_token_is_unauthorized() {
    let (server, _store) = test_server();

    let response = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer("invalid.token.here"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_expired_token_is_unauthorized() {
    let (server, store) = test_server();
    let email = unique_email();
    let user = create_test_user(&store, &email, "longenough1").await;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let expired = tokens()
        .sign_claims(&Claims {
            sub: user.id,
            email: user.email.clone(),
            iat: now - 7200,
            exp: now - 3600,
        })
        .unwrap();

    let response = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&expired))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_token_signed_by_other_secret_is_unauthorized() {
    let (server, store) = test_server();
    let email = unique_email();
    let user = create_test_user(&store, &email, "longenough1").await;

    let forged = gatekey::backend::auth::sessions::TokenService::new("some-other-secret", 3600)
        .sign(user.id, &user.email)
        .unwrap();

    let response = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&forged))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_for_deleted_user_is_unauthorized() {
    let (server, store) = test_server();
    let email = unique_email();
    let user = create_test_user(&store, &email, "longenough1").await;
    let token = tokens().sign(user.id, &user.email).unwrap();

    store.remove(user.id);

    let response = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: ErrorBody = response.json();
    assert_eq!(body.message, "Invalid token: user not found");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (server, _store) = test_server();

    let response = server.get("/api/unknown").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json();
    assert_eq!(body.status_code, 404);
}
