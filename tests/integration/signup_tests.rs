//! Signup integration tests.
//!
//! Tests verify:
//! - Successful signup stores a salted digest, never the plaintext
//! - Password mismatch is rejected before any hashing or storage call
//! - Duplicate usernames surface as a generic 500
//! - Storage failures surface as a generic 500 without leaking detail

use axum::http::StatusCode;

use parlor_admin::hash::PasswordHasher;

use super::test_utils::{body_string, login, signup, test_router, MockStore, TEST_BCRYPT_COST};

#[tokio::test]
async fn test_signup_success() {
    let dir = tempfile::tempdir().unwrap();
    let store = MockStore::new();
    let router = test_router(store.clone(), dir.path());

    let response = signup(&router, "admin", "secret1", "secret1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "User added successfully");

    let admins = store.admins().await;
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].username, "admin");

    // The stored value is a bcrypt digest of the password, not the password.
    assert_ne!(admins[0].password_hash, "secret1");
    let hasher = PasswordHasher::new(TEST_BCRYPT_COST);
    assert!(hasher
        .verify("secret1", &admins[0].password_hash)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_signup_password_mismatch_rejected_before_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let store = MockStore::new();
    let router = test_router(store.clone(), dir.path());

    let response = signup(&router, "admin", "secret1", "different").await;

    // The form is re-rendered with a message rather than failing the request.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Passwords do not match"));
    assert!(body.contains("<form"));

    // Rejection happens before the store is ever touched.
    assert_eq!(store.admin_insert_attempts(), 0);
    assert!(store.admins().await.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_username_fails_with_500() {
    let dir = tempfile::tempdir().unwrap();
    let store = MockStore::new();
    let router = test_router(store.clone(), dir.path());

    let first = signup(&router, "admin", "secret1", "secret1").await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = signup(&router, "admin", "other-password", "other-password").await;
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The duplicate is not silently swallowed: one row, two attempts.
    assert_eq!(store.admins().await.len(), 1);
    assert_eq!(store.admin_insert_attempts(), 2);
}

#[tokio::test]
async fn test_signup_duplicate_response_does_not_leak_cause() {
    let dir = tempfile::tempdir().unwrap();
    let store = MockStore::new();
    let router = test_router(store.clone(), dir.path());

    signup(&router, "admin", "secret1", "secret1").await;
    let response = signup(&router, "admin", "secret1", "secret1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(!body.contains("Duplicate"));
    assert!(!body.contains("user_admin"));
}

#[tokio::test]
async fn test_signup_store_failure_returns_generic_500() {
    let dir = tempfile::tempdir().unwrap();
    let store = MockStore::new();
    store.fail_admin_inserts();
    let router = test_router(store.clone(), dir.path());

    let response = signup(&router, "admin", "secret1", "secret1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(!body.contains("injected insert failure"));
}

#[tokio::test]
async fn test_signup_then_login_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let store = MockStore::new();
    let router = test_router(store, dir.path());

    let response = signup(&router, "admin", "secret1", "secret1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = login(&router, "admin", "secret1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Login successful");

    let response = login(&router, "admin", "wrong").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response)
        .await
        .contains("Invalid username or password"));
}
