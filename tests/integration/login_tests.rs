//! Login integration tests.
//!
//! Tests verify:
//! - Successful login against a stored digest
//! - The unknown-username and wrong-password responses are identical
//! - No token, cookie, or session accompanies a successful login
//! - Storage failures and malformed stored digests surface as 500s

use axum::http::StatusCode;

use parlor_admin::hash::PasswordHasher;

use super::test_utils::{body_string, login, test_router, MockStore, TEST_BCRYPT_COST};

async fn seeded_store(username: &str, password: &str) -> MockStore {
    let store = MockStore::new();
    let digest = PasswordHasher::new(TEST_BCRYPT_COST)
        .hash(password)
        .await
        .unwrap();
    store.seed_admin(username, &digest).await;
    store
}

#[tokio::test]
async fn test_login_success() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store("admin", "secret1").await;
    let router = test_router(store, dir.path());

    let response = login(&router, "admin", "secret1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Login successful");
}

#[tokio::test]
async fn test_login_issues_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store("admin", "secret1").await;
    let router = test_router(store, dir.path());

    let response = login(&router, "admin", "secret1").await;

    // Login is deliberately stateless: a success is only an indicator.
    assert!(response.headers().get("set-cookie").is_none());
    assert!(response.headers().get("authorization").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_renders_generic_message() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store("admin", "secret1").await;
    let router = test_router(store, dir.path());

    let response = login(&router, "admin", "wrong").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Invalid username or password"));
    assert!(body.contains("<form"));
}

#[tokio::test]
async fn test_login_unknown_username_renders_generic_message() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store("admin", "secret1").await;
    let router = test_router(store, dir.path());

    let response = login(&router, "nobody", "secret1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response)
        .await
        .contains("Invalid username or password"));
}

#[tokio::test]
async fn test_login_failures_are_response_indistinguishable() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store("admin", "secret1").await;
    let router = test_router(store, dir.path());

    let unknown_user = login(&router, "nobody", "secret1").await;
    let wrong_password = login(&router, "admin", "wrong").await;

    // Same status and byte-identical body: the response must not disclose
    // whether the username or the password was wrong.
    assert_eq!(unknown_user.status(), wrong_password.status());
    assert_eq!(
        body_string(unknown_user).await,
        body_string(wrong_password).await
    );
}

#[tokio::test]
async fn test_login_malformed_stored_digest_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    let store = MockStore::new();
    store.seed_admin("admin", "not-a-bcrypt-digest").await;
    let router = test_router(store, dir.path());

    let response = login(&router, "admin", "secret1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
