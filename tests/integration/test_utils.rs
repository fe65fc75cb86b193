//! Test utilities for integration tests.
//!
//! This module provides an in-memory mock store implementing the [`Store`]
//! trait, plus helpers for building routers and HTTP requests.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::RwLock;
use tower::ServiceExt;

use parlor_admin::error::StoreError;
use parlor_admin::hash::PasswordHasher;
use parlor_admin::server::{create_router, AppState, RouterConfig};
use parlor_admin::store::{AdminAccount, NewItem, Store};
use parlor_admin::upload::UploadStore;

/// The minimum bcrypt cost keeps the tests fast; production uses the default.
pub const TEST_BCRYPT_COST: u32 = 4;

// =============================================================================
// Mock Store with Insert Tracking
// =============================================================================

/// An in-memory store that tracks insert attempts and can be told to fail.
///
/// Clones share their interior state, so a test can keep a handle for
/// inspection after moving a clone into the application state.
pub struct MockStore {
    admins: Arc<RwLock<Vec<AdminAccount>>>,
    items: Arc<RwLock<Vec<NewItem>>>,
    next_id: Arc<AtomicU64>,
    admin_insert_attempts: Arc<AtomicUsize>,
    item_insert_attempts: Arc<AtomicUsize>,
    fail_admin_inserts: Arc<AtomicBool>,
    fail_item_inserts: Arc<AtomicBool>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            admins: Arc::new(RwLock::new(Vec::new())),
            items: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            admin_insert_attempts: Arc::new(AtomicUsize::new(0)),
            item_insert_attempts: Arc::new(AtomicUsize::new(0)),
            fail_admin_inserts: Arc::new(AtomicBool::new(false)),
            fail_item_inserts: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent admin insert fail with a database error.
    pub fn fail_admin_inserts(&self) {
        self.fail_admin_inserts.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent item insert fail with a database error.
    pub fn fail_item_inserts(&self) {
        self.fail_item_inserts.store(true, Ordering::SeqCst);
    }

    /// Seed an admin account directly, bypassing the HTTP flow.
    pub async fn seed_admin(&self, username: &str, password_hash: &str) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.admins.write().await.push(AdminAccount {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        });
    }

    pub async fn admins(&self) -> Vec<AdminAccount> {
        self.admins.read().await.clone()
    }

    pub async fn items(&self) -> Vec<NewItem> {
        self.items.read().await.clone()
    }

    /// Number of admin insert attempts, including failed ones.
    pub fn admin_insert_attempts(&self) -> usize {
        self.admin_insert_attempts.load(Ordering::SeqCst)
    }

    /// Number of item insert attempts, including failed ones.
    pub fn item_insert_attempts(&self) -> usize {
        self.item_insert_attempts.load(Ordering::SeqCst)
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MockStore {
    fn clone(&self) -> Self {
        Self {
            admins: Arc::clone(&self.admins),
            items: Arc::clone(&self.items),
            next_id: Arc::clone(&self.next_id),
            admin_insert_attempts: Arc::clone(&self.admin_insert_attempts),
            item_insert_attempts: Arc::clone(&self.item_insert_attempts),
            fail_admin_inserts: Arc::clone(&self.fail_admin_inserts),
            fail_item_inserts: Arc::clone(&self.fail_item_inserts),
        }
    }
}

#[async_trait]
impl Store for MockStore {
    async fn insert_admin(&self, username: &str, password_hash: &str) -> Result<u64, StoreError> {
        self.admin_insert_attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail_admin_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Database("injected insert failure".to_string()));
        }

        let mut admins = self.admins.write().await;
        // Mirror the UNIQUE constraint on username.
        if admins.iter().any(|a| a.username == username) {
            return Err(StoreError::Database(format!(
                "Duplicate entry '{}' for key 'user_admin.username'",
                username
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        admins.push(AdminAccount {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(id)
    }

    async fn find_admin(&self, username: &str) -> Result<Option<AdminAccount>, StoreError> {
        Ok(self
            .admins
            .read()
            .await
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn insert_item(&self, item: NewItem) -> Result<u64, StoreError> {
        self.item_insert_attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail_item_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Database("injected insert failure".to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.items.write().await.push(item);
        Ok(id)
    }
}

// =============================================================================
// Router Construction
// =============================================================================

/// Build a router over the mock store, serving `root` as the public
/// directory and writing uploads under `root/images`.
pub fn test_router(store: MockStore, root: &Path) -> Router {
    let upload_dir = root.join("images");
    std::fs::create_dir_all(&upload_dir).unwrap();

    let state = AppState::new(
        store,
        PasswordHasher::new(TEST_BCRYPT_COST),
        UploadStore::new(&upload_dir),
    );
    create_router(state, RouterConfig::new(root).with_tracing(false))
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Build a urlencoded form POST request.
pub fn form_request(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Boundary used by [`multipart_body`] and [`multipart_request`].
pub const MULTIPART_BOUNDARY: &str = "parlor-test-boundary";

/// Build a multipart body with optional file part (under field `item_image`)
/// and any number of text fields.
pub fn multipart_body(file: Option<(&str, &[u8])>, fields: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"\r\n\r\n\
                 {value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"item_image\"; filename=\"{filename}\"\r\n\
                 Content-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Build a multipart POST request.
pub fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

// =============================================================================
// Flow Helpers
// =============================================================================

/// Submit the signup form.
pub async fn signup(router: &Router, username: &str, password: &str, confirm: &str) -> Response {
    router
        .clone()
        .oneshot(form_request(
            "/admin_signup",
            format!("username={username}&password={password}&confirm_password={confirm}"),
        ))
        .await
        .unwrap()
}

/// Submit the login form.
pub async fn login(router: &Router, username: &str, password: &str) -> Response {
    router
        .clone()
        .oneshot(form_request(
            "/admin_login",
            format!("username={username}&password={password}"),
        ))
        .await
        .unwrap()
}
