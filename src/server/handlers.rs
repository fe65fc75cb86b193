//! HTTP request handlers for the admin flows.
//!
//! This module contains the Axum handlers for admin signup, admin login, and
//! catalog item upload.
//!
//! # Endpoints
//!
//! - `GET /admin_signup` / `POST /admin_signup` - Signup form and submission
//! - `GET /admin_login` / `POST /admin_login` - Login form and submission
//! - `GET /upload_new_item` / `POST /upload_new_item` - Upload form and submission
//! - `GET /` - Redirect to the signup form
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::{HashError, StoreError, UploadError};
use crate::hash::PasswordHasher;
use crate::store::{NewItem, Store};
use crate::upload::UploadStore;

use super::forms::{render_login_form, render_signup_form, render_upload_form};

/// Message shown when signup passwords do not match.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Message shown for any failed login.
///
/// An unknown username and a wrong password render this same message so the
/// response never discloses which one was wrong.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Generic body for 500 responses; details go to the log, not the client.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state passed to all handlers via Axum's State extractor.
pub struct AppState<S: Store> {
    /// The backing store for admin accounts and items
    pub store: Arc<S>,

    /// Bcrypt password hasher
    pub hasher: PasswordHasher,

    /// File store for uploaded item images
    pub uploads: UploadStore,
}

impl<S: Store> AppState<S> {
    /// Create a new application state.
    pub fn new(store: S, hasher: PasswordHasher, uploads: UploadStore) -> Self {
        Self {
            store: Arc::new(store),
            hasher,
            uploads,
        }
    }
}

impl<S: Store> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            hasher: self.hasher.clone(),
            uploads: self.uploads.clone(),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Form fields for `POST /admin_signup`.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Form fields for `POST /admin_login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Failures a handler can surface as an HTTP error.
///
/// Recoverable request outcomes (password mismatch, invalid credentials) are
/// handled inline by re-rendering the relevant form and never reach this
/// type.
#[derive(Debug)]
pub enum HandlerError {
    Store(StoreError),
    Hash(HashError),
    Upload(UploadError),
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Store(err)
    }
}

impl From<HashError> for HandlerError {
    fn from(err: HashError) -> Self {
        HandlerError::Hash(err)
    }
}

impl From<UploadError> for HandlerError {
    fn from(err: UploadError) -> Self {
        HandlerError::Upload(err)
    }
}

/// Convert handler failures to HTTP responses.
///
/// Malformed upload requests are the caller's fault and map to 400 with a
/// description. Everything else is a server failure: logged at error level
/// with detail, surfaced as a generic 500 so storage internals (including
/// whether a username already existed) never leak to the client.
impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match &self {
            HandlerError::Upload(
                err @ (UploadError::Multipart(_)
                | UploadError::MissingField(_)
                | UploadError::InvalidPrice { .. }),
            ) => {
                let message = err.to_string();
                warn!(status = 400, "Rejected upload request: {}", message);
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            HandlerError::Store(err) => {
                error!(status = 500, "Database failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
            HandlerError::Hash(err) => {
                error!(status = 500, "Password hashing failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
            HandlerError::Upload(err) => {
                error!(status = 500, "Upload storage failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle the root URL.
///
/// # Endpoint
///
/// `GET /` - redirects to the admin signup page.
pub async fn root_handler() -> Redirect {
    Redirect::to("/admin_signup")
}

/// Render the admin signup form.
///
/// # Endpoint
///
/// `GET /admin_signup`
pub async fn signup_form_handler() -> Html<String> {
    Html(render_signup_form(""))
}

/// Handle admin signup submissions.
///
/// # Endpoint
///
/// `POST /admin_signup` with urlencoded fields `username`, `password`,
/// `confirm_password`.
///
/// # Response
///
/// - `200 OK` "User added successfully" on success
/// - `200 OK` re-rendered form with a message when the passwords differ
/// - `500 Internal Server Error` on hashing or storage failure, including a
///   duplicate username (not distinguished externally)
pub async fn signup_handler<S: Store>(
    State(state): State<AppState<S>>,
    Form(form): Form<SignupForm>,
) -> Result<Response, HandlerError> {
    // Mismatched passwords are rejected before any hashing or storage call.
    if form.password != form.confirm_password {
        return Ok(Html(render_signup_form(PASSWORD_MISMATCH_MESSAGE)).into_response());
    }

    let digest = state.hasher.hash(&form.password).await?;
    state.store.insert_admin(&form.username, &digest).await?;

    info!(username = %form.username, "Admin account created");
    Ok("User added successfully".into_response())
}

/// Render the admin login form.
///
/// # Endpoint
///
/// `GET /admin_login`
pub async fn login_form_handler() -> Html<String> {
    Html(render_login_form(""))
}

/// Handle admin login submissions.
///
/// # Endpoint
///
/// `POST /admin_login` with urlencoded fields `username`, `password`.
///
/// # Response
///
/// - `200 OK` "Login successful" on success; no token, cookie, or session is
///   issued
/// - `200 OK` re-rendered form with a single generic message for both an
///   unknown username and a wrong password
/// - `500 Internal Server Error` on storage failure or a malformed stored
///   digest
pub async fn login_handler<S: Store>(
    State(state): State<AppState<S>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, HandlerError> {
    let Some(account) = state.store.find_admin(&form.username).await? else {
        return Ok(Html(render_login_form(INVALID_CREDENTIALS_MESSAGE)).into_response());
    };

    if !state
        .hasher
        .verify(&form.password, &account.password_hash)
        .await?
    {
        return Ok(Html(render_login_form(INVALID_CREDENTIALS_MESSAGE)).into_response());
    }

    info!(username = %form.username, "Admin login succeeded");
    Ok("Login successful".into_response())
}

/// Render the item upload form.
///
/// # Endpoint
///
/// `GET /upload_new_item`
pub async fn upload_form_handler() -> Html<String> {
    Html(render_upload_form(""))
}

/// Handle item upload submissions.
///
/// # Endpoint
///
/// `POST /upload_new_item` with a multipart body carrying the file field
/// `item_image` and text fields `item_title`, `price_with_ice_cream`,
/// `price_without_ice_cream`.
///
/// # Response
///
/// - `200 OK` "Item added successfully" on success
/// - `400 Bad Request` for a malformed body, missing field, or non-numeric
///   price (rejected before any disk write)
/// - `500 Internal Server Error` on disk or storage failure; a file already
///   written to disk is not removed when the insert fails
pub async fn upload_item_handler<S: Store>(
    State(state): State<AppState<S>>,
    mut multipart: Multipart,
) -> Result<Response, HandlerError> {
    let mut image: Option<(String, axum::body::Bytes)> = None;
    let mut title: Option<String> = None;
    let mut price_with: Option<String> = None;
    let mut price_without: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("item_image") => {
                let original = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or(UploadError::MissingField("item_image"))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UploadError::Multipart(e.to_string()))?;
                image = Some((original, data));
            }
            Some("item_title") => {
                title = Some(read_text_field(field, "item_title").await?);
            }
            Some("price_with_ice_cream") => {
                price_with = Some(read_text_field(field, "price_with_ice_cream").await?);
            }
            Some("price_without_ice_cream") => {
                price_without = Some(read_text_field(field, "price_without_ice_cream").await?);
            }
            // Unrecognized fields are ignored.
            _ => {}
        }
    }

    let (original_name, data) = image.ok_or(UploadError::MissingField("item_image"))?;
    let title = title.ok_or(UploadError::MissingField("item_title"))?;
    let price_with = parse_price(
        "price_with_ice_cream",
        price_with.ok_or(UploadError::MissingField("price_with_ice_cream"))?,
    )?;
    let price_without = parse_price(
        "price_without_ice_cream",
        price_without.ok_or(UploadError::MissingField("price_without_ice_cream"))?,
    )?;

    // The file hits the disk before the insert; it stays there if the insert
    // fails (an orphaned file is an accepted side effect).
    let filename = state.uploads.save(&original_name, &data).await?;

    state
        .store
        .insert_item(NewItem {
            image_filename: filename.clone(),
            title: title.clone(),
            price_with_topping: price_with,
            price_without_topping: price_without,
        })
        .await?;

    info!(filename = %filename, title = %title, "Item added");
    Ok("Item added successfully".into_response())
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Helpers
// =============================================================================

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &'static str,
) -> Result<String, UploadError> {
    field
        .text()
        .await
        .map_err(|e| UploadError::Multipart(format!("{}: {}", name, e)))
}

/// Parse a price form value.
fn parse_price(field: &'static str, value: String) -> Result<f64, UploadError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| UploadError::InvalidPrice { field, value })
}

// =============================================================================
// Tests
// =============================================================================
