//! Router configuration for parlor-admin.
//!
//! This module defines the HTTP routes and applies middleware for CORS,
//! request body limits, and tracing.
//!
//! # Route Structure
//!
//! ```text
//! /                  - Redirect to /admin_signup
//! /admin_signup      - Signup form (GET) and submission (POST)
//! /admin_login       - Login form (GET) and submission (POST)
//! /upload_new_item   - Upload form (GET) and submission (POST, multipart)
//! /health            - Health check
//! /public/*          - Uploaded files served verbatim
//! ```
//!
//! # Example
//!
//! ```ignore
//! use parlor_admin::hash::PasswordHasher;
//! use parlor_admin::server::{create_router, AppState, RouterConfig};
//! use parlor_admin::store::MySqlStore;
//! use parlor_admin::upload::UploadStore;
//!
//! let state = AppState::new(store, PasswordHasher::with_default_cost(),
//!     UploadStore::new("public/images"));
//! let router = create_router(state, RouterConfig::new("public"));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::path::PathBuf;
use std::time::Duration;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{
    health_handler, login_form_handler, login_handler, root_handler, signup_form_handler,
    signup_handler, upload_form_handler, upload_item_handler, AppState,
};
use crate::store::Store;

/// Default cap on request body size (covers the multipart upload).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Directory served verbatim under `/public`
    pub public_dir: PathBuf,

    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration serving static files from the given
    /// directory.
    ///
    /// By default:
    /// - CORS allows any origin
    /// - Request bodies are capped at 10 MiB
    /// - Tracing is enabled
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            cors_origins: None, // Allow any origin by default
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Set the maximum accepted request body size.
    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - Form routes (signup, login, upload) and the root redirect
/// - Health check
/// - Static serving of the public directory (uploaded files)
/// - CORS and body-limit configuration
/// - Request tracing (optional)
pub fn create_router<S>(state: AppState<S>, config: RouterConfig) -> Router
where
    S: Store + 'static,
{
    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/", get(root_handler))
        .route(
            "/admin_signup",
            get(signup_form_handler).post(signup_handler::<S>),
        )
        .route(
            "/admin_login",
            get(login_form_handler).post(login_handler::<S>),
        )
        .route(
            "/upload_new_item",
            get(upload_form_handler).post(upload_item_handler::<S>),
        )
        .route("/health", get(health_handler))
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => {
            // No origins allowed - this effectively disables CORS
            cors
        }
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
