//! HTTP server layer for parlor-admin.
//!
//! This module provides the HTTP surface for admin signup/login and catalog
//! item uploads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │      POST /admin_signup · POST /admin_login · POST /upload_new_item │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │    forms    │  │        routes           │  │
//! │  │ (requests)  │  │ (HTML pages)│  │  (router config)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod forms;
pub mod handlers;
pub mod routes;

pub use forms::{render_login_form, render_signup_form, render_upload_form};
pub use handlers::{
    health_handler, login_form_handler, login_handler, root_handler, signup_form_handler,
    signup_handler, upload_form_handler, upload_item_handler, AppState, HandlerError,
    HealthResponse, LoginForm, SignupForm, INVALID_CREDENTIALS_MESSAGE, PASSWORD_MISMATCH_MESSAGE,
};
pub use routes::{create_router, RouterConfig, DEFAULT_MAX_UPLOAD_BYTES};
