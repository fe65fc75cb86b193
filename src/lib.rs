//! # parlor-admin
//!
//! Admin backend for an ice-cream parlor: account signup/login with bcrypt
//! password hashing, and a catalog item upload endpoint that stores an image
//! on disk and its pricing metadata in MySQL.
//!
//! ## Features
//!
//! - **Admin accounts**: signup and login over plain HTML forms; passwords
//!   stored as salted bcrypt digests, username uniqueness enforced by the
//!   database
//! - **Item uploads**: one multipart endpoint writing the image under a
//!   timestamp-prefixed name and recording title and prices
//! - **Bounded connection pool**: at most 10 MySQL connections by default;
//!   excess requests queue on acquisition
//! - **Static serving**: uploaded files are served verbatim under `/public`
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`store`] - Storage trait, MySQL implementation, and schema DDL
//! - [`hash`] - Bcrypt password hashing
//! - [`upload`] - File-backed upload storage
//! - [`server`] - Axum-based HTTP server, handlers, and HTML forms
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use parlor_admin::hash::PasswordHasher;
//! use parlor_admin::server::{create_router, AppState, RouterConfig};
//! use parlor_admin::store::MySqlStore;
//! use parlor_admin::upload::UploadStore;
//!
//! # async fn example(store: MySqlStore) {
//! let state = AppState::new(
//!     store,
//!     PasswordHasher::with_default_cost(),
//!     UploadStore::new("public/images"),
//! );
//! let router = create_router(state, RouterConfig::new("public"));
//!
//! // Start the server...
//! # }
//! ```

pub mod config;
pub mod error;
pub mod hash;
pub mod server;
pub mod store;
pub mod upload;

// Re-export commonly used types
pub use config::Config;
pub use error::{HashError, StoreError, UploadError};
pub use hash::{PasswordHasher, DEFAULT_BCRYPT_COST};
pub use server::{
    create_router, health_handler, login_handler, signup_handler, upload_item_handler, AppState,
    HandlerError, HealthResponse, LoginForm, RouterConfig, SignupForm,
    INVALID_CREDENTIALS_MESSAGE, PASSWORD_MISMATCH_MESSAGE,
};
pub use store::{AdminAccount, MySqlStore, NewItem, Store, MYSQL_INIT};
pub use upload::{stored_filename, UploadStore};
