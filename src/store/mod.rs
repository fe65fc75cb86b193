//! Storage layer for admin accounts and catalog items.
//!
//! The store sits behind an async trait so the HTTP layer is generic over
//! the backing implementation:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │               Route Layer               │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │              Store Trait                │
//! │   (insert_admin / find_admin /          │
//! │    insert_item)                         │
//! └────────────────────┬────────────────────┘
//!                      │
//!          ┌───────────┴───────────┐
//!          ▼                       ▼
//! ┌─────────────────┐    ┌─────────────────────┐
//! │   MySqlStore    │    │  in-memory mock     │
//! │  (production)   │    │  (tests)            │
//! └─────────────────┘    └─────────────────────┘
//! ```
//!
//! Username uniqueness is enforced by the storage layer (a UNIQUE
//! constraint), not pre-checked by the application; a race between two
//! concurrent signups with the same username resolves by insert rejection.

mod mysql;
mod schema;

pub use mysql::MySqlStore;
pub use schema::MYSQL_INIT;

use async_trait::async_trait;

use crate::error::StoreError;

/// A stored administrator account.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminAccount {
    /// Auto-assigned row id
    pub id: u64,

    /// Unique login name
    pub username: String,

    /// Bcrypt digest of the account password
    pub password_hash: String,
}

/// A catalog item to be inserted.
///
/// Items are write-only in this service: created on upload, never read back,
/// updated, or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// Stored filename of the item image (relative to the upload directory)
    pub image_filename: String,

    /// Display title
    pub title: String,

    /// Price with the ice-cream topping
    pub price_with_topping: f64,

    /// Price without the topping
    pub price_without_topping: f64,
}

/// Persistence operations used by the route layer.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a new admin account and return its id.
    ///
    /// Fails if the username already exists (uniqueness is the storage
    /// layer's job); callers surface that failure generically, without
    /// distinguishing it from other database errors.
    async fn insert_admin(&self, username: &str, password_hash: &str) -> Result<u64, StoreError>;

    /// Look up an admin account by username.
    async fn find_admin(&self, username: &str) -> Result<Option<AdminAccount>, StoreError>;

    /// Insert a new catalog item and return its id.
    async fn insert_item(&self, item: NewItem) -> Result<u64, StoreError>;
}
