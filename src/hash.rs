//! Password hashing for admin credentials.
//!
//! Passwords are hashed with bcrypt before storage. Each digest embeds a
//! random per-password salt and the cost factor, so verification needs
//! nothing but the stored string:
//!
//! ```text
//! $2b$10$<22-char salt><31-char checksum>
//! ```
//!
//! # Security Properties
//!
//! - **Salted**: every digest uses a fresh random salt, defeating
//!   precomputed lookup tables
//! - **Tunable work factor**: the cost is configurable (default 10) so the
//!   hash can be kept slow as hardware improves
//! - **Non-blocking**: digest computation is CPU-bound and runs on the
//!   blocking thread pool, never on the async executor
//!
//! # Example
//!
//! ```rust,no_run
//! use parlor_admin::hash::PasswordHasher;
//!
//! # async fn example() -> Result<(), parlor_admin::error::HashError> {
//! let hasher = PasswordHasher::with_default_cost();
//! let digest = hasher.hash("secret1").await?;
//! assert!(hasher.verify("secret1", &digest).await?);
//! assert!(!hasher.verify("wrong", &digest).await?);
//! # Ok(())
//! # }
//! ```

use crate::error::HashError;

/// Default bcrypt cost factor (2^10 rounds).
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Minimum cost accepted by bcrypt.
pub const MIN_BCRYPT_COST: u32 = 4;

/// Maximum cost accepted by bcrypt.
pub const MAX_BCRYPT_COST: u32 = 31;

/// Bcrypt password hasher with a configurable cost factor.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given cost factor.
    ///
    /// The cost must be within bcrypt's accepted range (4-31); values
    /// outside it make `hash` fail. `Config::validate` rejects such
    /// configurations before the server starts.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Create a hasher with the default cost factor.
    pub fn with_default_cost() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }

    /// The configured cost factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password, returning the bcrypt digest string.
    pub async fn hash(&self, password: &str) -> Result<String, HashError> {
        let cost = self.cost;
        let password = password.to_string();
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| HashError::Hash(e.to_string()))?
            .map_err(|e| HashError::Hash(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Returns `Ok(false)` on a mismatch; an error means the stored digest
    /// itself could not be parsed.
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let digest = digest.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest))
            .await
            .map_err(|e| HashError::Hash(e.to_string()))?
            .map_err(|e| HashError::MalformedDigest(e.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::with_default_cost()
    }
}

// =============================================================================
// Tests
// =============================================================================
