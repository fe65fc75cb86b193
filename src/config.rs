//! Configuration management for parlor-admin.
//!
//! Every setting is available as a command-line flag and as an environment
//! variable (`DATABASE_HOST`, `DATABASE_USER`, `DATABASE_PASSWORD`,
//! `DATABASE`, and friends), with defaults for everything optional. A `.env`
//! file is loaded by the binary before parsing, so all of these can live
//! there as well.
//!
//! # Environment Variables
//!
//! - `HOST` - Server bind address (default: 0.0.0.0)
//! - `PORT` - Server port (default: 5000)
//! - `DATABASE_HOST` - MySQL host (required)
//! - `DATABASE_USER` - MySQL user (required)
//! - `DATABASE_PASSWORD` - MySQL password (optional)
//! - `DATABASE` - MySQL database name (required)
//! - `DATABASE_POOL_SIZE` - Max pooled connections (default: 10)
//! - `PUBLIC_DIR` - Statically served directory (default: public)
//! - `UPLOAD_DIR` - Upload target directory (default: public/images)
//! - `BCRYPT_COST` - Bcrypt work factor (default: 10)
//! - `MAX_UPLOAD_BYTES` - Request body cap in bytes (default: 10 MiB)
//! - `CORS_ORIGINS` - Allowed CORS origins (comma-separated)

use std::path::PathBuf;

use clap::Parser;

use crate::hash::{DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use crate::server::DEFAULT_MAX_UPLOAD_BYTES;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default maximum number of pooled database connections.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Default statically served directory.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Default upload directory (inside the public tree so uploads are served).
pub const DEFAULT_UPLOAD_DIR: &str = "public/images";

// =============================================================================
// CLI Arguments
// =============================================================================

/// parlor-admin - Admin backend for an ice-cream parlor.
///
/// Serves the admin signup/login forms and the catalog item upload endpoint,
/// backed by MySQL and a local upload directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "parlor-admin")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PORT")]
    pub port: u16,

    // =========================================================================
    // Database Configuration
    // =========================================================================
    /// MySQL server host.
    #[arg(long, env = "DATABASE_HOST")]
    pub database_host: String,

    /// MySQL user.
    #[arg(long, env = "DATABASE_USER")]
    pub database_user: String,

    /// MySQL password.
    #[arg(long, env = "DATABASE_PASSWORD")]
    pub database_password: Option<String>,

    /// MySQL database name.
    #[arg(long, env = "DATABASE")]
    pub database: String,

    /// Maximum number of pooled database connections.
    #[arg(long, default_value_t = DEFAULT_POOL_SIZE, env = "DATABASE_POOL_SIZE")]
    pub pool_size: u32,

    // =========================================================================
    // File Storage Configuration
    // =========================================================================
    /// Directory served verbatim under /public.
    #[arg(long, default_value = DEFAULT_PUBLIC_DIR, env = "PUBLIC_DIR")]
    pub public_dir: PathBuf,

    /// Directory uploaded item images are written to.
    #[arg(long, default_value = DEFAULT_UPLOAD_DIR, env = "UPLOAD_DIR")]
    pub upload_dir: PathBuf,

    /// Maximum accepted request body size in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: usize,

    // =========================================================================
    // Hashing Configuration
    // =========================================================================
    /// Bcrypt cost factor for password hashing (4-31).
    #[arg(long, default_value_t = DEFAULT_BCRYPT_COST, env = "BCRYPT_COST")]
    pub bcrypt_cost: u32,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        // clap enforces presence; these catch empty strings from env vars
        if self.database_host.is_empty() {
            return Err("Database host is required. Set --database-host or DATABASE_HOST".to_string());
        }
        if self.database_user.is_empty() {
            return Err("Database user is required. Set --database-user or DATABASE_USER".to_string());
        }
        if self.database.is_empty() {
            return Err("Database name is required. Set --database or DATABASE".to_string());
        }

        if self.pool_size == 0 {
            return Err("pool_size must be greater than 0".to_string());
        }

        if self.bcrypt_cost < MIN_BCRYPT_COST || self.bcrypt_cost > MAX_BCRYPT_COST {
            return Err(format!(
                "bcrypt_cost must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            ));
        }

        if self.max_upload_bytes == 0 {
            return Err("max_upload_bytes must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
