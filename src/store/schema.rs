//! SQL DDL for initializing the MySQL schema.

/// MySQL schema with:
/// - `user_admin`: one row per admin account, `username` UNIQUE
/// - `item`: one row per uploaded catalog item
///
/// Executed statement-by-statement at startup; `IF NOT EXISTS` makes the
/// initialization idempotent across restarts.
pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS user_admin (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    username VARCHAR(255) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS item (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    item_image VARCHAR(255) NOT NULL,
    item_title VARCHAR(255) NOT NULL,
    price_with_ice_cream DECIMAL(10, 2) NOT NULL,
    price_without_ice_cream DECIMAL(10, 2) NOT NULL
);
"#;
