//! MySQL-backed implementation of the [`Store`] trait.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

use crate::error::StoreError;
use crate::store::schema::MYSQL_INIT;
use crate::store::{AdminAccount, NewItem, Store};

/// Store backed by a bounded MySQL connection pool.
///
/// The pool caps concurrent database connections; requests beyond the cap
/// queue on acquisition, which is the only backpressure mechanism in the
/// service. Each borrowed connection serves exactly one in-flight query and
/// returns to the pool afterward.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Wrap an existing pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connect to MySQL with at most `max_connections` pooled connections.
    pub async fn connect(
        options: MySqlConnectOptions,
        max_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    ///
    /// Statements are executed one at a time; `sqlx::query` does not accept
    /// multi-statement strings.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        for stmt in MYSQL_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn insert_admin(&self, username: &str, password_hash: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("INSERT INTO user_admin (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }

    async fn find_admin(&self, username: &str) -> Result<Option<AdminAccount>, StoreError> {
        let row = sqlx::query("SELECT id, username, password FROM user_admin WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_admin).transpose()
    }

    async fn insert_item(&self, item: NewItem) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO item (
                item_image, item_title, price_with_ice_cream, price_without_ice_cream
            ) VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&item.image_filename)
        .bind(&item.title)
        .bind(item.price_with_topping)
        .bind(item.price_without_topping)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id())
    }
}

fn row_to_admin(row: MySqlRow) -> Result<AdminAccount, StoreError> {
    let id: u64 = row.try_get("id").map_err(StoreError::from)?;
    let username: String = row.try_get("username").map_err(StoreError::from)?;
    let password_hash: String = row.try_get("password").map_err(StoreError::from)?;

    Ok(AdminAccount {
        id,
        username,
        password_hash,
    })
}
