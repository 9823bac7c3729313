//! Item persistence. `ItemStore` is the seam the service talks to; `SqliteItemStore` is the
//! sqlx-backed implementation. Every write runs in its own transaction and is rolled back
//! explicitly when any statement in it fails.

use crate::error::AppError;
use crate::model::Item;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, ordered by id ascending.
    async fn list(&self) -> Result<Vec<Item>, sqlx::Error>;

    async fn get(&self, id: i64) -> Result<Option<Item>, sqlx::Error>;

    /// Insert a new row and return it with its store-assigned id.
    async fn insert(&self, name: &str) -> Result<Item, sqlx::Error>;

    /// Rename in place. `Ok(None)` when no row has this id.
    async fn rename(&self, id: i64, name: &str) -> Result<Option<Item>, sqlx::Error>;

    /// Delete and return the removed row. `Ok(None)` when no row has this id.
    async fn remove(&self, id: i64) -> Result<Option<Item>, sqlx::Error>;

    async fn ping(&self) -> Result<(), sqlx::Error>;
}

const ITEMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL CHECK (length(name) >= 1)
    )
"#;

/// Create the `items` table if missing. AUTOINCREMENT keeps ids from being reused after deletes.
pub async fn ensure_items_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(ITEMS_DDL).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Open (creating the file if needed) the database at `database_url` and ensure the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?;
        Self::from_pool(pool).await
    }

    /// Private in-memory database. A single never-expiring connection keeps the data alive.
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, AppError> {
        ensure_items_table(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Commit on success; roll back before surfacing the error otherwise.
async fn finish<T>(
    tx: Transaction<'_, Sqlite>,
    result: Result<T, sqlx::Error>,
) -> Result<T, sqlx::Error> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rb) = tx.rollback().await {
                tracing::warn!(error = %rb, "rollback failed");
            }
            Err(e)
        }
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn list(&self) -> Result<Vec<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>("SELECT id, name FROM items ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
    }

    async fn get(&self, id: i64) -> Result<Option<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>("SELECT id, name FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert(&self, name: &str) -> Result<Item, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        tracing::debug!(name = %name, "insert item");
        let result = sqlx::query_as::<_, Item>("INSERT INTO items (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&mut *tx)
            .await;
        finish(tx, result).await
    }

    async fn rename(&self, id: i64, name: &str) -> Result<Option<Item>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        tracing::debug!(id, name = %name, "rename item");
        let result = sqlx::query_as::<_, Item>("UPDATE items SET name = ? WHERE id = ? RETURNING id, name")
            .bind(name)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await;
        finish(tx, result).await
    }

    async fn remove(&self, id: i64) -> Result<Option<Item>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        tracing::debug!(id, "remove item");
        let result = sqlx::query_as::<_, Item>("DELETE FROM items WHERE id = ? RETURNING id, name")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await;
        finish(tx, result).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
