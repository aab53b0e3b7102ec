use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::error::SqlState;

use crate::image_store::{
    error::{Result, StoreError},
    ImageStore,
};

const CREATE_TABLE_SQL: &str =
    "CREATE TABLE IF NOT EXISTS images (name TEXT PRIMARY KEY, url TEXT NOT NULL)";
const INSERT_SQL: &str = "INSERT INTO images (name, url) VALUES ($1, $2)";
const SELECT_URL_SQL: &str = "SELECT url FROM images WHERE name = $1";
const SELECT_NAMES_SQL: &str = "SELECT name FROM images ORDER BY name";

/// PostgreSQL-backed image store
#[derive(Clone)]
pub struct PostgresImageStore {
    pool: Pool,
}

impl PostgresImageStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create the `images` table if it does not exist yet
    ///
    /// Also serves as a startup connectivity check.
    pub async fn ensure_schema(&self) -> Result<()> {
        let conn = self
            .pool
            .get()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        conn.batch_execute(CREATE_TABLE_SQL).await?;
        Ok(())
    }
}

#[async_trait]
impl ImageStore for PostgresImageStore {
    async fn put(&self, name: &str, url: &str) -> Result<()> {
        let conn = self
            .pool
            .get()
            .await
            .map_err(StoreError::write)?;

        match conn.execute(INSERT_SQL, &[&name, &url]).await {
            Ok(_) => Ok(()),
            Err(e) if e.code() == Some(&SqlState::UNIQUE_VIOLATION) => {
                Err(StoreError::DuplicateKey(name.to_string()))
            }
            Err(e) => Err(StoreError::write(e)),
        }
    }

    async fn get(&self, name: &str) -> Result<String> {
        let conn = self
            .pool
            .get()
            .await
            .map_err(StoreError::read)?;

        let row = conn
            .query_opt(SELECT_URL_SQL, &[&name])
            .await
            .map_err(StoreError::read)?;

        match row {
            Some(row) => Ok(row.get(0)),
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    async fn list(&self) -> Result<Vec<String>> {
        let conn = self
            .pool
            .get()
            .await
            .map_err(StoreError::read)?;

        let rows = conn
            .query(SELECT_NAMES_SQL, &[])
            .await
            .map_err(StoreError::read)?;

        Ok(rows.iter().map(|row| row.get(0)).collect())
    }
}
