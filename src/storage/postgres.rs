//! Postgres storage

use std::time::Duration;

use anyhow::Context;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::items::Item;

use super::CreateItemValues;
use super::Error;
use super::Result;
use super::Storage;
use super::UpdateItemValues;

/// Migrator to run migrations on startup
static MIGRATOR: Migrator = sqlx::migrate!();

/// Postgres storage
#[derive(Clone)]
pub struct Postgres {
    /// Pool of connections
    connection_pool: PgPool,
}

impl Postgres {
    /// Create Postgres storage
    ///
    /// Use the `DATABASE_URL` environment variable
    ///
    /// Migrations will be run
    pub async fn new() -> anyhow::Result<Self> {
        let database_connection_string =
            std::env::var("DATABASE_URL").context("`DATABASE_URL` is not set")?;

        let connection_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_connection_string)
            .await
            .context("Could not connect to the database")?;

        Self::new_with_pool(connection_pool).await
    }

    /// Create Postgres storage with existing pool
    ///
    /// Migrations will be run
    pub async fn new_with_pool(connection_pool: PgPool) -> anyhow::Result<Self> {
        MIGRATOR
            .run(&connection_pool)
            .await
            .context("Migrations could not run")?;

        Ok(Self { connection_pool })
    }
}

impl Storage for Postgres {
    async fn find_all_items(&self) -> Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r"
            SELECT id, title, description, status, created_at, updated_at
            FROM todo_items
            ORDER BY id DESC
            ",
        )
        .fetch_all(&self.connection_pool)
        .await
        .map_err(query_error)?;

        Ok(items)
    }

    async fn find_single_item_by_id(&self, id: i64) -> Result<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r"
            SELECT id, title, description, status, created_at, updated_at
            FROM todo_items
            WHERE id = $1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(query_error)?;

        Ok(item)
    }

    async fn insert_item(&self, values: &CreateItemValues<'_>) -> Result<Item> {
        let item = sqlx::query_as::<_, Item>(
            r"
            INSERT INTO todo_items (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description, status, created_at, updated_at
            ",
        )
        .bind(values.title)
        .bind(values.description)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(query_error)?;

        Ok(item)
    }

    async fn update_item(&self, id: i64, values: &UpdateItemValues<'_>) -> Result<bool> {
        // NULL parameters keep the current column value
        let result = sqlx::query(
            r"
            UPDATE todo_items
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(values.title)
        .bind(values.description)
        .bind(values.status)
        .execute(&self.connection_pool)
        .await
        .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// Map any error to a storage error, keeping its message
fn query_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Query(err.to_string())
}
