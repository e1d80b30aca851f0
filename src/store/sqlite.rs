// ABOUTME: SQLite generation store with upsert semantics for the per-kind record
// ABOUTME: Idempotent migrations for generation_records and generation_history tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use super::{GenerationStore, StoreError};
use chrono::{DateTime, SecondsFormat, Utc};
use nutrivida_core::models::{
    ContentKind, GenerationHistoryEntry, GenerationRecord, GenerationSource,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

/// `SQLite`-backed store
#[derive(Clone)]
pub struct SqliteGenerationStore {
    pool: SqlitePool,
}

impl SqliteGenerationStore {
    /// Open (creating if needed) the database file and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or migrations fail
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Unavailable(format!("{}: {e}", parent.display())))?;
        }
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::with_pool(pool).await
    }

    /// In-memory database, private to this store
    ///
    /// # Errors
    ///
    /// Returns an error if migrations fail
    pub async fn in_memory() -> Result<Self, StoreError> {
        // Every connection to :memory: is a separate database
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    /// Wrap an existing pool and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if migrations fail
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Get a reference to the pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS generation_records (
                user_id TEXT NOT NULL,
                kind TEXT NOT NULL,
                last_generated_at TEXT NOT NULL,
                rendered_text TEXT NOT NULL,
                PRIMARY KEY (user_id, kind)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS generation_history (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                kind TEXT NOT NULL,
                context_token TEXT NOT NULL,
                rendered_text TEXT NOT NULL,
                created_at TEXT NOT NULL,
                source TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_generation_history_user ON generation_history(user_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        info!("Generation store migrations applied");
        Ok(())
    }
}

/// Fixed-width UTC timestamps so text ordering matches time ordering
fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("timestamp '{value}': {e}")))
}

fn decode_kind(value: &str) -> Result<ContentKind, StoreError> {
    ContentKind::from_str(value).map_err(StoreError::Corrupt)
}

fn row_to_record(row: &SqliteRow) -> Result<GenerationRecord, StoreError> {
    let kind: String = row.try_get("kind")?;
    let last_generated_at: String = row.try_get("last_generated_at")?;
    Ok(GenerationRecord {
        user_id: row.try_get("user_id")?,
        kind: decode_kind(&kind)?,
        last_generated_at: decode_timestamp(&last_generated_at)?,
        rendered_text: row.try_get("rendered_text")?,
    })
}

fn row_to_history(row: &SqliteRow) -> Result<GenerationHistoryEntry, StoreError> {
    let id: String = row.try_get("id")?;
    let kind: String = row.try_get("kind")?;
    let created_at: String = row.try_get("created_at")?;
    let source: String = row.try_get("source")?;
    Ok(GenerationHistoryEntry {
        id: Uuid::parse_str(&id).map_err(|e| StoreError::Corrupt(format!("id '{id}': {e}")))?,
        user_id: row.try_get("user_id")?,
        kind: decode_kind(&kind)?,
        context_token: row.try_get("context_token")?,
        rendered_text: row.try_get("rendered_text")?,
        created_at: decode_timestamp(&created_at)?,
        source: GenerationSource::from_str_lossy(&source),
    })
}

#[async_trait::async_trait]
impl GenerationStore for SqliteGenerationStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn get(
        &self,
        user_id: &str,
        kind: ContentKind,
    ) -> Result<Option<GenerationRecord>, StoreError> {
        let row = sqlx::query(
            r"
            SELECT user_id, kind, last_generated_at, rendered_text
            FROM generation_records
            WHERE user_id = $1 AND kind = $2
            ",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn put(&self, record: &GenerationRecord) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO generation_records (user_id, kind, last_generated_at, rendered_text)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(user_id, kind) DO UPDATE SET
                last_generated_at = excluded.last_generated_at,
                rendered_text = excluded.rendered_text
            ",
        )
        .bind(&record.user_id)
        .bind(record.kind.as_str())
        .bind(encode_timestamp(record.last_generated_at))
        .bind(&record.rendered_text)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn append_history(&self, entry: &GenerationHistoryEntry) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO generation_history (id, user_id, kind, context_token, rendered_text, created_at, source)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(entry.id.to_string())
        .bind(&entry.user_id)
        .bind(entry.kind.as_str())
        .bind(&entry.context_token)
        .bind(&entry.rendered_text)
        .bind(encode_timestamp(entry.created_at))
        .bind(entry.source.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn history(
        &self,
        user_id: &str,
        kind: Option<ContentKind>,
        limit: u32,
    ) -> Result<Vec<GenerationHistoryEntry>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, kind, context_token, rendered_text, created_at, source
            FROM generation_history
            WHERE user_id = $1 AND ($2 IS NULL OR kind = $2)
            ORDER BY created_at DESC, rowid DESC
            LIMIT $3
            ",
        )
        .bind(user_id)
        .bind(kind.map(|k| k.as_str()))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_history).collect()
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
