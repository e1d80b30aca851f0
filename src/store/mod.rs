// ABOUTME: Generation store abstraction persisting the last generation per user and kind
// ABOUTME: Pluggable backends (in-memory, SQLite) selected by the store factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! # Generation Store
//!
//! The store owns two pieces of state:
//!
//! - one [`GenerationRecord`] per (user, kind), overwritten on every generation
//! - an append-only history of every generated text
//!
//! Concurrent writers for the same (user, kind) are last-writer-wins.

/// Backend selection from configuration
pub mod factory;
/// In-memory backend
pub mod memory;
/// `SQLite` backend
pub mod sqlite;

pub use factory::create_store;
pub use memory::InMemoryGenerationStore;
pub use sqlite::SqliteGenerationStore;

use nutrivida_core::errors::{AppError, ErrorCode};
use nutrivida_core::models::{ContentKind, GenerationHistoryEntry, GenerationRecord};
use thiserror::Error;

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend cannot be reached
    #[error("generation store unavailable: {0}")]
    Unavailable(String),
    /// Database driver error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Value could not be encoded for storage
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Stored row cannot be decoded
    #[error("corrupt stored value: {0}")]
    Corrupt(String),
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        let message = error.to_string();
        let app_error = match error {
            StoreError::Database(_) => Self::new(ErrorCode::DatabaseError, message),
            StoreError::Serialization(_) => Self::new(ErrorCode::SerializationError, message),
            StoreError::Unavailable(_) | StoreError::Corrupt(_) => Self::storage(message),
        };
        app_error.with_source(error)
    }
}

/// Persistence contract for generation records and history
#[async_trait::async_trait]
pub trait GenerationStore: Send + Sync {
    /// Backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Last generation for a (user, kind) pair
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(
        &self,
        user_id: &str,
        kind: ContentKind,
    ) -> Result<Option<GenerationRecord>, StoreError>;

    /// Insert or replace the record for its (user, kind) pair
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn put(&self, record: &GenerationRecord) -> Result<(), StoreError>;

    /// Append a history entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn append_history(&self, entry: &GenerationHistoryEntry) -> Result<(), StoreError>;

    /// History for a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn history(
        &self,
        user_id: &str,
        kind: Option<ContentKind>,
        limit: u32,
    ) -> Result<Vec<GenerationHistoryEntry>, StoreError>;

    /// Check that the backend is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable
    async fn health_check(&self) -> Result<(), StoreError>;
}
