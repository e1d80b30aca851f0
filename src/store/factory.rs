// ABOUTME: Store factory for configuration-based backend selection
// ABOUTME: Maps DatabaseUrl variants to in-memory or SQLite generation stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use super::{GenerationStore, InMemoryGenerationStore, SqliteGenerationStore, StoreError};
use crate::config::environment::DatabaseUrl;
use std::sync::Arc;
use tracing::info;

/// Create the store backend named by the URL
///
/// # Errors
///
/// Returns an error if the `SQLite` database cannot be opened
pub async fn create_store(url: &DatabaseUrl) -> Result<Arc<dyn GenerationStore>, StoreError> {
    let store: Arc<dyn GenerationStore> = match url {
        DatabaseUrl::Memory => Arc::new(InMemoryGenerationStore::new()),
        DatabaseUrl::SQLiteMemory => Arc::new(SqliteGenerationStore::in_memory().await?),
        DatabaseUrl::SQLite { path } => Arc::new(SqliteGenerationStore::open(path).await?),
    };
    info!(
        store.backend = store.backend_name(),
        store.url = %url,
        "Generation store initialized"
    );
    Ok(store)
}
