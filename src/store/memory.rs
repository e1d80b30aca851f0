// ABOUTME: In-memory generation store for tests and ephemeral runs
// ABOUTME: Records keyed by (user, kind) behind a tokio RwLock, history kept in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

use super::{GenerationStore, StoreError};
use nutrivida_core::models::{ContentKind, GenerationHistoryEntry, GenerationRecord};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type RecordKey = (String, ContentKind);

/// Process-local store; contents are lost on exit
#[derive(Clone, Default)]
pub struct InMemoryGenerationStore {
    records: Arc<RwLock<HashMap<RecordKey, GenerationRecord>>>,
    history: Arc<RwLock<Vec<GenerationHistoryEntry>>>,
}

impl InMemoryGenerationStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether no record is stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl GenerationStore for InMemoryGenerationStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get(
        &self,
        user_id: &str,
        kind: ContentKind,
    ) -> Result<Option<GenerationRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(&(user_id.to_owned(), kind)).cloned())
    }

    async fn put(&self, record: &GenerationRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.insert((record.user_id.clone(), record.kind), record.clone());
        Ok(())
    }

    async fn append_history(&self, entry: &GenerationHistoryEntry) -> Result<(), StoreError> {
        self.history.write().await.push(entry.clone());
        Ok(())
    }

    async fn history(
        &self,
        user_id: &str,
        kind: Option<ContentKind>,
        limit: u32,
    ) -> Result<Vec<GenerationHistoryEntry>, StoreError> {
        let history = self.history.read().await;
        // Later insertions win ties on created_at
        let mut entries: Vec<GenerationHistoryEntry> = history
            .iter()
            .rev()
            .filter(|e| e.user_id == user_id && kind.is_none_or(|k| e.kind == k))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
