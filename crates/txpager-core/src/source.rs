//! Where records come from
//!
//! The engine only ever sees the full collection, so a source just needs to
//! hand out everything it has and accept new drafts.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::record::{Identified, Record, RecordDraft};

/// Length of generated record ids
pub const RECORD_ID_LENGTH: usize = 8;

/// Supplier of the full record collection
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record, in no particular order
    async fn fetch_all(&self) -> CoreResult<Vec<Record>>;

    /// Validate a draft, assign it an id and store it
    async fn create(&self, draft: RecordDraft) -> CoreResult<Record>;
}

/// Process-local source; created records are lost at exit
#[derive(Debug, Default)]
pub struct MemoryRecordSource {
    records: RwLock<Vec<Record>>,
}

impl MemoryRecordSource {
    pub fn new(records: Vec<Record>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(CoreError::DuplicateRecord { id: record.id().to_string() });
            }
        }
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Load a JSON array of records
    pub async fn from_seed_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CoreError::SourceUnavailable {
                message: format!("cannot read {}: {}", path.display(), e),
            }
        })?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        log::info!("Loaded {} records from {}", records.len(), path.display());
        Self::new(records)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordSource for MemoryRecordSource {
    async fn fetch_all(&self) -> CoreResult<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, draft: RecordDraft) -> CoreResult<Record> {
        let mut records = self.records.write().await;

        let mut id = txpager_utils::generate_uid("", RECORD_ID_LENGTH);
        while records.iter().any(|r| r.id() == id) {
            id = txpager_utils::generate_uid("", RECORD_ID_LENGTH);
        }

        let record = draft.into_record(id)?;
        log::debug!("Created record {} ({})", record.id(), record.payee());
        records.push(record.clone());
        Ok(record)
    }
}
