//! In-memory repository implementation.
//!
//! Stores all datasets in a HashMap behind an RwLock, giving fast,
//! deterministic, and isolated execution for tests, local development, and
//! the demo server.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::error::{ErrorContext, StoreError, StoreResult};
use super::DatasetRepository;
use crate::api::DatasetId;
use crate::models::dataset::{Dataset, DatasetInfo, GenerationSpec};
use crate::models::record::UsageRecord;

/// In-memory dataset repository with sequential IDs.
#[derive(Clone)]
pub struct MemoryRepository {
    data: Arc<RwLock<MemoryData>>,
}

struct MemoryData {
    datasets: HashMap<DatasetId, Dataset>,
    next_id: i64,
    is_healthy: bool,
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(MemoryData {
                datasets: HashMap::new(),
                next_id: 1,
                is_healthy: true,
            })),
        }
    }

    /// Toggle health for failure-path testing. While unhealthy, all
    /// operations fail with `StoreError::Unavailable`.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    fn ensure_healthy(data: &MemoryData, operation: &str) -> StoreResult<()> {
        if data.is_healthy {
            Ok(())
        } else {
            Err(StoreError::Unavailable {
                message: "repository marked unhealthy".to_string(),
                context: ErrorContext::new(operation),
            })
        }
    }
}

#[async_trait]
impl DatasetRepository for MemoryRepository {
    async fn insert_dataset(
        &self,
        name: String,
        spec: GenerationSpec,
        records: Vec<UsageRecord>,
        fingerprint: String,
    ) -> StoreResult<DatasetInfo> {
        let mut data = self.data.write();
        Self::ensure_healthy(&data, "insert_dataset")?;

        let id = DatasetId::new(data.next_id);
        data.next_id += 1;

        let dataset = Dataset {
            id,
            name,
            spec,
            records,
            fingerprint,
            created_at: Utc::now(),
            regenerated_at: None,
        };
        let info = dataset.info();
        data.datasets.insert(id, dataset);

        Ok(info)
    }

    async fn get_dataset(&self, id: DatasetId) -> StoreResult<Dataset> {
        let data = self.data.read();
        Self::ensure_healthy(&data, "get_dataset")?;

        data.datasets.get(&id).cloned().ok_or_else(|| {
            StoreError::not_found_with_context(
                format!("dataset {} not found", id),
                ErrorContext::new("get_dataset")
                    .with_entity("dataset")
                    .with_entity_id(id),
            )
        })
    }

    async fn list_datasets(&self) -> StoreResult<Vec<DatasetInfo>> {
        let data = self.data.read();
        Self::ensure_healthy(&data, "list_datasets")?;

        let mut infos: Vec<DatasetInfo> = data.datasets.values().map(Dataset::info).collect();
        infos.sort_by_key(|info| info.id);
        Ok(infos)
    }

    async fn replace_records(
        &self,
        id: DatasetId,
        records: Vec<UsageRecord>,
        fingerprint: String,
    ) -> StoreResult<DatasetInfo> {
        let mut data = self.data.write();
        Self::ensure_healthy(&data, "replace_records")?;

        let dataset = data.datasets.get_mut(&id).ok_or_else(|| {
            StoreError::not_found_with_context(
                format!("dataset {} not found", id),
                ErrorContext::new("replace_records")
                    .with_entity("dataset")
                    .with_entity_id(id),
            )
        })?;

        dataset.records = records;
        dataset.fingerprint = fingerprint;
        dataset.regenerated_at = Some(Utc::now());

        Ok(dataset.info())
    }

    async fn delete_dataset(&self, id: DatasetId) -> StoreResult<()> {
        let mut data = self.data.write();
        Self::ensure_healthy(&data, "delete_dataset")?;

        if data.datasets.remove(&id).is_none() {
            return Err(StoreError::not_found_with_context(
                format!("dataset {} not found", id),
                ErrorContext::new("delete_dataset")
                    .with_entity("dataset")
                    .with_entity_id(id),
            ));
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(self.data.read().is_healthy)
    }
}
