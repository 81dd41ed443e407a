//! Dataset storage via the repository pattern.
//!
//! The store owns dataset lifetimes on behalf of the caller; there is no
//! ambient global state. The layering mirrors the rest of the backend:
//!
//! - `services`: high-level business logic functions (use these!)
//! - [`DatasetRepository`]: trait definition for storage operations
//! - `memory`: in-memory implementation backing tests and the demo server
//!
//! Datasets are replaced whole on regeneration; the repository never mutates
//! a stored record set in place.

pub mod error;
pub mod fingerprint;
pub mod memory;
pub mod services;

pub use error::{ErrorContext, StoreError, StoreResult};
pub use memory::MemoryRepository;

use async_trait::async_trait;

use crate::api::DatasetId;
use crate::models::dataset::{Dataset, DatasetInfo, GenerationSpec};
use crate::models::record::UsageRecord;

/// Storage operations for generated datasets.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Store a freshly generated dataset and assign it an ID.
    async fn insert_dataset(
        &self,
        name: String,
        spec: GenerationSpec,
        records: Vec<UsageRecord>,
        fingerprint: String,
    ) -> StoreResult<DatasetInfo>;

    /// Fetch a dataset with its full record payload.
    async fn get_dataset(&self, id: DatasetId) -> StoreResult<Dataset>;

    /// List summaries of all stored datasets.
    async fn list_datasets(&self) -> StoreResult<Vec<DatasetInfo>>;

    /// Atomically replace a dataset's record set (regeneration).
    async fn replace_records(
        &self,
        id: DatasetId,
        records: Vec<UsageRecord>,
        fingerprint: String,
    ) -> StoreResult<DatasetInfo>;

    /// Delete a dataset.
    async fn delete_dataset(&self, id: DatasetId) -> StoreResult<()>;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> StoreResult<bool>;
}
