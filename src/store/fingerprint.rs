//! Record-set fingerprinting for regeneration detection.

use sha2::{Digest, Sha256};

use super::error::{StoreError, StoreResult};
use crate::models::record::UsageRecord;

/// SHA-256 fingerprint (hex) over the canonical JSON of a record set.
///
/// Recomputed on each (re)generation; the dashboard compares fingerprints to
/// detect that a dataset was replaced.
pub fn fingerprint_records(records: &[UsageRecord]) -> StoreResult<String> {
    let canonical = serde_json::to_vec(records)
        .map_err(|e| StoreError::internal(format!("failed to serialize records: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hex::encode(hasher.finalize()))
}
