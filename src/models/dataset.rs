//! Dataset types: generation axes, stored datasets, and summary metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::Weekday;
use super::record::UsageRecord;
use crate::api::DatasetId;
use crate::config::EngineConfig;

/// The axes of a generation run.
///
/// A dataset is the exhaustive cross product of these four axes: exactly
/// `days × hours × facilities × tiers` records, one per unique combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSpec {
    pub days: Vec<Weekday>,
    pub hours: Vec<u8>,
    pub facilities: Vec<String>,
    pub tiers: Vec<String>,
}

impl GenerationSpec {
    /// The full axes for a configuration: all seven days, the whole operating
    /// hour range, and the complete facility/tier catalogs.
    pub fn full(config: &EngineConfig) -> Self {
        Self {
            days: Weekday::ALL.to_vec(),
            hours: config.hour_axis(),
            facilities: config.facility_names(),
            tiers: config.tier_names(),
        }
    }

    /// Number of records a generation run over these axes produces.
    pub fn record_count(&self) -> usize {
        self.days.len() * self.hours.len() * self.facilities.len() * self.tiers.len()
    }
}

/// A stored dataset: its axes, the generated records, and lifecycle metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    pub name: String,
    pub spec: GenerationSpec,
    pub records: Vec<UsageRecord>,
    /// SHA-256 hex fingerprint of the record set; changes on regeneration
    pub fingerprint: String,
    pub created_at: DateTime<Utc>,
    /// Set on each regeneration; `None` until the first one
    pub regenerated_at: Option<DateTime<Utc>>,
}

impl Dataset {
    /// Summary metadata without the record payload.
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            id: self.id,
            name: self.name.clone(),
            record_count: self.records.len(),
            fingerprint: self.fingerprint.clone(),
            created_at: self.created_at,
            regenerated_at: self.regenerated_at,
        }
    }
}

/// Lightweight dataset summary for listings and creation responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub id: DatasetId,
    pub name: String,
    pub record_count: usize,
    pub fingerprint: String,
    pub created_at: DateTime<Utc>,
    pub regenerated_at: Option<DateTime<Utc>>,
}
