//! Public API surface for the analytics backend.
//!
//! This file consolidates the identifier types and re-exports the DTO types
//! for API consumers. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::models::calendar::{HourWindow, Weekday};
pub use crate::models::dataset::{Dataset, DatasetInfo, GenerationSpec};
pub use crate::models::record::UsageRecord;
pub use crate::services::forecast::{DemandForecast, ForecastEntry};
pub use crate::services::heatmap::HeatmapMatrix;
pub use crate::services::insights::HeatmapInsights;
pub use crate::services::profiles::{
    CohortBreakdown, DailyPoint, HourlyPoint, UsageProfiles,
};

use serde::{Deserialize, Serialize};

/// Dataset identifier (repository primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DatasetId(pub i64);

impl DatasetId {
    pub fn new(value: i64) -> Self {
        DatasetId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DatasetId> for i64 {
    fn from(id: DatasetId) -> Self {
        id.0
    }
}
