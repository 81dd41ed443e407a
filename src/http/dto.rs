//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The analytics payloads (matrix, insights, profiles, forecast) are already
//! serializable and re-exported from the api module.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    DatasetId, DatasetInfo, DemandForecast, ForecastEntry, HeatmapInsights, HeatmapMatrix,
    UsageProfiles,
};

/// Request body for creating a new dataset.
///
/// Absent axes default to the configured catalogs (all days, the full
/// operating hour range, every facility and tier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDatasetRequest {
    /// Name for the dataset
    pub name: String,
    /// Day names (subset of Monday..Sunday)
    #[serde(default)]
    pub days: Option<Vec<String>>,
    /// Hours within the operating range
    #[serde(default)]
    pub hours: Option<Vec<u8>>,
    /// Facility names from the catalog
    #[serde(default)]
    pub facilities: Option<Vec<String>>,
    /// Member tier names from the catalog
    #[serde(default)]
    pub tiers: Option<Vec<String>>,
    /// Seed for reproducible samples (fresh entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Request body for dataset regeneration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegenerateRequest {
    /// Seed for reproducible samples (fresh entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Response for dataset listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<DatasetInfo>,
    pub total: usize,
}

/// Query parameters for the heatmap and profiles endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterQuery {
    /// Facility filter; absent or "all" disables it
    #[serde(default)]
    pub facility: Option<String>,
    /// Tier filter; absent or "all" disables it
    #[serde(default)]
    pub tier: Option<String>,
}

/// Query parameters for the forecast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastQuery {
    /// Start date (defaults to today, UTC)
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Forecast horizon in days (default 7)
    #[serde(default)]
    pub days: Option<u32>,
}

/// Response wrapper for the heatmap endpoint, echoing the applied filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapResponse {
    pub dataset_id: DatasetId,
    pub facility: String,
    pub tier: String,
    pub matrix: HeatmapMatrix,
}

/// Response wrapper for the profiles endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub dataset_id: DatasetId,
    pub facility: String,
    pub tier: String,
    pub profiles: UsageProfiles,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connectivity status
    pub store: String,
}
