//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic. Handlers validate filter values against the
//! dataset's own catalog so dashboard typos fail fast with a 400 instead of
//! silently producing empty matrices.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateDatasetRequest, DatasetListResponse, FilterQuery, ForecastQuery, HealthResponse,
    HeatmapResponse, ProfilesResponse, RegenerateRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DatasetId, DatasetInfo, DemandForecast, HeatmapInsights, Weekday};
use crate::models::dataset::{Dataset, GenerationSpec};
use crate::services::forecast::{self, DEFAULT_FORECAST_DAYS};
use crate::services::{build_matrix, build_profiles, compute_insights};
use crate::store::services as store_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match store_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Dataset Lifecycle
// =============================================================================

/// Resolve the optional request axes against the configured catalogs.
fn resolve_spec(state: &AppState, request: &CreateDatasetRequest) -> Result<GenerationSpec, AppError> {
    let days = match &request.days {
        Some(names) => names
            .iter()
            .map(|name| {
                Weekday::from_name(name)
                    .ok_or_else(|| AppError::BadRequest(format!("unknown day name: {}", name)))
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => Weekday::ALL.to_vec(),
    };

    Ok(GenerationSpec {
        days,
        hours: request
            .hours
            .clone()
            .unwrap_or_else(|| state.config.hour_axis()),
        facilities: request
            .facilities
            .clone()
            .unwrap_or_else(|| state.config.facility_names()),
        tiers: request
            .tiers
            .clone()
            .unwrap_or_else(|| state.config.tier_names()),
    })
}

/// POST /v1/datasets
///
/// Generate and store a named dataset. Unknown axis names or out-of-range
/// hours are rejected with 400.
pub async fn create_dataset(
    State(state): State<AppState>,
    Json(request): Json<CreateDatasetRequest>,
) -> Result<(StatusCode, Json<DatasetInfo>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("dataset name must not be empty".to_string()));
    }

    let spec = resolve_spec(&state, &request)?;
    let info = store_services::create_dataset(
        state.repository.as_ref(),
        &state.config,
        request.name,
        spec,
        request.seed,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(info)))
}

/// GET /v1/datasets
///
/// List summaries of all stored datasets.
pub async fn list_datasets(State(state): State<AppState>) -> HandlerResult<DatasetListResponse> {
    let datasets = store_services::list_datasets(state.repository.as_ref()).await?;
    let total = datasets.len();

    Ok(Json(DatasetListResponse { datasets, total }))
}

/// GET /v1/datasets/{dataset_id}
///
/// Get one dataset summary.
pub async fn get_dataset(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
) -> HandlerResult<DatasetInfo> {
    let dataset =
        store_services::get_dataset(state.repository.as_ref(), DatasetId::new(dataset_id)).await?;
    Ok(Json(dataset.info()))
}

/// POST /v1/datasets/{dataset_id}/regenerate
///
/// Replace the dataset's record set with a fresh sample over the same axes.
pub async fn regenerate_dataset(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
    request: Option<Json<RegenerateRequest>>,
) -> HandlerResult<DatasetInfo> {
    let seed = request.and_then(|Json(r)| r.seed);
    let info = store_services::regenerate_dataset(
        state.repository.as_ref(),
        &state.config,
        DatasetId::new(dataset_id),
        seed,
    )
    .await?;

    Ok(Json(info))
}

/// DELETE /v1/datasets/{dataset_id}
pub async fn delete_dataset(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    store_services::delete_dataset(state.repository.as_ref(), DatasetId::new(dataset_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Analytics Endpoints
// =============================================================================

/// Reject filter values outside the dataset's own axes. `None` and `"all"`
/// pass through; the library-level builder treats them as "no filter".
fn validate_filter(
    filter: Option<&str>,
    catalog: &[String],
    dimension: &str,
) -> Result<(), AppError> {
    match filter {
        None | Some("all") => Ok(()),
        Some(value) if catalog.iter().any(|name| name == value) => Ok(()),
        Some(value) => Err(AppError::BadRequest(format!(
            "unknown {} filter: {}",
            dimension, value
        ))),
    }
}

async fn fetch_filtered(
    state: &AppState,
    dataset_id: i64,
    query: &FilterQuery,
) -> Result<Dataset, AppError> {
    let dataset =
        store_services::get_dataset(state.repository.as_ref(), DatasetId::new(dataset_id)).await?;

    validate_filter(query.facility.as_deref(), &dataset.spec.facilities, "facility")?;
    validate_filter(query.tier.as_deref(), &dataset.spec.tiers, "tier")?;

    Ok(dataset)
}

fn filter_label(filter: &Option<String>) -> String {
    filter.clone().unwrap_or_else(|| "all".to_string())
}

/// GET /v1/datasets/{dataset_id}/heatmap?facility=&tier=
///
/// Hour × day matrix of mean usage over the filtered record set.
pub async fn get_heatmap(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<HeatmapResponse> {
    let dataset = fetch_filtered(&state, dataset_id, &query).await?;

    let matrix = build_matrix(
        &dataset.records,
        &dataset.spec.hours,
        query.facility.as_deref(),
        query.tier.as_deref(),
    );

    Ok(Json(HeatmapResponse {
        dataset_id: dataset.id,
        facility: filter_label(&query.facility),
        tier: filter_label(&query.tier),
        matrix,
    }))
}

/// GET /v1/datasets/{dataset_id}/insights
///
/// Summary insights over the full record set.
pub async fn get_insights(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
) -> HandlerResult<HeatmapInsights> {
    let dataset =
        store_services::get_dataset(state.repository.as_ref(), DatasetId::new(dataset_id)).await?;
    Ok(Json(compute_insights(&dataset.records)))
}

/// GET /v1/datasets/{dataset_id}/profiles?facility=&tier=
///
/// Hourly/daily curves and facility/tier comparisons for the secondary
/// dashboard charts.
pub async fn get_profiles(
    State(state): State<AppState>,
    Path(dataset_id): Path<i64>,
    Query(query): Query<FilterQuery>,
) -> HandlerResult<ProfilesResponse> {
    let dataset = fetch_filtered(&state, dataset_id, &query).await?;

    let profiles = build_profiles(
        &dataset.records,
        &dataset.spec.hours,
        &dataset.spec.facilities,
        &dataset.spec.tiers,
        query.facility.as_deref(),
        query.tier.as_deref(),
    );

    Ok(Json(ProfilesResponse {
        dataset_id: dataset.id,
        facility: filter_label(&query.facility),
        tier: filter_label(&query.tier),
        profiles,
    }))
}

/// GET /v1/forecast?start=&days=
///
/// Demand forecast over the configured facility catalog.
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<DemandForecast> {
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    if days == 0 || days > 366 {
        return Err(AppError::BadRequest(format!(
            "forecast horizon must be between 1 and 366 days, got {}",
            days
        )));
    }

    let start = query.start.unwrap_or_else(forecast::default_start);
    let mut rng = rand::thread_rng();
    let forecast = forecast::forecast_demand(&state.config.facility_names(), start, days, &mut rng);

    Ok(Json(forecast))
}
