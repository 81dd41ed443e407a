//! High-level dataset service layer.
//!
//! Repository-agnostic dataset operations that work with any implementation
//! of [`DatasetRepository`]. These functions contain the business logic that
//! must be consistent regardless of the storage backend: axis validation
//! against the configured catalogs, generation with a seeded or entropy
//! random source, and fingerprint computation.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::fingerprint::fingerprint_records;
use super::{DatasetRepository, ErrorContext, StoreError, StoreResult};
use crate::api::DatasetId;
use crate::config::EngineConfig;
use crate::models::dataset::{Dataset, DatasetInfo, GenerationSpec};
use crate::services::generator;

/// Check if the store is healthy.
pub async fn health_check<R: DatasetRepository + ?Sized>(repo: &R) -> StoreResult<bool> {
    repo.health_check().await
}

/// Validate generation axes against the configured catalogs.
///
/// Fails fast on empty axes, duplicate axis entries, hours outside the
/// operating range, and facility/tier names missing from the catalogs.
pub fn validate_spec(config: &EngineConfig, spec: &GenerationSpec) -> StoreResult<()> {
    let context = || ErrorContext::new("validate_spec").with_entity("dataset");

    if spec.days.is_empty()
        || spec.hours.is_empty()
        || spec.facilities.is_empty()
        || spec.tiers.is_empty()
    {
        return Err(StoreError::validation_with_context(
            "every generation axis must be non-empty",
            context(),
        ));
    }

    let mut seen_days = std::collections::HashSet::new();
    for day in &spec.days {
        if !seen_days.insert(day) {
            return Err(StoreError::validation_with_context(
                format!("duplicate day in axes: {}", day),
                context(),
            ));
        }
    }

    let mut seen_hours = std::collections::HashSet::new();
    for &hour in &spec.hours {
        if !config.operating_hours.contains(hour) {
            return Err(StoreError::validation_with_context(
                format!(
                    "hour {} outside operating range {}-{}",
                    hour, config.operating_hours.start, config.operating_hours.end
                ),
                context(),
            ));
        }
        if !seen_hours.insert(hour) {
            return Err(StoreError::validation_with_context(
                format!("duplicate hour in axes: {}", hour),
                context(),
            ));
        }
    }

    let mut seen_facilities = std::collections::HashSet::new();
    for facility in &spec.facilities {
        if config.facility(facility).is_none() {
            return Err(StoreError::validation_with_context(
                format!("unknown facility: {}", facility),
                context(),
            ));
        }
        if !seen_facilities.insert(facility.as_str()) {
            return Err(StoreError::validation_with_context(
                format!("duplicate facility in axes: {}", facility),
                context(),
            ));
        }
    }

    let mut seen_tiers = std::collections::HashSet::new();
    for tier in &spec.tiers {
        if config.tier(tier).is_none() {
            return Err(StoreError::validation_with_context(
                format!("unknown tier: {}", tier),
                context(),
            ));
        }
        if !seen_tiers.insert(tier.as_str()) {
            return Err(StoreError::validation_with_context(
                format!("duplicate tier in axes: {}", tier),
                context(),
            ));
        }
    }

    Ok(())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate and store a new dataset.
///
/// Validates the axes, generates the full cross product (seeded when `seed`
/// is given), fingerprints the record set, and stores the result.
pub async fn create_dataset<R: DatasetRepository + ?Sized>(
    repo: &R,
    config: &EngineConfig,
    name: String,
    spec: GenerationSpec,
    seed: Option<u64>,
) -> StoreResult<DatasetInfo> {
    validate_spec(config, &spec).map_err(|e| e.with_operation("create_dataset"))?;

    let mut rng = rng_for(seed);
    let records = generator::generate(config, &spec, &mut rng);
    let fingerprint = fingerprint_records(&records)?;

    info!(
        "Service layer: creating dataset '{}' ({} records, seeded={})",
        name,
        records.len(),
        seed.is_some(),
    );

    repo.insert_dataset(name, spec, records, fingerprint).await
}

/// Fetch a dataset with its full record payload.
pub async fn get_dataset<R: DatasetRepository + ?Sized>(
    repo: &R,
    id: DatasetId,
) -> StoreResult<Dataset> {
    repo.get_dataset(id).await
}

/// List summaries of all stored datasets.
pub async fn list_datasets<R: DatasetRepository + ?Sized>(
    repo: &R,
) -> StoreResult<Vec<DatasetInfo>> {
    repo.list_datasets().await
}

/// Regenerate a dataset: a fresh random sample over the same axes,
/// replacing the whole record collection atomically.
pub async fn regenerate_dataset<R: DatasetRepository + ?Sized>(
    repo: &R,
    config: &EngineConfig,
    id: DatasetId,
    seed: Option<u64>,
) -> StoreResult<DatasetInfo> {
    let dataset = repo.get_dataset(id).await?;

    let mut rng = rng_for(seed);
    let records = generator::generate(config, &dataset.spec, &mut rng);
    let fingerprint = fingerprint_records(&records)?;

    if fingerprint == dataset.fingerprint {
        warn!(
            "Service layer: regeneration of dataset {} produced an identical sample",
            id
        );
    }
    info!(
        "Service layer: regenerated dataset {} ({} records)",
        id,
        records.len()
    );

    repo.replace_records(id, records, fingerprint).await
}

/// Delete a dataset.
pub async fn delete_dataset<R: DatasetRepository + ?Sized>(
    repo: &R,
    id: DatasetId,
) -> StoreResult<()> {
    info!("Service layer: deleting dataset {}", id);
    repo.delete_dataset(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::Weekday;

    fn spec_with_facility(facility: &str) -> GenerationSpec {
        GenerationSpec {
            days: vec![Weekday::Monday],
            hours: vec![10],
            facilities: vec![facility.to_string()],
            tiers: vec!["Basic Member".to_string()],
        }
    }

    #[test]
    fn test_validate_accepts_full_spec() {
        let config = EngineConfig::default();
        validate_spec(&config, &GenerationSpec::full(&config)).unwrap();
    }

    #[test]
    fn test_validate_rejects_unknown_facility() {
        let config = EngineConfig::default();
        let err = validate_spec(&config, &spec_with_facility("Tennis Courts")).unwrap_err();
        assert!(matches!(err, StoreError::ValidationError { .. }));
        assert!(err.to_string().contains("Tennis Courts"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_hour() {
        let config = EngineConfig::default();
        let mut spec = spec_with_facility("Basketball Courts");
        spec.hours = vec![3];
        assert!(validate_spec(&config, &spec).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_axis_entries() {
        let config = EngineConfig::default();
        let mut spec = spec_with_facility("Basketball Courts");
        spec.days = vec![Weekday::Monday, Weekday::Monday];
        assert!(validate_spec(&config, &spec).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_axis() {
        let config = EngineConfig::default();
        let mut spec = spec_with_facility("Basketball Courts");
        spec.tiers.clear();
        assert!(validate_spec(&config, &spec).is_err());
    }
}
