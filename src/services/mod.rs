//! Service layer for analytics computations.
//!
//! These modules hold the pure computations of the engine: dataset
//! generation, heatmap aggregation, insight derivation, profile breakdowns,
//! and the demand forecast. All of them operate on in-memory record slices
//! and take no locks; orchestration lives in `store::services`.

pub mod forecast;
pub mod generator;
pub mod heatmap;
pub mod insights;
pub mod profiles;

pub use forecast::forecast_demand;
pub use generator::generate;
pub use heatmap::build_matrix;
pub use insights::compute_insights;
pub use profiles::build_profiles;
